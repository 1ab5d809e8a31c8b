use super::{Buyer, Invoice, Policy};
use serde::{Deserialize, Serialize};

/// 一次计算所需的全部数据 (买方、发票、保单)
///
/// 由调用方持有, 聚合与报表模块只借用, 不做任何修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub buyers: Vec<Buyer>,
    pub invoices: Vec<Invoice>,
    pub policy: Policy,
}

impl Portfolio {
    pub fn new(buyers: Vec<Buyer>, invoices: Vec<Invoice>, policy: Policy) -> Self {
        Self {
            buyers,
            invoices,
            policy,
        }
    }

    /// 替换保单, 返回新的数据集
    pub fn with_policy(&self, policy: Policy) -> Self {
        Self {
            buyers: self.buyers.clone(),
            invoices: self.invoices.clone(),
            policy,
        }
    }
}
