use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 发票付款状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 应收发票 (Invoice)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub buyer_id: String,          // 关联买方ID (不强制校验)
    pub buyer_name: String,        // 冗余买方名称
    pub amount: BigDecimal,        // 金额
    pub due_date: NaiveDate,       // 到期日
    pub status: InvoiceStatus,
    pub days_overdue: u32,         // 仅 overdue 时有意义, 其余为 0
    pub is_insured: bool,
}

impl Invoice {
    pub fn is_overdue(&self) -> bool {
        self.status == InvoiceStatus::Overdue
    }

    /// 未结清 (pending 或 overdue)
    pub fn is_outstanding(&self) -> bool {
        self.status != InvoiceStatus::Paid
    }
}
