use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 信用保险保单 (单例, 无历史版本)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub insurer_name: String,
    pub policy_number: String,
    pub overdue_threshold: u32,           // 逾期上报阈值 (天)
    pub coverage_percentage: BigDecimal,  // 0-100
    pub effective_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl Policy {
    /// 指定日期是否在保单有效期内 (含首尾)
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        date >= self.effective_date && date <= self.expiry_date
    }
}
