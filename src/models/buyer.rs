use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 买方风险评级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 买方 (Buyer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: String,
    pub name: String,
    pub credit_limit: BigDecimal,      // 授信额度
    pub current_exposure: BigDecimal,  // 当前敞口, 可超过授信额度
    pub is_insured: bool,
    pub risk_rating: RiskRating,
    pub country: String,
}

impl Buyer {
    /// 剩余可用额度, 超限时为负数
    pub fn available_credit(&self) -> BigDecimal {
        &self.credit_limit - &self.current_exposure
    }

    pub fn is_over_limit(&self) -> bool {
        self.current_exposure > self.credit_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buyer(limit: i64, exposure: i64) -> Buyer {
        Buyer {
            id: "B1".to_string(),
            name: "Test Buyer".to_string(),
            credit_limit: BigDecimal::from(limit),
            current_exposure: BigDecimal::from(exposure),
            is_insured: true,
            risk_rating: RiskRating::Medium,
            country: "USA".to_string(),
        }
    }

    #[test]
    fn available_credit_goes_negative_when_over_limit() {
        let b = buyer(150000, 165000);
        assert_eq!(b.available_credit(), BigDecimal::from(-15000));
        assert!(b.is_over_limit());
    }

    #[test]
    fn exposure_equal_to_limit_is_not_over_limit() {
        let b = buyer(100000, 100000);
        assert_eq!(b.available_credit(), BigDecimal::from(0));
        assert!(!b.is_over_limit());
    }

    #[test]
    fn risk_rating_serializes_capitalized() {
        let json = serde_json::to_string(&RiskRating::High).unwrap();
        assert_eq!(json, "\"High\"");
    }
}
