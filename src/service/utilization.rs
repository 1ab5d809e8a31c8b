use crate::config::Thresholds;
use crate::models::Buyer;
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// 授信利用率分档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationBand {
    Low,
    Medium,
    High,
}

/// 单个买方的利用率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerUtilization {
    pub buyer_id: String,
    pub buyer_name: String,
    /// 敞口 / 授信额度 x 100, 授信额度为 0 时为 None
    pub percent: Option<BigDecimal>,
    pub band: UtilizationBand,
    pub over_limit: bool,
}

impl BuyerUtilization {
    pub fn for_buyer(buyer: &Buyer, thresholds: &Thresholds) -> Self {
        let percent = utilization_percent(buyer);
        let band = match &percent {
            Some(p) => classify(p, thresholds),
            // 无额度但有敞口: 视为超限
            None if buyer.current_exposure > BigDecimal::zero() => UtilizationBand::High,
            None => UtilizationBand::Low,
        };

        Self {
            buyer_id: buyer.id.clone(),
            buyer_name: buyer.name.clone(),
            percent,
            band,
            over_limit: buyer.is_over_limit(),
        }
    }

    /// 保留一位小数的利用率, 用于展示和导出
    pub fn display_percent(&self) -> Option<BigDecimal> {
        self.percent.as_ref().map(round_one_decimal)
    }
}

/// 计算利用率百分比; 授信额度不为正时返回 None
pub fn utilization_percent(buyer: &Buyer) -> Option<BigDecimal> {
    if buyer.credit_limit <= BigDecimal::zero() {
        return None;
    }
    Some(&buyer.current_exposure * BigDecimal::from(100) / &buyer.credit_limit)
}

/// 分档: > high 为高; > medium 且 <= high 为中; 其余为低
pub fn classify(percent: &BigDecimal, thresholds: &Thresholds) -> UtilizationBand {
    if *percent > thresholds.high_utilization {
        UtilizationBand::High
    } else if *percent > thresholds.medium_utilization {
        UtilizationBand::Medium
    } else {
        UtilizationBand::Low
    }
}

pub(crate) fn round_one_decimal(value: &BigDecimal) -> BigDecimal {
    value.round(1).with_scale(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskRating;

    fn buyer(limit: i64, exposure: i64) -> Buyer {
        Buyer {
            id: "4".to_string(),
            name: "Pacific Imports LLC".to_string(),
            credit_limit: BigDecimal::from(limit),
            current_exposure: BigDecimal::from(exposure),
            is_insured: false,
            risk_rating: RiskRating::High,
            country: "USA".to_string(),
        }
    }

    fn band_of(limit: i64, exposure: i64) -> UtilizationBand {
        BuyerUtilization::for_buyer(&buyer(limit, exposure), &Thresholds::default()).band
    }

    #[test]
    fn bands_follow_ratio() {
        assert_eq!(band_of(100, 95), UtilizationBand::High);
        assert_eq!(band_of(100, 75), UtilizationBand::Medium);
        assert_eq!(band_of(100, 50), UtilizationBand::Low);
    }

    #[test]
    fn breakpoints_are_upper_inclusive() {
        assert_eq!(band_of(1000, 900), UtilizationBand::Medium);
        assert_eq!(band_of(1000, 901), UtilizationBand::High);
        assert_eq!(band_of(1000, 700), UtilizationBand::Low);
        assert_eq!(band_of(1000, 701), UtilizationBand::Medium);
    }

    #[test]
    fn over_limit_buyer_reports_110_percent() {
        let u = BuyerUtilization::for_buyer(&buyer(150000, 165000), &Thresholds::default());
        assert_eq!(u.display_percent().unwrap().to_string(), "110.0");
        assert_eq!(u.band, UtilizationBand::High);
        assert!(u.over_limit);
    }

    #[test]
    fn zero_credit_limit_has_no_percentage() {
        let with_exposure = BuyerUtilization::for_buyer(&buyer(0, 10), &Thresholds::default());
        assert_eq!(with_exposure.percent, None);
        assert_eq!(with_exposure.band, UtilizationBand::High);
        assert!(with_exposure.over_limit);

        let empty = BuyerUtilization::for_buyer(&buyer(0, 0), &Thresholds::default());
        assert_eq!(empty.percent, None);
        assert_eq!(empty.band, UtilizationBand::Low);
        assert!(!empty.over_limit);
    }

    #[test]
    fn custom_breakpoints_shift_bands() {
        let thresholds = Thresholds {
            high_utilization: BigDecimal::from(80),
            medium_utilization: BigDecimal::from(50),
            ..Thresholds::default()
        };
        let u = BuyerUtilization::for_buyer(&buyer(100, 85), &thresholds);
        assert_eq!(u.band, UtilizationBand::High);
        let u = BuyerUtilization::for_buyer(&buyer(100, 60), &thresholds);
        assert_eq!(u.band, UtilizationBand::Medium);
    }

    #[test]
    fn display_percent_rounds_to_one_decimal() {
        // 2/3 = 66.666...
        let u = BuyerUtilization::for_buyer(&buyer(3, 2), &Thresholds::default());
        assert_eq!(u.display_percent().unwrap().to_string(), "66.7");
        let u = BuyerUtilization::for_buyer(&buyer(500000, 425000), &Thresholds::default());
        assert_eq!(u.display_percent().unwrap().to_string(), "85.0");
    }
}
