use crate::error::{ComplianceError, Result};
use bigdecimal::BigDecimal;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub thresholds: Thresholds,
    pub report: ReportConfig,
}

/// 业务阈值 (利用率分档与预警系数)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// 高于此百分比为高利用率
    pub high_utilization: BigDecimal,
    /// 高于此百分比 (且不高于 high) 为中利用率
    pub medium_utilization: BigDecimal,
    /// 逾期天数达到 阈值 x 该系数 即进入预警
    pub warning_ratio: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_utilization: BigDecimal::from(90),
            medium_utilization: BigDecimal::from(70),
            warning_ratio: BigDecimal::from(7) / BigDecimal::from(10),
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        if self.medium_utilization > self.high_utilization {
            return Err(ComplianceError::InvalidThresholds {
                medium: self.medium_utilization.to_string(),
                high: self.high_utilization.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            report: ReportConfig {
                output_dir: PathBuf::from("reports"),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置 (前缀 COMPLIANCE, 分隔符 __)
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix("COMPLIANCE").separator("__"))
    }

    fn load(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("thresholds.high_utilization", "90")?
            .set_default("thresholds.medium_utilization", "70")?
            .set_default("thresholds.warning_ratio", "0.7")?
            .set_default("report.output_dir", "reports")?
            .add_source(env)
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.thresholds.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("COMPLIANCE")
            .separator("__")
            .source(Some(vars))
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::load(env_from(&[])).unwrap();
        assert_eq!(config.thresholds, Thresholds::default());
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn environment_overrides_thresholds() {
        let config = AppConfig::load(env_from(&[
            ("COMPLIANCE__THRESHOLDS__HIGH_UTILIZATION", "95"),
            ("COMPLIANCE__THRESHOLDS__WARNING_RATIO", "0.5"),
            ("COMPLIANCE__REPORT__OUTPUT_DIR", "/tmp/out"),
        ]))
        .unwrap();
        assert_eq!(config.thresholds.high_utilization, BigDecimal::from(95));
        assert_eq!(config.thresholds.medium_utilization, BigDecimal::from(70));
        assert_eq!(
            config.thresholds.warning_ratio,
            BigDecimal::from_str("0.5").unwrap()
        );
        assert_eq!(config.report.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn medium_above_high_is_rejected() {
        let err = AppConfig::load(env_from(&[(
            "COMPLIANCE__THRESHOLDS__MEDIUM_UTILIZATION",
            "95",
        )]))
        .unwrap_err();
        assert!(matches!(err, ComplianceError::InvalidThresholds { .. }));
    }

    #[test]
    fn default_warning_ratio_is_exactly_seven_tenths() {
        assert_eq!(
            Thresholds::default().warning_ratio,
            BigDecimal::from_str("0.7").unwrap()
        );
    }
}
