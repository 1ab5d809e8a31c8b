use thiserror::Error;

/// 统一错误类型
#[derive(Debug, Error)]
pub enum ComplianceError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("unknown report kind: {0}")]
    UnknownReportKind(String),

    #[error("invalid thresholds: medium breakpoint {medium} exceeds high breakpoint {high}")]
    InvalidThresholds { medium: String, high: String },

    #[error("invalid policy: {0}")]
    InvalidPolicy(#[from] PolicyViolation),
}

/// 保单校验失败的具体原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("overdue threshold must be positive")]
    ZeroOverdueThreshold,

    #[error("coverage percentage {0} is outside 0-100")]
    CoverageOutOfRange(String),

    #[error("expiry date {expiry} is not after effective date {effective}")]
    ExpiryNotAfterEffective { effective: String, expiry: String },

    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("policy id cannot change from {from} to {to}")]
    IdChanged { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, ComplianceError>;
