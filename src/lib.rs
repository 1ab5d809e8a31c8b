pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod report;
pub mod service;

pub use config::{AppConfig, Thresholds};
pub use error::{ComplianceError, PolicyViolation, Result};
pub use service::ComplianceAnalyzer;
