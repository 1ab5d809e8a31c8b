pub mod aggregation;
pub mod policy;
pub mod utilization;

pub use aggregation::{ComplianceAnalyzer, DashboardSummary};
pub use policy::{select_insurer, update_policy, validate_policy, COMMON_INSURERS};
pub use utilization::{classify, utilization_percent, BuyerUtilization, UtilizationBand};
