use crate::error::{ComplianceError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 三种固定报表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Overdue,
    Aging,
    Exposure,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Overdue, ReportKind::Aging, ReportKind::Exposure];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Overdue => "overdue",
            ReportKind::Aging => "aging",
            ReportKind::Exposure => "exposure",
        }
    }

    /// 导出文件名前缀
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ReportKind::Overdue => "overdue-invoices",
            ReportKind::Aging => "aging-report",
            ReportKind::Exposure => "credit-exposure",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Overdue => "Overdue Invoices Report",
            ReportKind::Aging => "Accounts Receivable Aging",
            ReportKind::Exposure => "Credit Exposure Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportKind::Overdue => {
                "Export all invoices that are past their due date for submission to your insurer."
            }
            ReportKind::Aging => {
                "Complete aging report showing all outstanding invoices with payment status."
            }
            ReportKind::Exposure => {
                "Summary of buyer credit limits, current exposure, and utilization rates."
            }
        }
    }

    /// `<prefix>-<YYYY-MM-DD>.csv`
    pub fn filename(&self, date: NaiveDate) -> String {
        format!("{}-{}.csv", self.file_prefix(), date.format("%Y-%m-%d"))
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overdue" => Ok(ReportKind::Overdue),
            "aging" => Ok(ReportKind::Aging),
            "exposure" => Ok(ReportKind::Exposure),
            _ => Err(ComplianceError::UnknownReportKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_case_insensitively() {
        assert_eq!("overdue".parse::<ReportKind>().unwrap(), ReportKind::Overdue);
        assert_eq!(" Aging ".parse::<ReportKind>().unwrap(), ReportKind::Aging);
        assert_eq!("EXPOSURE".parse::<ReportKind>().unwrap(), ReportKind::Exposure);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "ledger".parse::<ReportKind>().unwrap_err();
        assert!(matches!(err, ComplianceError::UnknownReportKind(k) if k == "ledger"));
    }

    #[test]
    fn filename_uses_prefix_and_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        assert_eq!(ReportKind::Overdue.filename(date), "overdue-invoices-2025-11-10.csv");
        assert_eq!(ReportKind::Aging.filename(date), "aging-report-2025-11-10.csv");
        assert_eq!(ReportKind::Exposure.filename(date), "credit-exposure-2025-11-10.csv");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
        }
    }
}
