use super::formatter::{aging_csv, exposure_csv, overdue_csv};
use super::kind::ReportKind;
use crate::error::Result;
use crate::service::ComplianceAnalyzer;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_MIME_TYPE: &str = "text/csv";

/// 可下载的报表文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedReport {
    pub kind: ReportKind,
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
    /// 数据行数 (不含表头), 取自源数据集合
    pub record_count: usize,
}

/// 报表目录项 (标题、说明、目标保险人、记录数)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDescriptor {
    pub kind: ReportKind,
    pub title: &'static str,
    pub description: &'static str,
    pub insurer: String,
    pub record_count: usize,
}

/// 报表对应的源记录数
fn source_len(kind: ReportKind, analyzer: &ComplianceAnalyzer<'_>) -> usize {
    let portfolio = analyzer.portfolio();
    match kind {
        ReportKind::Overdue => analyzer.overdue_invoices().len(),
        ReportKind::Aging => portfolio.invoices.len(),
        ReportKind::Exposure => portfolio.buyers.len(),
    }
}

/// 生成指定类型报表的 CSV 内容
pub fn render(kind: ReportKind, analyzer: &ComplianceAnalyzer<'_>) -> Result<String> {
    let portfolio = analyzer.portfolio();
    match kind {
        ReportKind::Overdue => overdue_csv(analyzer.overdue_invoices()),
        ReportKind::Aging => aging_csv(&portfolio.invoices),
        ReportKind::Exposure => exposure_csv(&portfolio.buyers),
    }
}

pub fn export(
    kind: ReportKind,
    analyzer: &ComplianceAnalyzer<'_>,
    date: NaiveDate,
) -> Result<ExportedReport> {
    let content = render(kind, analyzer)?;
    let report = ExportedReport {
        kind,
        filename: kind.filename(date),
        mime_type: CSV_MIME_TYPE,
        content,
        record_count: source_len(kind, analyzer),
    };
    tracing::debug!("生成报表 {}: {} 条记录", report.filename, report.record_count);
    Ok(report)
}

pub fn catalog(analyzer: &ComplianceAnalyzer<'_>) -> Vec<ReportDescriptor> {
    let portfolio = analyzer.portfolio();
    ReportKind::ALL
        .iter()
        .map(|&kind| {
            let insurer = match kind {
                ReportKind::Aging => "All Insurers".to_string(),
                ReportKind::Overdue | ReportKind::Exposure => portfolio.policy.insurer_name.clone(),
            };
            ReportDescriptor {
                kind,
                title: kind.title(),
                description: kind.description(),
                insurer,
                record_count: source_len(kind, analyzer),
            }
        })
        .collect()
}

impl ExportedReport {
    /// 写入目录, 返回文件路径
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, self.content.as_bytes())?;
        tracing::info!("报表已导出: {}", path.display());
        Ok(path)
    }
}
