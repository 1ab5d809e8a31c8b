pub mod export;
pub mod formatter;
pub mod kind;

pub use export::{catalog, export, render, ExportedReport, ReportDescriptor, CSV_MIME_TYPE};
pub use formatter::{aging_csv, exposure_csv, insurance_label, overdue_csv};
pub use kind::ReportKind;
