//! Export Adapters - 结果导出

mod file_exporter;

pub use file_exporter::{FileExporterConfig, FileReportExporter};
