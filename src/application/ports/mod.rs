//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod report_exporter;
mod text_source;
mod tokenizer;
mod weight_source;

pub use report_exporter::{
    format_frequency_listing, ChapterExport, ExportError, GraphExport, NodeExport,
    ReportExporterPort, StatisticsExport,
};
pub use text_source::{SourceError, TextSourcePort};
pub use tokenizer::TokenizerPort;
pub use weight_source::{WeightRelation, WeightRowError, WeightSourcePort};
