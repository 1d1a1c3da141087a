//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Tokenizer、TextSource、WeightSource、ReportExporter）
//! - commands: 分析流程的命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    BuildNetwork, CountWords, LoadLexicon, RunAnalysis, SegmentNovel, TokenizeScope,
    // Handlers
    handlers::{
        AnalysisReport, BuildNetworkHandler, BuildNetworkResponse, CountWordsHandler, Lexicon,
        LoadLexiconHandler, RunAnalysisHandler, SegmentNovelHandler, SegmentNovelResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Exports
    format_frequency_listing,
    ChapterExport,
    ExportError,
    GraphExport,
    NodeExport,
    ReportExporterPort,
    StatisticsExport,
    // Sources
    SourceError,
    TextSourcePort,
    WeightRelation,
    WeightRowError,
    WeightSourcePort,
    // Tokenizer
    TokenizerPort,
};
