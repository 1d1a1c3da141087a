//! Hongxue - 《红楼梦》文本统计与人物关系网络分析
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 章回/段落切分与篇幅统计
//! - Lexicon Context: 标点清理与词频表
//! - Network Context: 共现权重归一化与人物关系图
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TextSource, WeightSource, Tokenizer, ReportExporter）
//! - Commands: 命令处理器，RunAnalysis 串起完整流程
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件读取、CSV 权重表、jieba 分词、结果导出

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
