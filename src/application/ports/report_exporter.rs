//! Report Exporter Port - 结果导出抽象
//!
//! 导出格式是下游（词云、网络图渲染）的稳定契约

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::lexicon::WordFrequency;
use crate::domain::network::{CharacterGraph, Edge, NodeIncidence};
use crate::domain::novel::{CorpusSummary, ParagraphPolicy, SegmentedNovel};

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// 图节点
#[derive(Debug, Clone, Serialize)]
pub struct NodeExport {
    pub id: String,
    /// 权重表中出现的行数（节点大小）
    pub incidence: u32,
    pub degree: usize,
}

/// 人物关系网络导出
#[derive(Debug, Clone, Serialize)]
pub struct GraphExport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub threshold: f64,
    pub total_paragraphs: usize,
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<Edge>,
}

impl GraphExport {
    pub fn new(
        run_id: Uuid,
        graph: &CharacterGraph,
        incidence: &NodeIncidence,
        threshold: f64,
        total_paragraphs: usize,
    ) -> Self {
        let nodes = graph
            .nodes()
            .map(|name| NodeExport {
                id: name.to_string(),
                incidence: incidence.count(name),
                degree: graph.degree(name),
            })
            .collect();

        Self {
            run_id,
            generated_at: Utc::now(),
            threshold,
            total_paragraphs,
            nodes,
            edges: graph.edges(),
        }
    }
}

/// 单回统计
#[derive(Debug, Clone, Serialize)]
pub struct ChapterExport {
    pub chapter: usize,
    pub paragraph_count: usize,
    pub char_count: usize,
    /// 各段字数，按段落顺序
    pub paragraph_chars: Vec<usize>,
}

/// 章回/段落统计导出
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsExport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub paragraph_policy: ParagraphPolicy,
    pub summary: CorpusSummary,
    pub chapters: Vec<ChapterExport>,
}

impl StatisticsExport {
    pub fn new(run_id: Uuid, novel: &SegmentedNovel) -> Self {
        let chapters = novel
            .chapters()
            .iter()
            .map(|c| ChapterExport {
                chapter: c.ordinal(),
                paragraph_count: c.paragraph_count(),
                char_count: c.char_count(),
                paragraph_chars: c.paragraphs().iter().map(|p| p.char_count()).collect(),
            })
            .collect();

        Self {
            run_id,
            generated_at: Utc::now(),
            paragraph_policy: novel.policy(),
            summary: novel.summary(),
            chapters,
        }
    }
}

/// 词频清单：每行 `词: 次数`
pub fn format_frequency_listing(entries: &[WordFrequency]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {}\n", e.word, e.count))
        .collect()
}

/// Report Exporter Port
#[async_trait]
pub trait ReportExporterPort: Send + Sync {
    /// 导出词频清单，返回写入的文件路径
    async fn export_frequencies(&self, entries: &[WordFrequency]) -> Result<PathBuf, ExportError>;

    /// 导出人物关系网络
    async fn export_graph(&self, graph: &GraphExport) -> Result<PathBuf, ExportError>;

    /// 导出章回/段落统计
    async fn export_statistics(&self, stats: &StatisticsExport) -> Result<PathBuf, ExportError>;
}
