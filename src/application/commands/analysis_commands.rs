//! Analysis Commands

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::novel::{ParagraphPolicy, SegmentedNovel};

/// 分词范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeScope {
    /// 整篇原文去标点后一次分词
    #[default]
    WholeText,
    /// 逐段去标点、分词
    PerParagraph,
}

impl TokenizeScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizeScope::WholeText => "whole_text",
            TokenizeScope::PerParagraph => "per_paragraph",
        }
    }
}

/// 读入停用词表与专有词汇词典
#[derive(Debug, Clone)]
pub struct LoadLexicon {
    pub stopwords_path: PathBuf,
    /// 未配置时不注册专有词汇
    pub custom_dict_path: Option<PathBuf>,
}

/// 读入原文并切分章回/段落
#[derive(Debug, Clone)]
pub struct SegmentNovel {
    pub text_path: PathBuf,
    pub policy: ParagraphPolicy,
}

/// 统计词频
#[derive(Debug, Clone)]
pub struct CountWords<'a> {
    pub raw_text: &'a str,
    pub novel: &'a SegmentedNovel,
    pub stopwords: &'a HashSet<String>,
    pub scope: TokenizeScope,
}

/// 构建人物关系网络
#[derive(Debug, Clone)]
pub struct BuildNetwork {
    pub weights_path: PathBuf,
    pub total_paragraphs: usize,
    pub threshold: f64,
}

/// 完整分析流程
#[derive(Debug, Clone)]
pub struct RunAnalysis {
    pub text_path: PathBuf,
    pub stopwords_path: PathBuf,
    pub custom_dict_path: Option<PathBuf>,
    pub weights_path: PathBuf,
    pub policy: ParagraphPolicy,
    pub scope: TokenizeScope,
    /// 导出的高频词数量
    pub top_k: usize,
    /// 日志中展示的高频词数量
    pub display: usize,
    pub threshold: f64,
    /// 日志中展示的高频人物数量
    pub top_nodes: usize,
}
