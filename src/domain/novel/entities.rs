//! Novel Context - Entities

use serde::Serialize;

use super::ParagraphPolicy;
use crate::domain::text_segmenter::{character_count, split_paragraphs};

/// 段落
///
/// 不变量:
/// - text 已去除首尾空白且非空
/// - char_count == text 的码点数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// 所属章回序号（从 1 开始）
    chapter: usize,
    /// 章内序号（从 1 开始）
    ordinal: usize,
    text: String,
    char_count: usize,
}

impl Paragraph {
    fn new(chapter: usize, ordinal: usize, text: &str) -> Self {
        let text = text.trim().to_string();
        let char_count = character_count(&text);
        Self {
            chapter,
            ordinal,
            text,
            char_count,
        }
    }

    pub fn chapter(&self) -> usize {
        self.chapter
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

/// 按策略把一回的正文切成段落
pub fn paragraph_split(chapter: usize, text: &str, policy: ParagraphPolicy) -> Vec<Paragraph> {
    split_paragraphs(text, policy)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Paragraph::new(chapter, i + 1, p))
        .collect()
}

/// 章回
///
/// 不变量:
/// - ordinal 从 1 开始且连续
/// - char_count == 各段落 char_count 之和
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    ordinal: usize,
    text: String,
    paragraphs: Vec<Paragraph>,
    char_count: usize,
}

impl Chapter {
    pub fn new(ordinal: usize, text: &str, policy: ParagraphPolicy) -> Self {
        let text = text.trim().to_string();
        let paragraphs = paragraph_split(ordinal, &text, policy);
        let char_count = paragraphs.iter().map(Paragraph::char_count).sum();
        Self {
            ordinal,
            text,
            paragraphs,
            char_count,
        }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// 去除标题后的正文
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }
}
