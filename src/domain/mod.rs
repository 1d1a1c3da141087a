//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Novel Context: 章回/段落切分与字数统计
//! - Lexicon Context: 词频统计
//! - Network Context: 人物关系网络

pub mod lexicon;
pub mod network;
pub mod novel;

// 共享的文本分割器
mod text_segmenter;

pub use text_segmenter::{
    character_count, count_chapter_headings, split_chapters, split_paragraphs,
    CHAPTER_HEADING_PATTERN,
};
