//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 章回切分
//! - 段落切分与字数统计
//! - 全书统计摘要

mod aggregate;
mod entities;
mod value_objects;

pub use aggregate::{chapter_split, SegmentedNovel};
pub use entities::{paragraph_split, Chapter, Paragraph};
pub use value_objects::{CorpusSummary, ParagraphPolicy};
