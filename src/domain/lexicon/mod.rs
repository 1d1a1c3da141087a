//! Lexicon Context - 词频限界上下文
//!
//! 职责:
//! - 分词前的标点去除
//! - 词语过滤与词频排序

mod frequency;
mod normalize;

pub use frequency::{top_k, FrequencyTable, WordFrequency, MIN_WORD_CHARS};
pub use normalize::normalize;
