//! 分词前的文本规范化

use regex::Regex;
use std::sync::OnceLock;

/// 非字母数字、非空白的字符（标点、符号）
const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PUNCTUATION_PATTERN).expect("punctuation pattern"))
}

/// 去除所有标点和符号，只保留字母、数字（含汉字）与空白
///
/// 必须在文本交给分词器之前调用。
pub fn normalize(text: &str) -> String {
    punctuation().replace_all(text, "").into_owned()
}
