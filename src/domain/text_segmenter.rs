//! 文本分割器
//!
//! 章回切分、段落切分与字数统计。只做字符串层面的切分，
//! 章节/段落实体的组装在 novel 上下文中完成。

use regex::Regex;
use std::sync::OnceLock;

use super::novel::ParagraphPolicy;

/// 章回标题模式：`第` + 中文数字 + `回`
pub const CHAPTER_HEADING_PATTERN: &str = "第[一二三四五六七八九十百]+回";

/// 空行（两个及以上换行）或句号紧跟换行
const BLANK_LINE_OR_SENTENCE_PATTERN: &str = r"(?:\r?\n){2,}|。\r?\n";

/// 单个换行
const LINE_PATTERN: &str = r"\r?\n";

fn chapter_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CHAPTER_HEADING_PATTERN).expect("chapter heading pattern"))
}

fn paragraph_delimiter(policy: ParagraphPolicy) -> &'static Regex {
    static BLANK_LINE_OR_SENTENCE: OnceLock<Regex> = OnceLock::new();
    static LINE: OnceLock<Regex> = OnceLock::new();

    match policy {
        ParagraphPolicy::BlankLineOrSentence => BLANK_LINE_OR_SENTENCE.get_or_init(|| {
            Regex::new(BLANK_LINE_OR_SENTENCE_PATTERN).expect("paragraph pattern")
        }),
        ParagraphPolicy::Line => {
            LINE.get_or_init(|| Regex::new(LINE_PATTERN).expect("line pattern"))
        }
    }
}

/// 按分隔符切分，去掉首尾空白并丢弃空片段
fn split_trimmed<'a>(text: &'a str, delimiter: &Regex) -> Vec<&'a str> {
    delimiter
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// 按章回标题切分
///
/// 标题本身被移除；标题前的空白前言不算作第一回。
/// 没有任何标题时，整段文本作为唯一的一回。
pub fn split_chapters(text: &str) -> Vec<&str> {
    split_trimmed(text, chapter_heading())
}

/// 按段落策略切分章节文本
pub fn split_paragraphs(text: &str, policy: ParagraphPolicy) -> Vec<&str> {
    split_trimmed(text, paragraph_delimiter(policy))
}

/// 统计字数（去除首尾空白后的 Unicode 码点数，标点计入）
pub fn character_count(text: &str) -> usize {
    text.trim().chars().count()
}

/// 文本中章回标题的数量
pub fn count_chapter_headings(text: &str) -> usize {
    chapter_heading().find_iter(text).count()
}
