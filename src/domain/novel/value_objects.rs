//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

/// 段落切分策略
///
/// 两种策略互不兼容，同一次分析只能选用一种：
/// - `BlankLineOrSentence`: 空行或句号换行处切分，段落粒度，适合作为人物网络权重的归一化基数
/// - `Line`: 每个换行处切分，行粒度，段落数明显更多
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphPolicy {
    BlankLineOrSentence,
    Line,
}

impl ParagraphPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphPolicy::BlankLineOrSentence => "blank_line_or_sentence",
            ParagraphPolicy::Line => "line",
        }
    }
}

impl Default for ParagraphPolicy {
    fn default() -> Self {
        ParagraphPolicy::BlankLineOrSentence
    }
}

impl std::fmt::Display for ParagraphPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ParagraphPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blank_line_or_sentence" => Ok(ParagraphPolicy::BlankLineOrSentence),
            "line" => Ok(ParagraphPolicy::Line),
            other => Err(format!("unknown paragraph policy: {}", other)),
        }
    }
}

/// 全书统计摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    pub chapter_count: usize,
    pub paragraph_count: usize,
    pub char_count: usize,
    /// 平均段落字数（无段落时为空）
    pub mean_paragraph_chars: Option<f64>,
    pub max_paragraph_chars: Option<usize>,
    pub min_paragraph_chars: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_round_trip_names() {
        for policy in [ParagraphPolicy::BlankLineOrSentence, ParagraphPolicy::Line] {
            assert_eq!(policy.as_str().parse::<ParagraphPolicy>().unwrap(), policy);
        }
        assert!("double_newline".parse::<ParagraphPolicy>().is_err());
    }

    #[test]
    fn test_policy_deserializes_snake_case() {
        let policy: ParagraphPolicy = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(policy, ParagraphPolicy::Line);
    }
}
