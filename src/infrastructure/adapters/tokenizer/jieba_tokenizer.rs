//! Jieba Tokenizer - 基于 jieba 词典与 HMM 的中文分词
//!
//! 实现 TokenizerPort trait。专有词汇通过 `add_word` 加入词典，
//! 未登录词由 HMM 识别。

use jieba_rs::Jieba;

use crate::application::ports::TokenizerPort;

/// jieba 分词器（内置默认词典）
pub struct JiebaTokenizer {
    jieba: Jieba,
    custom_terms: usize,
}

impl JiebaTokenizer {
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            custom_terms: 0,
        }
    }

    /// 已注册的专有词汇数量
    pub fn custom_term_count(&self) -> usize {
        self.custom_terms
    }
}

impl Default for JiebaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerPort for JiebaTokenizer {
    fn add_custom_term(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        // 不指定词频时 jieba 会给出足以整体切出的词频
        self.jieba.add_word(term, None, None);
        self.custom_terms += 1;
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(
            self.jieba
                .cut(text, true)
                .into_iter()
                .filter(|token| !token.trim().is_empty())
                .map(str::to_string),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lexicon::{normalize, FrequencyTable};
    use std::collections::HashSet;

    fn tokens(tokenizer: &JiebaTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).collect()
    }

    #[test]
    fn test_general_words_are_counted() {
        let tokenizer = JiebaTokenizer::new();
        let text = normalize("宝玉笑道：“我们如今说什么好？”黛玉听了，便说道：“什么都好。”");

        let table = FrequencyTable::aggregate(tokenizer.tokenize(&text), &HashSet::new());

        assert!(!table.is_empty());
        assert_eq!(table.count_of("我们"), Some(1));
        assert!(table.count_of("什么").is_some());
        assert!(table.entries().iter().all(|e| e.word.chars().count() >= 2));
    }

    #[test]
    fn test_custom_term_stays_intact() {
        let mut tokenizer = JiebaTokenizer::new();
        tokenizer.add_custom_term(" 绛珠仙草 ");
        tokenizer.add_custom_term("   ");

        assert_eq!(tokenizer.custom_term_count(), 1);
        assert!(tokens(&tokenizer, "那绛珠仙草受天地精华")
            .iter()
            .any(|t| t == "绛珠仙草"));
    }

    #[test]
    fn test_whitespace_is_not_a_token() {
        let tokenizer = JiebaTokenizer::new();
        let result = tokens(&tokenizer, "宝玉\r\n\r\n黛玉  宝钗\n");

        assert!(!result.is_empty());
        assert!(result.iter().all(|t| !t.trim().is_empty()));
    }
}
