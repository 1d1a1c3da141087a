//! 词频统计

use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// 保留词语的最小字数
pub const MIN_WORD_CHARS: usize = 2;

/// 单个词的频次
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// 词频表
///
/// 不变量:
/// - 按频次降序排列，频次相同时保持首次出现的顺序
/// - 每个词只出现一次
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    entries: Vec<WordFrequency>,
    /// 计入统计的词语总数
    counted_tokens: u64,
    /// 被过滤掉的词语数（过短或停用词）
    rejected_tokens: u64,
}

impl FrequencyTable {
    /// 统计一个词语序列
    ///
    /// 字数小于 2 或属于停用词的词语被丢弃。
    pub fn aggregate<I, S>(tokens: I, stopwords: &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<WordFrequency> = Vec::new();
        let mut counted_tokens = 0u64;
        let mut rejected_tokens = 0u64;

        for token in tokens {
            let token = token.as_ref();
            if token.chars().count() < MIN_WORD_CHARS || stopwords.contains(token) {
                rejected_tokens += 1;
                continue;
            }

            counted_tokens += 1;
            match index.get(token) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(token.to_string(), entries.len());
                    entries.push(WordFrequency {
                        word: token.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // 稳定排序，同频次保持首次出现顺序
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            entries,
            counted_tokens,
            rejected_tokens,
        }
    }

    /// 取前 k 个高频词；k 超过词表大小时返回全部
    pub fn top_k(&self, k: usize) -> &[WordFrequency] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }

    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.count)
    }

    /// 不同词的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counted_tokens(&self) -> u64 {
        self.counted_tokens
    }

    pub fn rejected_tokens(&self) -> u64 {
        self.rejected_tokens
    }
}

/// 取前 k 个高频词
pub fn top_k(table: &FrequencyTable, k: usize) -> &[WordFrequency] {
    table.top_k(k)
}
