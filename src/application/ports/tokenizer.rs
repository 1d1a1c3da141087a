//! Tokenizer Port - 分词器抽象
//!
//! 定义中文分词的抽象接口，具体实现在 infrastructure/adapters 层

/// Tokenizer Port
///
/// 分词前文本必须已经去除标点（见 `domain::lexicon::normalize`）。
pub trait TokenizerPort: Send + Sync {
    /// 注册专有词汇，使其在分词时保持完整
    ///
    /// 必须在第一次 `tokenize` 之前调用。
    fn add_custom_term(&mut self, term: &str);

    /// 惰性分词
    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a>;
}
