//! Tokenizer Adapters

mod jieba_tokenizer;

pub use jieba_tokenizer::JiebaTokenizer;
