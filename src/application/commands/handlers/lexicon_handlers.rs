//! Lexicon Command Handlers

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::commands::{CountWords, LoadLexicon, TokenizeScope};
use crate::application::error::ApplicationError;
use crate::application::ports::{TextSourcePort, TokenizerPort};
use crate::domain::lexicon::{normalize, FrequencyTable};

// ============================================================================
// LoadLexicon
// ============================================================================

/// 停用词表与专有词汇
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub stopwords: HashSet<String>,
    pub custom_terms: Vec<String>,
}

/// LoadLexicon Handler
pub struct LoadLexiconHandler {
    text_source: Arc<dyn TextSourcePort>,
}

impl LoadLexiconHandler {
    pub fn new(text_source: Arc<dyn TextSourcePort>) -> Self {
        Self { text_source }
    }

    pub async fn handle(&self, command: LoadLexicon) -> Result<Lexicon, ApplicationError> {
        let stopwords: HashSet<String> = self
            .text_source
            .read_lines(&command.stopwords_path)
            .await?
            .into_iter()
            .collect();

        let custom_terms = match &command.custom_dict_path {
            Some(path) => self.text_source.read_lines(path).await?,
            None => Vec::new(),
        };

        tracing::info!(
            stopwords = stopwords.len(),
            custom_terms = custom_terms.len(),
            "Lexicon loaded"
        );

        Ok(Lexicon {
            stopwords,
            custom_terms,
        })
    }
}

// ============================================================================
// CountWords
// ============================================================================

/// CountWords Handler - 去标点、分词、统计词频
pub struct CountWordsHandler {
    tokenizer: Box<dyn TokenizerPort>,
}

impl CountWordsHandler {
    pub fn new(tokenizer: Box<dyn TokenizerPort>) -> Self {
        Self { tokenizer }
    }

    /// 在分词前注册专有词汇，返回注册数量
    pub fn register_custom_terms(&mut self, terms: &[String]) -> usize {
        for term in terms {
            self.tokenizer.add_custom_term(term);
        }
        terms.len()
    }

    pub fn handle(&self, command: CountWords<'_>) -> FrequencyTable {
        let table = match command.scope {
            TokenizeScope::WholeText => {
                let normalized = normalize(command.raw_text);
                FrequencyTable::aggregate(self.tokenizer.tokenize(&normalized), command.stopwords)
            }
            TokenizeScope::PerParagraph => {
                let normalized: Vec<String> = command
                    .novel
                    .paragraphs()
                    .map(|p| normalize(p.text()))
                    .collect();
                let tokens = normalized.iter().flat_map(|text| self.tokenizer.tokenize(text));
                FrequencyTable::aggregate(tokens, command.stopwords)
            }
        };

        tracing::info!(
            scope = command.scope.as_str(),
            distinct_words = table.len(),
            counted = table.counted_tokens(),
            rejected = table.rejected_tokens(),
            "Word frequencies counted"
        );

        table
    }
}
