//! Novel Command Handlers

use std::sync::Arc;

use crate::application::commands::SegmentNovel;
use crate::application::error::ApplicationError;
use crate::application::ports::TextSourcePort;
use crate::domain::count_chapter_headings;
use crate::domain::novel::SegmentedNovel;

// ============================================================================
// SegmentNovel
// ============================================================================

/// 切分结果
#[derive(Debug, Clone)]
pub struct SegmentNovelResponse {
    /// 原文（整篇分词时使用）
    pub raw_text: String,
    pub novel: SegmentedNovel,
}

/// SegmentNovel Handler - 读入原文并切分章回/段落
pub struct SegmentNovelHandler {
    text_source: Arc<dyn TextSourcePort>,
}

impl SegmentNovelHandler {
    pub fn new(text_source: Arc<dyn TextSourcePort>) -> Self {
        Self { text_source }
    }

    pub async fn handle(
        &self,
        command: SegmentNovel,
    ) -> Result<SegmentNovelResponse, ApplicationError> {
        let raw_text = self.text_source.read_text(&command.text_path).await?;

        if count_chapter_headings(&raw_text) == 0 {
            tracing::warn!(
                path = %command.text_path.display(),
                "No chapter headings found, treating the whole text as one chapter"
            );
        }

        let novel = SegmentedNovel::segment(&raw_text, command.policy);

        for chapter in novel.chapters() {
            tracing::debug!(
                chapter = chapter.ordinal(),
                paragraphs = chapter.paragraph_count(),
                chars = chapter.char_count(),
                "Chapter segmented"
            );
        }

        let summary = novel.summary();
        tracing::info!(
            path = %command.text_path.display(),
            policy = %command.policy,
            chapters = summary.chapter_count,
            paragraphs = summary.paragraph_count,
            chars = summary.char_count,
            "Novel segmented"
        );
        if let (Some(mean), Some(max), Some(min)) = (
            summary.mean_paragraph_chars,
            summary.max_paragraph_chars,
            summary.min_paragraph_chars,
        ) {
            tracing::info!(
                mean = %format!("{:.2}", mean),
                max = max,
                min = min,
                "Paragraph length"
            );
        }

        Ok(SegmentNovelResponse { raw_text, novel })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::test_support::InMemoryTextSource;
    use crate::domain::novel::ParagraphPolicy;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_segment_novel() {
        let source = InMemoryTextSource::new().with_file("novel.txt", "第一回\nA\n\n第二回\nB\nC");
        let handler = SegmentNovelHandler::new(Arc::new(source));

        let response = handler
            .handle(SegmentNovel {
                text_path: PathBuf::from("novel.txt"),
                policy: ParagraphPolicy::Line,
            })
            .await
            .unwrap();

        assert_eq!(response.novel.chapter_count(), 2);
        assert_eq!(response.novel.total_paragraphs(), 3);
        assert!(response.raw_text.starts_with("第一回"));
    }

    #[tokio::test]
    async fn test_missing_text_is_fatal() {
        let handler = SegmentNovelHandler::new(Arc::new(InMemoryTextSource::new()));

        let err = handler
            .handle(SegmentNovel {
                text_path: PathBuf::from("missing.txt"),
                policy: ParagraphPolicy::BlankLineOrSentence,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::SourceUnavailable(_)));
    }
}
