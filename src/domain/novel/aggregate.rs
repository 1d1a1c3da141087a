//! Novel Context - Aggregate Root

use serde::Serialize;

use super::{Chapter, CorpusSummary, Paragraph, ParagraphPolicy};
use crate::domain::text_segmenter::split_chapters;

/// 按章回切分原文
///
/// 每个非空章回按 `policy` 再切成段落；序号从 1 开始连续编号。
pub fn chapter_split(text: &str, policy: ParagraphPolicy) -> Vec<Chapter> {
    split_chapters(text)
        .into_iter()
        .enumerate()
        .map(|(i, chapter)| Chapter::new(i + 1, chapter, policy))
        .collect()
}

/// 已切分的小说 - 聚合根
///
/// 不变量:
/// - 章回顺序与原文一致，创建后不可变
/// - 总段落数只由同一 policy 计算得到
#[derive(Debug, Clone, Serialize)]
pub struct SegmentedNovel {
    policy: ParagraphPolicy,
    chapters: Vec<Chapter>,
}

impl SegmentedNovel {
    /// 切分原文
    pub fn segment(text: &str, policy: ParagraphPolicy) -> Self {
        Self {
            policy,
            chapters: chapter_split(text, policy),
        }
    }

    pub fn policy(&self) -> ParagraphPolicy {
        self.policy
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// 按原文顺序遍历全部段落
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.chapters.iter().flat_map(|c| c.paragraphs().iter())
    }

    /// 全书段落总数（人物网络权重的归一化基数）
    pub fn total_paragraphs(&self) -> usize {
        self.chapters.iter().map(Chapter::paragraph_count).sum()
    }

    pub fn total_chars(&self) -> usize {
        self.chapters.iter().map(Chapter::char_count).sum()
    }

    pub fn summary(&self) -> CorpusSummary {
        let paragraph_count = self.total_paragraphs();
        let char_count = self.total_chars();
        let mean_paragraph_chars = if paragraph_count == 0 {
            None
        } else {
            Some(char_count as f64 / paragraph_count as f64)
        };

        CorpusSummary {
            chapter_count: self.chapter_count(),
            paragraph_count,
            char_count,
            mean_paragraph_chars,
            max_paragraph_chars: self.paragraphs().map(Paragraph::char_count).max(),
            min_paragraph_chars: self.paragraphs().map(Paragraph::char_count).min(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "第一回 甄士隐梦幻识通灵\n此书开卷也。\n作者自云。\n\n\
                          第二回 贾夫人仙逝扬州城\n诗云：\n一局输赢料不真，\n香销茶尽尚逡巡。\n\n\
                          第三回\n却说雨村忙回头看时。";

    #[test]
    fn test_example_text() {
        let chapters = chapter_split("第一回\nA\n\n第二回\nB\nC", ParagraphPolicy::Line);

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].text(), "A");
        assert_eq!(chapters[1].text(), "B\nC");
        assert_eq!(chapters[1].paragraph_count(), 2);
        assert_eq!(chapters[1].paragraphs()[0].text(), "B");
        assert_eq!(chapters[1].paragraphs()[1].text(), "C");
    }

    #[test]
    fn test_ordinals_are_contiguous() {
        let novel = SegmentedNovel::segment(SAMPLE, ParagraphPolicy::Line);
        let ordinals: Vec<usize> = novel.chapters().iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_headings_single_chapter() {
        let novel = SegmentedNovel::segment("满纸荒唐言，\n一把辛酸泪。", ParagraphPolicy::Line);
        assert_eq!(novel.chapter_count(), 1);
        assert_eq!(novel.total_paragraphs(), 2);
    }

    #[test]
    fn test_aggregation_consistency() {
        for policy in [ParagraphPolicy::BlankLineOrSentence, ParagraphPolicy::Line] {
            let novel = SegmentedNovel::segment(SAMPLE, policy);
            let by_paragraph: usize = novel.paragraphs().map(|p| p.char_count()).sum();
            let by_chapter: usize = novel.chapters().iter().map(|c| c.char_count()).sum();
            assert_eq!(by_paragraph, by_chapter);
            assert_eq!(novel.total_chars(), by_chapter);
        }
    }

    #[test]
    fn test_policies_give_different_paragraph_totals() {
        let coarse = SegmentedNovel::segment(SAMPLE, ParagraphPolicy::BlankLineOrSentence);
        let fine = SegmentedNovel::segment(SAMPLE, ParagraphPolicy::Line);

        // 单换行在策略 A 下不切分
        assert_eq!(coarse.total_paragraphs(), 2 + 1 + 1);
        assert_eq!(fine.total_paragraphs(), 3 + 4 + 1);
    }

    #[test]
    fn test_summary() {
        let novel = SegmentedNovel::segment("第一回\n甲乙\n丙丁戊己", ParagraphPolicy::Line);
        let summary = novel.summary();

        assert_eq!(summary.chapter_count, 1);
        assert_eq!(summary.paragraph_count, 2);
        assert_eq!(summary.char_count, 6);
        assert_eq!(summary.mean_paragraph_chars, Some(3.0));
        assert_eq!(summary.max_paragraph_chars, Some(4));
        assert_eq!(summary.min_paragraph_chars, Some(2));
    }

    #[test]
    fn test_summary_of_empty_text() {
        let summary = SegmentedNovel::segment("", ParagraphPolicy::Line).summary();
        assert_eq!(summary.chapter_count, 0);
        assert_eq!(summary.mean_paragraph_chars, None);
        assert_eq!(summary.max_paragraph_chars, None);
    }
}
