//! Analysis Pipeline Handler
//!
//! 读入 → 切分 → (词频 ∥ 人物网络) → 导出。
//! 所有输入读取与计算成功后才开始写出结果。三个结果依次写出，
//! 某个写出失败时，之前已写出的文件保留。

use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    BuildNetworkHandler, CountWordsHandler, LoadLexiconHandler, SegmentNovelHandler,
};
use crate::application::commands::{
    BuildNetwork, CountWords, LoadLexicon, RunAnalysis, SegmentNovel,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    GraphExport, ReportExporterPort, StatisticsExport, TextSourcePort, TokenizerPort,
    WeightSourcePort,
};
use crate::domain::lexicon::WordFrequency;
use crate::domain::novel::CorpusSummary;

/// 一次分析的结果摘要
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub summary: CorpusSummary,
    pub distinct_words: usize,
    /// 日志展示用的高频词
    pub top_words: Vec<WordFrequency>,
    pub node_count: usize,
    pub edge_count: usize,
    /// 按出现次数排序的高频人物
    pub top_nodes: Vec<(String, u32)>,
    pub rejected_rows: usize,
    pub frequency_path: PathBuf,
    pub graph_path: PathBuf,
    pub statistics_path: PathBuf,
}

/// RunAnalysis Handler
pub struct RunAnalysisHandler {
    lexicon: LoadLexiconHandler,
    segment: SegmentNovelHandler,
    count_words: CountWordsHandler,
    network: BuildNetworkHandler,
    exporter: Arc<dyn ReportExporterPort>,
}

impl RunAnalysisHandler {
    pub fn new(
        text_source: Arc<dyn TextSourcePort>,
        weight_source: Arc<dyn WeightSourcePort>,
        tokenizer: Box<dyn TokenizerPort>,
        exporter: Arc<dyn ReportExporterPort>,
    ) -> Self {
        Self {
            lexicon: LoadLexiconHandler::new(text_source.clone()),
            segment: SegmentNovelHandler::new(text_source),
            count_words: CountWordsHandler::new(tokenizer),
            network: BuildNetworkHandler::new(weight_source),
            exporter,
        }
    }

    pub async fn handle(&mut self, command: RunAnalysis) -> Result<AnalysisReport, ApplicationError> {
        let run_id = Uuid::new_v4();
        tracing::info!(
            run_id = %run_id,
            text = %command.text_path.display(),
            policy = %command.policy,
            threshold = command.threshold,
            "Analysis started"
        );

        // 1. 停用词与专有词汇（专有词汇必须在分词前注册）
        let lexicon = self
            .lexicon
            .handle(LoadLexicon {
                stopwords_path: command.stopwords_path.clone(),
                custom_dict_path: command.custom_dict_path.clone(),
            })
            .await?;
        self.count_words.register_custom_terms(&lexicon.custom_terms);

        // 2. 章回/段落切分，得到总段落数
        let segmented = self
            .segment
            .handle(SegmentNovel {
                text_path: command.text_path.clone(),
                policy: command.policy,
            })
            .await?;
        let total_paragraphs = segmented.novel.total_paragraphs();

        // 3. 词频与人物网络互不依赖：权重表读取在独立任务中进行，
        //    分词统计在当前线程进行
        let network = self.network.clone();
        let build = BuildNetwork {
            weights_path: command.weights_path.clone(),
            total_paragraphs,
            threshold: command.threshold,
        };
        let network_task = tokio::spawn(async move { network.handle(build).await });

        let table = self.count_words.handle(CountWords {
            raw_text: &segmented.raw_text,
            novel: &segmented.novel,
            stopwords: &lexicon.stopwords,
            scope: command.scope,
        });
        let network = network_task
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))??;

        for (rank, entry) in table.top_k(command.display).iter().enumerate() {
            tracing::info!(rank = rank + 1, word = %entry.word, count = entry.count, "Top word");
        }
        let top_nodes: Vec<(String, u32)> = network
            .incidence
            .ranked()
            .into_iter()
            .take(command.top_nodes)
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        for (name, count) in &top_nodes {
            tracing::info!(name = %name, rows = count, "Top character");
        }

        // 4. 导出
        let statistics = StatisticsExport::new(run_id, &segmented.novel);
        let graph = GraphExport::new(
            run_id,
            &network.graph,
            &network.incidence,
            command.threshold,
            total_paragraphs,
        );
        let frequency_path = self
            .exporter
            .export_frequencies(table.top_k(command.top_k))
            .await?;
        let graph_path = self.exporter.export_graph(&graph).await?;
        let statistics_path = self.exporter.export_statistics(&statistics).await?;

        tracing::info!(
            run_id = %run_id,
            frequencies = %frequency_path.display(),
            graph = %graph_path.display(),
            statistics = %statistics_path.display(),
            "Analysis finished"
        );

        Ok(AnalysisReport {
            run_id,
            summary: segmented.novel.summary(),
            distinct_words: table.len(),
            top_words: table.top_k(command.display).to_vec(),
            node_count: network.graph.node_count(),
            edge_count: network.graph.edge_count(),
            top_nodes,
            rejected_rows: network.rejected.len(),
            frequency_path,
            graph_path,
            statistics_path,
        })
    }
}
