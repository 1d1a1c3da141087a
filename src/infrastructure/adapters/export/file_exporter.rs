//! File Report Exporter - 文件系统结果导出实现
//!
//! 实现 ReportExporterPort trait

use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

use crate::application::ports::{
    format_frequency_listing, ExportError, GraphExport, ReportExporterPort, StatisticsExport,
};
use crate::domain::lexicon::WordFrequency;

/// 文件导出配置
#[derive(Debug, Clone)]
pub struct FileExporterConfig {
    /// 输出目录
    pub output_dir: PathBuf,
    /// 词频清单文件名
    pub frequency_file: String,
    /// 人物网络文件名
    pub graph_file: String,
    /// 章回统计文件名
    pub statistics_file: String,
}

impl Default for FileExporterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            frequency_file: "word_frequencies.txt".to_string(),
            graph_file: "character_network.json".to_string(),
            statistics_file: "chapter_statistics.json".to_string(),
        }
    }
}

/// 把结果写入输出目录
pub struct FileReportExporter {
    config: FileExporterConfig,
}

impl FileReportExporter {
    pub fn new(config: FileExporterConfig) -> Self {
        Self { config }
    }

    /// 先写临时文件再改名，目标文件要么是旧内容要么是完整的新内容
    async fn write(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.config.output_dir)
            .await
            .map_err(|e| ExportError::Io(e.to_string()))?;

        let path = self.config.output_dir.join(file_name);
        let tmp = self.config.output_dir.join(format!(".{}.tmp", file_name));
        fs::write(&tmp, data)
            .await
            .map_err(|e| ExportError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| ExportError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Report written");

        Ok(path)
    }

    async fn write_json<T: Serialize + Sync>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<PathBuf, ExportError> {
        let data =
            serde_json::to_vec_pretty(value).map_err(|e| ExportError::Serialize(e.to_string()))?;
        self.write(file_name, &data).await
    }
}

#[async_trait]
impl ReportExporterPort for FileReportExporter {
    async fn export_frequencies(&self, entries: &[WordFrequency]) -> Result<PathBuf, ExportError> {
        let listing = format_frequency_listing(entries);
        self.write(&self.config.frequency_file, listing.as_bytes())
            .await
    }

    async fn export_graph(&self, graph: &GraphExport) -> Result<PathBuf, ExportError> {
        self.write_json(&self.config.graph_file, graph).await
    }

    async fn export_statistics(&self, stats: &StatisticsExport) -> Result<PathBuf, ExportError> {
        self.write_json(&self.config.statistics_file, stats).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::{build_graph, WeightRecord};
    use crate::domain::novel::{ParagraphPolicy, SegmentedNovel};
    use std::path::Path;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn exporter(dir: &Path) -> FileReportExporter {
        FileReportExporter::new(FileExporterConfig {
            output_dir: dir.join("out"),
            ..FileExporterConfig::default()
        })
    }

    #[tokio::test]
    async fn test_export_frequencies() {
        let dir = tempdir().unwrap();
        let entries = vec![
            WordFrequency {
                word: "宝玉".to_string(),
                count: 3832,
            },
            WordFrequency {
                word: "凤姐".to_string(),
                count: 1529,
            },
        ];

        let path = exporter(dir.path()).export_frequencies(&entries).await.unwrap();

        assert_eq!(path, dir.path().join("out").join("word_frequencies.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "宝玉: 3832\n凤姐: 1529\n");

        // 重复导出覆盖旧文件，不留临时文件
        exporter(dir.path()).export_frequencies(&entries[..1]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "宝玉: 3832\n");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[tokio::test]
    async fn test_graph_weights_round_trip() {
        let dir = tempdir().unwrap();
        let records = vec![
            WeightRecord::new("宝玉", "黛玉", 1.0, 0.0).unwrap(),
            WeightRecord::new("宝玉", "宝钗", 7.0, 0.0).unwrap(),
        ];
        let (graph, incidence) = build_graph(&records, 3, 0.0).unwrap();
        let export = GraphExport::new(Uuid::new_v4(), &graph, &incidence, 0.0, 3);

        let path = exporter(dir.path()).export_graph(&export).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["total_paragraphs"], 3);
        assert_eq!(json["nodes"][0]["id"], "宝玉");
        assert_eq!(json["nodes"][0]["incidence"], 2);
        assert_eq!(json["edges"][0]["weight"].as_f64(), Some(1.0 / 3.0));
        assert_eq!(json["edges"][1]["weight"].as_f64(), Some(7.0 / 3.0));
    }

    #[tokio::test]
    async fn test_export_statistics() {
        let dir = tempdir().unwrap();
        let novel = SegmentedNovel::segment("第一回\n甲乙\n\n丙", ParagraphPolicy::BlankLineOrSentence);
        let stats = StatisticsExport::new(Uuid::new_v4(), &novel);

        let path = exporter(dir.path()).export_statistics(&stats).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["paragraph_policy"], "blank_line_or_sentence");
        assert_eq!(json["summary"]["paragraph_count"], 2);
        assert_eq!(json["chapters"][0]["paragraph_chars"], serde_json::json!([2, 1]));
    }
}
