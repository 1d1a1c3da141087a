//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::application::commands::{RunAnalysis, TokenizeScope};
use crate::domain::network::ThresholdPreset;
use crate::domain::novel::ParagraphPolicy;
use crate::infrastructure::adapters::FileExporterConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 输入文件
    #[serde(default)]
    pub input: InputConfig,

    /// 章回/段落切分
    #[serde(default)]
    pub segment: SegmentConfig,

    /// 词频统计
    #[serde(default)]
    pub frequency: FrequencyConfig,

    /// 人物关系网络
    #[serde(default)]
    pub network: NetworkConfig,

    /// 结果输出
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 生成一次完整分析的命令
    pub fn analysis_command(&self) -> RunAnalysis {
        RunAnalysis {
            text_path: self.input.text.clone(),
            stopwords_path: self.input.stopwords.clone(),
            custom_dict_path: self.input.custom_dict.clone(),
            weights_path: self.input.weights.clone(),
            policy: self.segment.paragraph_policy,
            scope: self.frequency.scope,
            top_k: self.frequency.top_k,
            display: self.frequency.display,
            threshold: self.network.resolved_threshold(),
            top_nodes: self.network.top_nodes,
        }
    }
}

/// 输入文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// 小说原文（UTF-8）
    #[serde(default = "default_text_path")]
    pub text: PathBuf,

    /// 停用词表，每行一个
    #[serde(default = "default_stopwords_path")]
    pub stopwords: PathBuf,

    /// 专有词汇词典，每行一个；不设置则不注册
    #[serde(default)]
    pub custom_dict: Option<PathBuf>,

    /// 人物共现权重表（CSV）
    #[serde(default = "default_weights_path")]
    pub weights: PathBuf,
}

fn default_text_path() -> PathBuf {
    PathBuf::from("data/hongloumeng.txt")
}

fn default_stopwords_path() -> PathBuf {
    PathBuf::from("data/stopwords.txt")
}

fn default_weights_path() -> PathBuf {
    PathBuf::from("data/character_weights.csv")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            text: default_text_path(),
            stopwords: default_stopwords_path(),
            custom_dict: None,
            weights: default_weights_path(),
        }
    }
}

/// 切分配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentConfig {
    /// 段落切分策略
    /// 可选: blank_line_or_sentence, line
    #[serde(default)]
    pub paragraph_policy: ParagraphPolicy,
}

/// 词频配置
#[derive(Debug, Clone, Deserialize)]
pub struct FrequencyConfig {
    /// 分词范围
    /// 可选: whole_text, per_paragraph
    #[serde(default)]
    pub scope: TokenizeScope,

    /// 导出的高频词数量
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// 日志中展示的高频词数量
    #[serde(default = "default_display")]
    pub display: usize,
}

fn default_top_k() -> usize {
    150
}

fn default_display() -> usize {
    20
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            scope: TokenizeScope::default(),
            top_k: default_top_k(),
            display: default_display(),
        }
    }
}

/// 人物网络配置
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// 阈值预设
    /// 可选: broad (0.005), sparse (0.04)
    #[serde(default)]
    pub preset: ThresholdPreset,

    /// 显式阈值，设置后覆盖预设
    #[serde(default)]
    pub threshold: Option<f64>,

    /// 日志中展示的高频人物数量
    #[serde(default = "default_top_nodes")]
    pub top_nodes: usize,
}

fn default_top_nodes() -> usize {
    20
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            preset: ThresholdPreset::default(),
            threshold: None,
            top_nodes: default_top_nodes(),
        }
    }
}

impl NetworkConfig {
    /// 实际使用的边权阈值
    pub fn resolved_threshold(&self) -> f64 {
        self.threshold.unwrap_or_else(|| self.preset.value())
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 输出目录
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_frequency_file")]
    pub frequency_file: String,

    #[serde(default = "default_graph_file")]
    pub graph_file: String,

    #[serde(default = "default_statistics_file")]
    pub statistics_file: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_frequency_file() -> String {
    "word_frequencies.txt".to_string()
}

fn default_graph_file() -> String {
    "character_network.json".to_string()
}

fn default_statistics_file() -> String {
    "chapter_statistics.json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            frequency_file: default_frequency_file(),
            graph_file: default_graph_file(),
            statistics_file: default_statistics_file(),
        }
    }
}

impl OutputConfig {
    /// 转换为导出适配器配置
    pub fn exporter_config(&self) -> FileExporterConfig {
        FileExporterConfig {
            output_dir: self.dir.clone(),
            frequency_file: self.frequency_file.clone(),
            graph_file: self.graph_file.clone(),
            statistics_file: self.statistics_file.clone(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.segment.paragraph_policy, ParagraphPolicy::BlankLineOrSentence);
        assert_eq!(config.frequency.top_k, 150);
        assert_eq!(config.frequency.display, 20);
        assert_eq!(config.network.preset, ThresholdPreset::Broad);
        assert!(config.input.custom_dict.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_explicit_threshold_overrides_preset() {
        let mut config = NetworkConfig {
            preset: ThresholdPreset::Sparse,
            ..NetworkConfig::default()
        };
        assert_eq!(config.resolved_threshold(), 0.04);

        config.threshold = Some(0.0);
        assert_eq!(config.resolved_threshold(), 0.0);
    }

    #[test]
    fn test_analysis_command() {
        let mut config = AppConfig::default();
        config.input.custom_dict = Some(PathBuf::from("dict.txt"));
        config.segment.paragraph_policy = ParagraphPolicy::Line;

        let command = config.analysis_command();
        assert_eq!(command.text_path, PathBuf::from("data/hongloumeng.txt"));
        assert_eq!(command.custom_dict_path, Some(PathBuf::from("dict.txt")));
        assert_eq!(command.policy, ParagraphPolicy::Line);
        assert_eq!(command.threshold, 0.005);
        assert_eq!(command.top_nodes, 20);
    }

    #[test]
    fn test_exporter_config() {
        let output = OutputConfig {
            dir: PathBuf::from("/tmp/hongxue"),
            ..OutputConfig::default()
        };
        let exporter = output.exporter_config();
        assert_eq!(exporter.output_dir, PathBuf::from("/tmp/hongxue"));
        assert_eq!(exporter.graph_file, "character_network.json");
    }
}
