//! 处理器测试用的内存端口实现

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::ports::{
    ExportError, GraphExport, ReportExporterPort, SourceError, StatisticsExport, TextSourcePort,
    TokenizerPort, WeightRelation, WeightSourcePort,
};
use crate::domain::lexicon::WordFrequency;

#[derive(Default)]
pub struct InMemoryTextSource {
    files: HashMap<PathBuf, String>,
}

impl InMemoryTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

#[async_trait]
impl TextSourcePort for InMemoryTextSource {
    async fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.display().to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryWeightSource {
    tables: HashMap<PathBuf, WeightRelation>,
}

impl InMemoryWeightSource {
    pub fn with_table(mut self, path: &str, relation: WeightRelation) -> Self {
        self.tables.insert(PathBuf::from(path), relation);
        self
    }
}

#[async_trait]
impl WeightSourcePort for InMemoryWeightSource {
    async fn load(&self, path: &Path) -> Result<WeightRelation, SourceError> {
        self.tables
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.display().to_string()))
    }
}

/// 按空白切分的分词器，记录注册过的专有词汇
#[derive(Default)]
pub struct WhitespaceTokenizer {
    registered: Arc<Mutex<Vec<String>>>,
}

impl WhitespaceTokenizer {
    pub fn registered(&self) -> Arc<Mutex<Vec<String>>> {
        self.registered.clone()
    }
}

impl TokenizerPort for WhitespaceTokenizer {
    fn add_custom_term(&mut self, term: &str) {
        self.registered.lock().unwrap().push(term.to_string());
    }

    fn tokenize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(text.split_whitespace().map(str::to_string))
    }
}

/// 只记录导出内容，不写文件
#[derive(Default)]
pub struct RecordingExporter {
    pub frequencies: Mutex<Vec<WordFrequency>>,
    pub graphs: Mutex<Vec<GraphExport>>,
    pub statistics: Mutex<Vec<StatisticsExport>>,
    /// 人物网络导出时返回错误
    pub fail_graph: bool,
}

#[async_trait]
impl ReportExporterPort for RecordingExporter {
    async fn export_frequencies(&self, entries: &[WordFrequency]) -> Result<PathBuf, ExportError> {
        self.frequencies.lock().unwrap().extend_from_slice(entries);
        Ok(PathBuf::from("frequencies.txt"))
    }

    async fn export_graph(&self, graph: &GraphExport) -> Result<PathBuf, ExportError> {
        if self.fail_graph {
            return Err(ExportError::Io("disk full".to_string()));
        }
        self.graphs.lock().unwrap().push(graph.clone());
        Ok(PathBuf::from("graph.json"))
    }

    async fn export_statistics(&self, stats: &StatisticsExport) -> Result<PathBuf, ExportError> {
        self.statistics.lock().unwrap().push(stats.clone());
        Ok(PathBuf::from("statistics.json"))
    }
}
