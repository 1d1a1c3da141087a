//! CSV Weight Source - 人物共现权重表读取实现
//!
//! 实现 WeightSourcePort trait。文件整体读入后在内存中解析，
//! 单行错误被记录并跳过。人名按原样保留（不去除首尾空白），
//! 数值字段解析前去除首尾空白。

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use super::file_text_source::{decode_utf8, read_bytes};
use crate::application::ports::{SourceError, WeightRelation, WeightRowError, WeightSourcePort};
use crate::domain::network::WeightRecord;

const FIRST: &str = "First";
const SECOND: &str = "Second";
const CHAPTER_WEIGHT: &str = "chapweight";
const PARAGRAPH_WEIGHT: &str = "duanweight";

/// 原始行，所有字段都可能缺失
#[derive(Debug, Deserialize)]
struct RawWeightRow {
    #[serde(rename = "First")]
    first: Option<String>,
    #[serde(rename = "Second")]
    second: Option<String>,
    chapweight: Option<String>,
    duanweight: Option<String>,
}

fn required(
    row: u64,
    field: &'static str,
    value: Option<String>,
) -> Result<String, WeightRowError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(WeightRowError::MissingField { row, field })
}

fn number(row: u64, field: &'static str, value: Option<String>) -> Result<f64, WeightRowError> {
    let value = required(row, field, value)?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| WeightRowError::InvalidNumber { row, field, value })
}

impl RawWeightRow {
    fn into_record(self, row: u64) -> Result<WeightRecord, WeightRowError> {
        let first = required(row, FIRST, self.first)?;
        let second = required(row, SECOND, self.second)?;
        let chapter_weight = number(row, CHAPTER_WEIGHT, self.chapweight)?;
        let paragraph_weight = number(row, PARAGRAPH_WEIGHT, self.duanweight)?;

        WeightRecord::new(first, second, chapter_weight, paragraph_weight)
            .map_err(|error| WeightRowError::InvalidRecord { row, error })
    }
}

/// 解析权重表内容
pub fn parse_weight_table(content: &str) -> WeightRelation {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let mut relation = WeightRelation::default();

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            relation.rejected.push(WeightRowError::Malformed {
                row: 1,
                message: e.to_string(),
            });
            return relation;
        }
    };
    for column in [FIRST, SECOND, CHAPTER_WEIGHT, PARAGRAPH_WEIGHT] {
        if !headers.iter().any(|h| h == column) {
            tracing::warn!(column = column, "Weight table header is missing a column");
        }
    }

    for (index, result) in reader.records().enumerate() {
        // 表头占第 1 行
        let fallback_row = index as u64 + 2;
        let parsed = result
            .map_err(|e| WeightRowError::Malformed {
                row: e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_row),
                message: e.to_string(),
            })
            .and_then(|record| {
                let row = record.position().map(|p| p.line()).unwrap_or(fallback_row);
                record
                    .deserialize::<RawWeightRow>(Some(&headers))
                    .map_err(|e| WeightRowError::Malformed {
                        row,
                        message: e.to_string(),
                    })
                    .and_then(|raw| raw.into_record(row))
            });

        match parsed {
            Ok(record) => relation.records.push(record),
            Err(err) => relation.rejected.push(err),
        }
    }

    relation
}

/// 从 CSV 文件读取权重表
#[derive(Debug, Clone, Default)]
pub struct CsvWeightSource;

impl CsvWeightSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeightSourcePort for CsvWeightSource {
    async fn load(&self, path: &Path) -> Result<WeightRelation, SourceError> {
        let bytes = read_bytes(path).await?;
        let content = decode_utf8(path, bytes)?;
        let relation = parse_weight_table(&content);

        tracing::debug!(
            path = %path.display(),
            records = relation.records.len(),
            rejected = relation.rejected.len(),
            "Weight table parsed"
        );

        Ok(relation)
    }
}
