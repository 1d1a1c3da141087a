//! Weight Source Port - 人物共现权重表读取抽象
//!
//! 权重表列: `First, Second, chapweight, duanweight`

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use super::SourceError;
use crate::domain::network::{NetworkError, WeightRecord};

/// 单行数据格式错误
///
/// 出错的行被跳过，不影响其余行。
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WeightRowError {
    #[error("row {row}: missing field `{field}`")]
    MissingField { row: u64, field: &'static str },

    #[error("row {row}: field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        row: u64,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {error}")]
    InvalidRecord { row: u64, error: NetworkError },

    #[error("row {row}: malformed row: {message}")]
    Malformed { row: u64, message: String },
}

impl WeightRowError {
    /// 出错行在文件中的行号
    pub fn row(&self) -> u64 {
        match self {
            WeightRowError::MissingField { row, .. }
            | WeightRowError::InvalidNumber { row, .. }
            | WeightRowError::InvalidRecord { row, .. }
            | WeightRowError::Malformed { row, .. } => *row,
        }
    }
}

/// 读入的权重表
#[derive(Debug, Clone, Default)]
pub struct WeightRelation {
    /// 校验通过的记录，保持文件顺序
    pub records: Vec<WeightRecord>,
    /// 被跳过的行
    pub rejected: Vec<WeightRowError>,
}

/// Weight Source Port
#[async_trait]
pub trait WeightSourcePort: Send + Sync {
    /// 读入整张权重表
    ///
    /// 文件无法读取时返回 `SourceError`；单行格式错误记录在 `rejected` 中。
    async fn load(&self, path: &Path) -> Result<WeightRelation, SourceError>;
}
