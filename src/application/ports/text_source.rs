//! Text Source Port - 文本文件读取抽象
//!
//! 原文、停用词表、专有词汇词典都通过此端口整体读入

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 数据源错误（不可恢复）
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid UTF-8 in {0}")]
    Encoding(String),
}

/// Text Source Port
#[async_trait]
pub trait TextSourcePort: Send + Sync {
    /// 整体读入一个 UTF-8 文本文件
    async fn read_text(&self, path: &Path) -> Result<String, SourceError>;

    /// 按行读入列表文件，每行去除首尾空白，跳过空行
    async fn read_lines(&self, path: &Path) -> Result<Vec<String>, SourceError> {
        let text = self.read_text(path).await?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
