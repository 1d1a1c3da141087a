//! File Text Source - 文件系统文本读取实现
//!
//! 实现 TextSourcePort trait

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{SourceError, TextSourcePort};

/// UTF-8 BOM
const BOM: char = '\u{feff}';

/// 从本地文件整体读入文本
#[derive(Debug, Clone, Default)]
pub struct FileTextSource;

impl FileTextSource {
    pub fn new() -> Self {
        Self
    }
}

/// 整体读入文件字节
pub(super) async fn read_bytes(path: &Path) -> Result<Vec<u8>, SourceError> {
    fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
        _ => SourceError::Io(format!("{}: {}", path.display(), e)),
    })
}

/// 按 UTF-8 解码，去掉开头的 BOM
pub(super) fn decode_utf8(path: &Path, bytes: Vec<u8>) -> Result<String, SourceError> {
    let text = String::from_utf8(bytes)
        .map_err(|e| SourceError::Encoding(format!("{}: {}", path.display(), e)))?;
    Ok(match text.strip_prefix(BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[async_trait]
impl TextSourcePort for FileTextSource {
    async fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = read_bytes(path).await?;
        let size = bytes.len();
        let text = decode_utf8(path, bytes)?;

        tracing::debug!(path = %path.display(), bytes = size, "Text file read");

        Ok(text)
    }
}
