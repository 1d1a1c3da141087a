//! 应用层错误定义
//!
//! 统一的命令处理错误类型

use thiserror::Error;

use crate::application::ports::{ExportError, SourceError};
use crate::domain::network::NetworkError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入文件缺失或无法读取（致命，不产生任何输出）
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// 参数不合法
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 结果写出失败
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// 后台任务异常退出
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// 是否为配置错误
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<SourceError> for ApplicationError {
    fn from(err: SourceError) -> Self {
        Self::SourceUnavailable(err.to_string())
    }
}

impl From<NetworkError> for ApplicationError {
    fn from(err: NetworkError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<ExportError> for ApplicationError {
    fn from(err: ExportError) -> Self {
        Self::ExportFailed(err.to_string())
    }
}
