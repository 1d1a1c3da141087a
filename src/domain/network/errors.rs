//! Network Context - Errors

use thiserror::Error;

/// 人物网络错误
///
/// `EmptyCorpus` 与 `InvalidThreshold` 是构建参数错误；
/// `BlankName` 与 `NonFiniteWeight` 是单条权重记录的校验错误。
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NetworkError {
    #[error("总段落数必须大于 0")]
    EmptyCorpus,

    #[error("无效的边权阈值: {0}")]
    InvalidThreshold(f64),

    #[error("人名不能为空")]
    BlankName,

    #[error("权重 `{field}` 必须是有限数: {value}")]
    NonFiniteWeight { field: &'static str, value: f64 },
}
