//! Network Context - Entities

use serde::Serialize;

use super::NetworkError;

/// 人物共现权重记录
///
/// 不变量:
/// - 两个人名都不为空
/// - 两个权重都是有限数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRecord {
    first: String,
    second: String,
    /// 章回共现权重，归一化后作为边权
    chapter_weight: f64,
    /// 段落共现权重，保留但不参与边权计算
    paragraph_weight: f64,
}

impl WeightRecord {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        chapter_weight: f64,
        paragraph_weight: f64,
    ) -> Result<Self, NetworkError> {
        let first = first.into();
        let second = second.into();
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(NetworkError::BlankName);
        }
        for (field, value) in [
            ("chapweight", chapter_weight),
            ("duanweight", paragraph_weight),
        ] {
            if !value.is_finite() {
                return Err(NetworkError::NonFiniteWeight { field, value });
            }
        }
        Ok(Self {
            first,
            second,
            chapter_weight,
            paragraph_weight,
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn chapter_weight(&self) -> f64 {
        self.chapter_weight
    }

    pub fn paragraph_weight(&self) -> f64 {
        self.paragraph_weight
    }
}

/// 无向边
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}
