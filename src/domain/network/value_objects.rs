//! Network Context - Value Objects

use serde::{Deserialize, Serialize};

use super::NetworkError;

/// 边权阈值预设
///
/// 两个取值都来自实际使用场景，没有唯一正确的默认值：
/// - `Broad` (0.005): 保留弱关系，图较稠密，适合总览
/// - `Sparse` (0.04): 只保留强关系，图稀疏，适合突出核心人物
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPreset {
    Broad,
    Sparse,
}

impl ThresholdPreset {
    pub fn value(&self) -> f64 {
        match self {
            ThresholdPreset::Broad => 0.005,
            ThresholdPreset::Sparse => 0.04,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdPreset::Broad => "broad",
            ThresholdPreset::Sparse => "sparse",
        }
    }
}

impl Default for ThresholdPreset {
    fn default() -> Self {
        ThresholdPreset::Broad
    }
}

impl std::fmt::Display for ThresholdPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 边权阈值（边权严格大于阈值才保留）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeThreshold(f64);

impl EdgeThreshold {
    /// 阈值必须是有限的非负数
    pub fn new(value: f64) -> Result<Self, NetworkError> {
        if !value.is_finite() || value < 0.0 {
            return Err(NetworkError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// 边权是否保留
    pub fn admits(&self, weight: f64) -> bool {
        weight > self.0
    }
}

impl From<ThresholdPreset> for EdgeThreshold {
    fn from(preset: ThresholdPreset) -> Self {
        Self(preset.value())
    }
}

impl std::fmt::Display for EdgeThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_validation() {
        assert!(EdgeThreshold::new(0.0).is_ok());
        assert_eq!(
            EdgeThreshold::new(-0.01),
            Err(NetworkError::InvalidThreshold(-0.01))
        );
        assert!(EdgeThreshold::new(f64::NAN).is_err());
        assert!(EdgeThreshold::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_threshold_is_strict() {
        let threshold = EdgeThreshold::new(0.04).unwrap();
        assert!(!threshold.admits(0.04));
        assert!(threshold.admits(0.0401));
    }

    #[test]
    fn test_presets() {
        assert_eq!(EdgeThreshold::from(ThresholdPreset::Broad).value(), 0.005);
        assert_eq!(EdgeThreshold::from(ThresholdPreset::Sparse).value(), 0.04);
    }
}
