//! Network Context - 人物关系网络限界上下文
//!
//! 职责:
//! - 权重记录校验
//! - 边权归一化与阈值过滤
//! - 人物出现次数统计

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{build_graph, CharacterGraph, NodeIncidence};
pub use entities::{Edge, WeightRecord};
pub use errors::NetworkError;
pub use value_objects::{EdgeThreshold, ThresholdPreset};
