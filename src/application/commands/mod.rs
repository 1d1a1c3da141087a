//! 应用层 - 命令
//!
//! 分析流程的各个步骤及其处理器

mod analysis_commands;

pub mod handlers;

pub use analysis_commands::*;
