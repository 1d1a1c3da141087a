//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（hongxue.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["hongxue", "hongxue.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `HONGXUE_INPUT__TEXT=data/hlm.txt`
/// - `HONGXUE_SEGMENT__PARAGRAPH_POLICY=line`
/// - `HONGXUE_NETWORK__PRESET=sparse`
/// - `HONGXUE_NETWORK__THRESHOLD=0.01`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 默认值由 serde(default) 提供，这里只列出常用项便于覆盖
    builder = builder
        .set_default("segment.paragraph_policy", "blank_line_or_sentence")?
        .set_default("frequency.scope", "whole_text")?
        .set_default("network.preset", "broad")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 例如: HONGXUE_OUTPUT__DIR=/tmp/out
    builder = builder.add_source(
        Environment::with_prefix("HONGXUE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let input = &config.input;
    let paths = [
        ("input.text", Some(&input.text)),
        ("input.stopwords", Some(&input.stopwords)),
        ("input.custom_dict", input.custom_dict.as_ref()),
        ("input.weights", Some(&input.weights)),
        ("output.dir", Some(&config.output.dir)),
    ];
    for (key, path) in paths {
        if path.is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
    }

    let files = [
        ("output.frequency_file", &config.output.frequency_file),
        ("output.graph_file", &config.output.graph_file),
        ("output.statistics_file", &config.output.statistics_file),
    ];
    for (key, name) in files {
        if name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
    }

    let threshold = config.network.resolved_threshold();
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "Edge threshold must be a finite non-negative number, got {}",
            threshold
        )));
    }

    if config.frequency.top_k == 0 {
        return Err(ConfigError::ValidationError(
            "frequency.top_k cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Analysis Configuration ===");
    tracing::info!("Text: {}", config.input.text.display());
    tracing::info!("Stopwords: {}", config.input.stopwords.display());
    match &config.input.custom_dict {
        Some(path) => tracing::info!("Custom Dictionary: {}", path.display()),
        None => tracing::info!("Custom Dictionary: (none)"),
    }
    tracing::info!("Weights: {}", config.input.weights.display());
    tracing::info!("Paragraph Policy: {}", config.segment.paragraph_policy);
    tracing::info!(
        "Tokenize Scope: {} (top {}, show {})",
        config.frequency.scope.as_str(),
        config.frequency.top_k,
        config.frequency.display
    );
    match config.network.threshold {
        Some(threshold) => tracing::info!("Edge Threshold: {} (explicit)", threshold),
        None => tracing::info!(
            "Edge Threshold: {} ({})",
            config.network.preset.value(),
            config.network.preset
        ),
    }
    tracing::info!("Output Directory: {}", config.output.dir.display());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("==============================");
}
