//! Hongxue - 《红楼梦》文本统计与人物关系网络分析
//!
//! 用法: `hongxue [config.toml]`

use std::path::PathBuf;
use std::sync::Arc;

use hongxue::application::RunAnalysisHandler;
use hongxue::config::{load_config_from_path, print_config, AppConfig, LogConfig};
use hongxue::infrastructure::adapters::{
    CsvWeightSource, FileReportExporter, FileTextSource, JiebaTokenizer,
};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},hongxue={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 按配置装配文件适配器与 jieba 分词器
fn build_handler(config: &AppConfig) -> RunAnalysisHandler {
    RunAnalysisHandler::new(
        Arc::new(FileTextSource::new()),
        Arc::new(CsvWeightSource::new()),
        Box::new(JiebaTokenizer::new()),
        Arc::new(FileReportExporter::new(config.output.exporter_config())),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config_from_path(config_path.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Hongxue - 红楼梦文本分析");
    print_config(&config);

    let mut handler = build_handler(&config);
    let report = handler.handle(config.analysis_command()).await?;

    println!("run id:       {}", report.run_id);
    println!(
        "chapters:     {}  paragraphs: {}  chars: {}",
        report.summary.chapter_count, report.summary.paragraph_count, report.summary.char_count
    );
    println!("distinct words: {}", report.distinct_words);
    for entry in &report.top_words {
        println!("  {}: {}", entry.word, entry.count);
    }
    println!(
        "network:      {} nodes, {} edges ({} rows skipped)",
        report.node_count, report.edge_count, report.rejected_rows
    );
    for (name, count) in &report.top_nodes {
        println!("  {}: {}", name, count);
    }
    println!("frequencies:  {}", report.frequency_path.display());
    println!("graph:        {}", report.graph_path.display());
    println!("statistics:   {}", report.statistics_path.display());

    Ok(())
}
