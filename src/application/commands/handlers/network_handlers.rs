//! Network Command Handlers

use std::sync::Arc;

use crate::application::commands::BuildNetwork;
use crate::application::error::ApplicationError;
use crate::application::ports::{WeightRowError, WeightSourcePort};
use crate::domain::network::{
    build_graph, CharacterGraph, EdgeThreshold, NetworkError, NodeIncidence,
};

// ============================================================================
// BuildNetwork
// ============================================================================

/// 人物关系网络构建结果
#[derive(Debug, Clone)]
pub struct BuildNetworkResponse {
    pub graph: CharacterGraph,
    pub incidence: NodeIncidence,
    /// 参与构建的记录数
    pub record_count: usize,
    /// 被跳过的行
    pub rejected: Vec<WeightRowError>,
}

/// BuildNetwork Handler - 读入权重表，归一化并过滤
#[derive(Clone)]
pub struct BuildNetworkHandler {
    weight_source: Arc<dyn WeightSourcePort>,
}

impl BuildNetworkHandler {
    pub fn new(weight_source: Arc<dyn WeightSourcePort>) -> Self {
        Self { weight_source }
    }

    pub async fn handle(
        &self,
        command: BuildNetwork,
    ) -> Result<BuildNetworkResponse, ApplicationError> {
        // 参数错误不必等到读完权重表
        if command.total_paragraphs == 0 {
            return Err(NetworkError::EmptyCorpus.into());
        }
        EdgeThreshold::new(command.threshold)?;

        let relation = self.weight_source.load(&command.weights_path).await?;
        for err in &relation.rejected {
            tracing::warn!(row = err.row(), error = %err, "Weight row skipped");
        }

        let (graph, incidence) =
            build_graph(&relation.records, command.total_paragraphs, command.threshold)?;

        tracing::info!(
            path = %command.weights_path.display(),
            records = relation.records.len(),
            rejected = relation.rejected.len(),
            threshold = command.threshold,
            total_paragraphs = command.total_paragraphs,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Character network built"
        );
        if graph.edge_count() == 0 && !relation.records.is_empty() {
            tracing::warn!(
                threshold = command.threshold,
                "No edge passed the threshold, consider the broad preset"
            );
        }

        Ok(BuildNetworkResponse {
            graph,
            incidence,
            record_count: relation.records.len(),
            rejected: relation.rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::test_support::InMemoryWeightSource;
    use crate::application::ports::WeightRelation;
    use crate::domain::network::WeightRecord;
    use std::path::PathBuf;

    fn relation() -> WeightRelation {
        WeightRelation {
            records: vec![
                WeightRecord::new("宝玉", "黛玉", 40.0, 120.0).unwrap(),
                WeightRecord::new("宝玉", "宝钗", 4.0, 30.0).unwrap(),
                WeightRecord::new("贾母", "刘姥姥", 0.2, 2.0).unwrap(),
            ],
            rejected: vec![WeightRowError::InvalidNumber {
                row: 5,
                field: "chapweight",
                value: "n/a".to_string(),
            }],
        }
    }

    fn handler() -> BuildNetworkHandler {
        let source = InMemoryWeightSource::default().with_table("weights.csv", relation());
        BuildNetworkHandler::new(Arc::new(source))
    }

    fn command(total_paragraphs: usize, threshold: f64) -> BuildNetwork {
        BuildNetwork {
            weights_path: PathBuf::from("weights.csv"),
            total_paragraphs,
            threshold,
        }
    }

    #[tokio::test]
    async fn test_build_network_with_presets() {
        let broad = handler().handle(command(100, 0.005)).await.unwrap();
        assert_eq!(broad.graph.edge_count(), 2);
        assert_eq!(broad.incidence.len(), 5);
        assert_eq!(broad.record_count, 3);
        assert_eq!(broad.rejected.len(), 1);

        let sparse = handler().handle(command(100, 0.04)).await.unwrap();
        assert_eq!(sparse.graph.edge_count(), 1);
        assert_eq!(sparse.graph.edge_weight("黛玉", "宝玉"), Some(0.4));
        // 被过滤的人物仍然计入出现次数
        assert_eq!(sparse.incidence.count("刘姥姥"), 1);
    }

    #[tokio::test]
    async fn test_zero_paragraphs_is_configuration_error() {
        let err = handler().handle(command(0, 0.005)).await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_invalid_threshold_is_configuration_error() {
        let err = handler().handle(command(100, -0.5)).await.unwrap_err();
        assert!(err.is_configuration());

        let err = handler().handle(command(100, f64::NAN)).await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_missing_weights_is_fatal() {
        let handler = BuildNetworkHandler::new(Arc::new(InMemoryWeightSource::default()));
        let err = handler.handle(command(100, 0.005)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::SourceUnavailable(_)));
    }
}
