//! Network Context - Aggregate Root

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;

use super::{Edge, EdgeThreshold, NetworkError, WeightRecord};

/// 人物出现次数（按权重表行数统计）
///
/// 覆盖权重表中出现过的所有人物，包括最终没有任何边的人物，
/// 只用于节点大小渲染。
#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeIncidence {
    /// 按首次出现顺序
    entries: Vec<(String, u32)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl NodeIncidence {
    fn increment(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), 1));
            }
        }
    }

    /// 人物出现的行数，未出现过的人物为 0
    pub fn count(&self, name: &str) -> u32 {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// 按出现次数降序，次数相同时保持首次出现顺序
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// 人物关系网络 - 聚合根
///
/// 不变量:
/// - 无向简单图，同一对人物最多一条边
/// - 每个节点至少关联一条保留的边
#[derive(Debug, Clone, Default)]
pub struct CharacterGraph {
    graph: UnGraph<String, f64>,
    nodes: HashMap<String, NodeIndex>,
}

impl CharacterGraph {
    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), idx);
        idx
    }

    /// 添加边；同一对人物已存在时覆盖权重
    fn upsert_edge(&mut self, a: &str, b: &str, weight: f64) {
        let a = self.node(a);
        let b = self.node(b);
        self.graph.update_edge(a, b, weight);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// 两个人物之间的边权（与方向无关）
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = *self.nodes.get(a)?;
        let b = *self.nodes.get(b)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// 按加入顺序的节点名
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// 按加入顺序的边
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|e| Edge {
                source: self.graph[e.source()].clone(),
                target: self.graph[e.target()].clone(),
                weight: *e.weight(),
            })
            .collect()
    }

    /// 节点的度（保留下来的边数）
    pub fn degree(&self, name: &str) -> usize {
        self.nodes
            .get(name)
            .map(|&idx| self.graph.neighbors(idx).count())
            .unwrap_or(0)
    }
}

/// 由权重表构建人物关系网络
///
/// 1. 每一行都给两个人物各记一次出现（不受过滤影响）
/// 2. 边权 = chapter_weight / total_paragraphs
/// 3. 边权严格大于阈值才保留；同一对人物重复出现时后者覆盖前者
pub fn build_graph(
    records: &[WeightRecord],
    total_paragraphs: usize,
    threshold: f64,
) -> Result<(CharacterGraph, NodeIncidence), NetworkError> {
    if total_paragraphs == 0 {
        return Err(NetworkError::EmptyCorpus);
    }
    let threshold = EdgeThreshold::new(threshold)?;
    let total = total_paragraphs as f64;

    let mut graph = CharacterGraph::default();
    let mut incidence = NodeIncidence::default();

    for record in records {
        incidence.increment(record.first());
        incidence.increment(record.second());

        let weight = record.chapter_weight() / total;
        if threshold.admits(weight) {
            graph.upsert_edge(record.first(), record.second(), weight);
        }
    }

    Ok((graph, incidence))
}
