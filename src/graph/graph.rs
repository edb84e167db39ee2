//! 图数据结构
//!
//! 泛型有向带权图：顶点注册表 + 邻接索引

use super::edge::Edge;
use super::index::{AdjacencyIndex, EdgeUpsert};
use super::vertex::{VertexId, VertexRegistry};
use crate::config::GraphConfig;
use crate::error::Result;
use crate::metrics::{GraphStats, StatsSnapshot};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;
use std::io::Write;
use tracing::{debug, trace};

/// 有向带权图
///
/// - 顶点唯一，按插入顺序列出
/// - 每个有序顶点对最多一条边，重复添加会覆盖权重
/// - 对不存在的顶点或边的操作不会报错，而是返回 false / None / 空集合
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    /// 顶点注册表
    vertices: VertexRegistry<V>,
    /// 邻接索引（与注册表按位置对齐）
    adjacency: AdjacencyIndex<W>,
    /// 配置
    config: GraphConfig,
    /// 操作统计
    stats: GraphStats,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Ord + Clone,
    W: Copy,
{
    /// 创建空图
    pub fn new() -> Self {
        Self::from_valid_config(GraphConfig::default())
    }

    /// 创建空图，并为 `capacity` 个顶点预分配空间
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_config(GraphConfig::new().with_vertex_capacity(capacity))
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GraphConfig) -> Self {
        Self {
            vertices: VertexRegistry::with_capacity(config.vertex_capacity),
            adjacency: AdjacencyIndex::with_capacity(config.vertex_capacity),
            config,
            stats: GraphStats::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 顶点已存在或图已达到 `max_vertices` 时返回 false
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.config.is_full(self.vertices.len()) {
            debug!(limit = ?self.config.max_vertices, "图已满，拒绝添加顶点");
            self.stats.record_vertex_rejected();
            return false;
        }

        if self.vertices.insert(v).is_none() {
            debug!("顶点已存在");
            self.stats.record_vertex_rejected();
            return false;
        }

        let slot = self.adjacency.push_vertex();
        debug_assert_eq!(slot.as_usize() + 1, self.vertices.len());
        trace!(position = slot.as_usize(), "添加顶点");
        self.stats.record_vertex_added();
        true
    }

    /// 是否包含顶点
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// 获取顶点数量
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// 按插入顺序获取所有顶点（返回拷贝）
    pub fn get_vertices(&self) -> Vec<V> {
        self.vertices.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 任一端点不存在时返回 false 且图不变；边已存在时覆盖权重并返回 true
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        let (Some(src), Some(dst)) = (self.vertices.lookup(&from), self.vertices.lookup(&to))
        else {
            debug!("端点不存在，拒绝添加边");
            self.stats.record_edge_rejected();
            return false;
        };

        match self.adjacency.upsert(src, dst, weight) {
            Some(EdgeUpsert::Inserted) => {
                trace!(src = src.as_usize(), dst = dst.as_usize(), "添加边");
                self.stats.record_edge_added();
                true
            }
            Some(EdgeUpsert::Updated(_)) => {
                trace!(src = src.as_usize(), dst = dst.as_usize(), "覆盖边权重");
                self.stats.record_weight_updated();
                true
            }
            None => {
                self.stats.record_edge_rejected();
                false
            }
        }
    }

    /// 获取边权重
    pub fn get_weight(&self, from: &V, to: &V) -> Option<W> {
        let src = self.vertices.lookup(from)?;
        let dst = self.vertices.lookup(to)?;
        self.adjacency.weight(src, dst)
    }

    /// 是否存在边 (from, to)
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.get_weight(from, to).is_some()
    }

    /// 获取边数量
    pub fn num_edges(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// 获取顶点的所有出边，按首次添加的顺序
    pub fn get_outgoing_edges(&self, v: &V) -> Vec<Edge<V, W>> {
        self.vertices
            .lookup(v)
            .map(|src| self.collect_edges(v, self.adjacency.outgoing(src)))
            .unwrap_or_default()
    }

    /// 获取全部边，按源顶点的插入顺序分组
    pub fn get_edges(&self) -> Vec<Edge<V, W>> {
        let mut edges = Vec::with_capacity(self.num_edges());
        for (src, out) in self.adjacency.sources() {
            if let Some(from) = self.vertices.get(src) {
                edges.extend(self.collect_edges(from, out));
            }
        }
        edges
    }

    fn collect_edges(&self, from: &V, out: &[(VertexId, W)]) -> Vec<Edge<V, W>> {
        out.iter()
            .filter_map(|&(dst, w)| {
                self.vertices
                    .get(dst)
                    .map(|to| Edge::new(from.clone(), to.clone(), w))
            })
            .collect()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（出边指向的顶点），升序去重
    ///
    /// 顶点不存在时返回空集合
    pub fn neighbors(&self, v: &V) -> BTreeSet<V> {
        let Some(src) = self.vertices.lookup(v) else {
            return BTreeSet::new();
        };
        self.adjacency
            .outgoing(src)
            .iter()
            .filter_map(|&(dst, _)| self.vertices.get(dst).cloned())
            .collect()
    }

    /// 获取顶点的出度（顶点不存在时为 0）
    pub fn out_degree(&self, v: &V) -> usize {
        self.vertices
            .lookup(v)
            .map_or(0, |src| self.adjacency.out_degree(src))
    }

    // ==================== 配置与统计 ====================

    /// 获取配置
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// 获取操作统计快照
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Ord + Clone + fmt::Display,
    W: Copy + fmt::Display,
{
    /// 输出图的内部状态，用于调试
    ///
    /// 每个有出边的顶点一行：`v: (v,n1,w1) (v,n2,w2) ...`
    pub fn dump<Wr: Write + ?Sized>(&self, output: &mut Wr) -> Result<()> {
        for (src, out) in self.adjacency.sources() {
            let Some(from) = self.vertices.get(src) else {
                continue;
            };
            let line = self
                .collect_edges(from, out)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(output, "{}: {}", from, line)?;
        }
        Ok(())
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Eq + Hash + Ord + Clone,
    W: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// 与 `dump` 相同的格式
impl<V, W> fmt::Display for Graph<V, W>
where
    V: Eq + Hash + Ord + Clone + fmt::Display,
    W: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.dump(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    fn sample_graph() -> Graph<&'static str, i32> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 5);
        graph.add_edge("A", "C", 2);
        graph.add_edge("C", "D", 7);
        graph
    }

    #[test]
    fn test_graph_basic() {
        let graph = sample_graph();

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.get_weight(&"A", &"C"), Some(2));
        assert_eq!(graph.neighbors(&"A"), BTreeSet::from(["B", "C"]));
        assert_eq!(graph.get_weight(&"B", &"A"), None);
    }

    #[test]
    fn test_add_vertex_duplicate() {
        let mut graph: Graph<String, f64> = Graph::new();

        assert!(graph.add_vertex("x".to_string()));
        assert_eq!(graph.num_vertices(), 1);
        assert!(!graph.add_vertex("x".to_string()));
        assert_eq!(graph.num_vertices(), 1);
        assert!(graph.contains_vertex(&"x".to_string()));
    }

    #[test]
    fn test_add_edge_missing_vertex() {
        let mut graph = sample_graph();

        assert!(!graph.add_edge("A", "Z", 1));
        assert!(!graph.add_edge("Z", "A", 1));
        assert!(!graph.add_edge("Y", "Z", 1));
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.get_weight(&"A", &"Z"), None);
        assert_eq!(graph.stats().edges_rejected, 3);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = sample_graph();

        assert!(graph.add_edge("A", "B", 11));
        assert_eq!(graph.get_weight(&"A", &"B"), Some(11));
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.out_degree(&"A"), 2);

        let stats = graph.stats();
        assert_eq!(stats.edges_added, 3);
        assert_eq!(stats.weights_updated, 1);
    }

    #[test]
    fn test_directed_edges() {
        let mut graph = sample_graph();
        graph.add_edge("B", "A", 8);

        assert_eq!(graph.get_weight(&"A", &"B"), Some(5));
        assert_eq!(graph.get_weight(&"B", &"A"), Some(8));
        assert_eq!(graph.num_edges(), 4);
        assert!(graph.contains_edge(&"B", &"A"));
        assert!(!graph.contains_edge(&"D", &"C"));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = sample_graph();

        assert!(graph.add_edge("D", "D", 1));
        assert_eq!(graph.get_weight(&"D", &"D"), Some(1));
        assert_eq!(graph.neighbors(&"D"), BTreeSet::from(["D"]));
    }

    #[test]
    fn test_neighbors() {
        let mut graph: Graph<char, u32> = Graph::new();
        for v in ['a', 'b', 'c'] {
            graph.add_vertex(v);
        }
        graph.add_edge('a', 'c', 1);
        graph.add_edge('a', 'b', 2);
        graph.add_edge('a', 'b', 3);

        let neighbors: Vec<_> = graph.neighbors(&'a').into_iter().collect();
        assert_eq!(neighbors, vec!['b', 'c']);
        assert!(graph.neighbors(&'z').is_empty());
        assert!(graph.neighbors(&'b').is_empty());
    }

    #[test]
    fn test_get_vertices_order() {
        let mut graph: Graph<&str, i32> = Graph::new();
        for v in ["a", "b", "c"] {
            graph.add_vertex(v);
        }
        let before = graph.get_vertices();

        graph.add_edge("c", "a", 1);
        graph.add_edge("b", "c", 2);

        assert_eq!(before, vec!["a", "b", "c"]);
        assert_eq!(graph.get_vertices(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_edges_listing() {
        let graph = sample_graph();

        let out: Vec<_> = graph
            .get_outgoing_edges(&"A")
            .into_iter()
            .map(Edge::into_parts)
            .collect();
        assert_eq!(out, vec![("A", "B", 5), ("A", "C", 2)]);
        assert!(graph.get_outgoing_edges(&"Z").is_empty());

        let all: Vec<_> = graph.get_edges().into_iter().map(Edge::into_parts).collect();
        assert_eq!(all, vec![("A", "B", 5), ("A", "C", 2), ("C", "D", 7)]);
    }

    #[test]
    fn test_dump_format() {
        let graph = sample_graph();
        let mut buf = Vec::new();
        graph.dump(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines: Vec<_> = text.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["A: (A,B,5) (A,C,2)", "C: (C,D,7)"]);
        assert_eq!(graph.to_string(), text);
    }

    #[test]
    fn test_dump_empty_graph() {
        let graph: Graph<u32, u32> = Graph::new();
        let mut buf = Vec::new();
        graph.dump(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_dump_sink_error() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let graph = sample_graph();
        assert!(matches!(graph.dump(&mut FailingSink), Err(Error::IoError(_))));
    }

    #[test]
    fn test_max_vertices() {
        let config = GraphConfig::new().with_max_vertices(2);
        let mut graph: Graph<u8, u8> = Graph::with_config(config).unwrap();

        assert!(graph.add_vertex(1));
        assert!(graph.add_vertex(2));
        assert!(!graph.add_vertex(3));
        assert!(!graph.add_vertex(1));
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.stats().vertices_rejected, 2);
    }

    #[test]
    fn test_invalid_config() {
        let config = GraphConfig::new().with_max_vertices(0);
        assert!(Graph::<u8, u8>::with_config(config).is_err());
    }

    #[test]
    fn test_with_capacity() {
        let graph: Graph<u64, f32> = Graph::with_capacity(26);
        assert!(graph.is_empty());
        assert_eq!(graph.config().vertex_capacity, 26);
        assert_eq!(graph.num_edges(), 0);
    }

    proptest! {
        #[test]
        fn prop_edge_count_matches_out_degrees(
            vertices in proptest::collection::vec(0u8..32, 0..40),
            edges in proptest::collection::vec((0u8..40, 0u8..40, any::<i16>()), 0..200),
        ) {
            let mut graph: Graph<u8, i16> = Graph::new();
            for v in &vertices {
                graph.add_vertex(*v);
            }
            for &(from, to, w) in &edges {
                let expected = graph.contains_vertex(&from) && graph.contains_vertex(&to);
                prop_assert_eq!(graph.add_edge(from, to, w), expected);
                if expected {
                    prop_assert_eq!(graph.get_weight(&from, &to), Some(w));
                }
            }

            let total: usize = graph.get_vertices().iter().map(|v| graph.out_degree(v)).sum();
            prop_assert_eq!(graph.num_edges(), total);
            prop_assert_eq!(graph.get_edges().len(), total);

            let unique: BTreeSet<u8> = vertices.iter().copied().collect();
            prop_assert_eq!(graph.num_vertices(), unique.len());
        }
    }
}
