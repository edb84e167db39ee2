//! 邻接索引
//!
//! 每个顶点位置对应一个出边列表，列表项为 (目标顶点位置, 权重)

use crate::graph::vertex::VertexId;
use smallvec::SmallVec;

/// 单个顶点的出边列表，出度较小时不做堆分配
pub type OutEdges<W> = SmallVec<[(VertexId, W); 4]>;

/// 写入边的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpsert<W> {
    /// 新建边
    Inserted,
    /// 覆盖已有边，携带旧权重
    Updated(W),
}

/// 邻接索引
///
/// 与顶点注册表按位置对齐：注册表每插入一个顶点，这里追加一个空列表
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<W> {
    /// 顶点位置到出边列表
    outgoing: Vec<OutEdges<W>>,
    /// 边总数（等于所有出度之和）
    edge_count: usize,
}

impl<W: Copy> AdjacencyIndex<W> {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            outgoing: Vec::new(),
            edge_count: 0,
        }
    }

    /// 创建带预分配容量的索引
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outgoing: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// 为新顶点追加空出边列表，返回其位置
    pub fn push_vertex(&mut self) -> VertexId {
        self.outgoing.push(OutEdges::new());
        VertexId::new(self.outgoing.len() - 1)
    }

    /// 已登记的顶点数量
    pub fn vertex_slots(&self) -> usize {
        self.outgoing.len()
    }

    /// 添加或覆盖边
    ///
    /// 任一端点未登记时返回 None，索引保持不变
    pub fn upsert(&mut self, from: VertexId, to: VertexId, weight: W) -> Option<EdgeUpsert<W>> {
        if to.as_usize() >= self.outgoing.len() {
            return None;
        }
        let edges = self.outgoing.get_mut(from.as_usize())?;

        if let Some(entry) = edges.iter_mut().find(|(dst, _)| *dst == to) {
            let old = std::mem::replace(&mut entry.1, weight);
            return Some(EdgeUpsert::Updated(old));
        }

        edges.push((to, weight));
        self.edge_count += 1;
        Some(EdgeUpsert::Inserted)
    }

    /// 获取边权重
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.outgoing(from)
            .iter()
            .find(|(dst, _)| *dst == to)
            .map(|&(_, w)| w)
    }

    /// 获取顶点的出边（未登记的顶点返回空切片）
    pub fn outgoing(&self, from: VertexId) -> &[(VertexId, W)] {
        self.outgoing
            .get(from.as_usize())
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, from: VertexId) -> usize {
        self.outgoing(from).len()
    }

    /// 边总数
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 遍历所有至少有一条出边的顶点
    pub fn sources(&self) -> impl Iterator<Item = (VertexId, &[(VertexId, W)])> {
        self.outgoing
            .iter()
            .enumerate()
            .filter(|(_, edges)| !edges.is_empty())
            .map(|(i, edges)| (VertexId::new(i), edges.as_slice()))
    }
}

impl<W: Copy> Default for AdjacencyIndex<W> {
    fn default() -> Self {
        Self::new()
    }
}
