//! 图操作统计
//!
//! 记录变更操作的计数，供调用方观察插入、覆盖和拒绝的情况

use serde::{Deserialize, Serialize};

/// 图操作统计
///
/// 图由调用方独占，计数器不需要原子类型
#[derive(Debug, Clone, Default)]
pub struct GraphStats {
    /// 顶点插入数
    vertices_added: u64,
    /// 被拒绝的顶点插入数（重复或已满）
    vertices_rejected: u64,
    /// 新建边数
    edges_added: u64,
    /// 权重覆盖数
    weights_updated: u64,
    /// 被拒绝的边插入数（端点不存在）
    edges_rejected: u64,
}

/// 可导出的统计快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub vertices_added: u64,
    pub vertices_rejected: u64,
    pub edges_added: u64,
    pub weights_updated: u64,
    pub edges_rejected: u64,
}

impl GraphStats {
    /// 创建空统计
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录顶点插入
    pub fn record_vertex_added(&mut self) {
        self.vertices_added += 1;
    }

    /// 记录顶点插入被拒绝
    pub fn record_vertex_rejected(&mut self) {
        self.vertices_rejected += 1;
    }

    /// 记录新边
    pub fn record_edge_added(&mut self) {
        self.edges_added += 1;
    }

    /// 记录权重覆盖
    pub fn record_weight_updated(&mut self) {
        self.weights_updated += 1;
    }

    /// 记录边插入被拒绝
    pub fn record_edge_rejected(&mut self) {
        self.edges_rejected += 1;
    }

    /// 获取统计快照
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            vertices_added: self.vertices_added,
            vertices_rejected: self.vertices_rejected,
            edges_added: self.edges_added,
            weights_updated: self.weights_updated,
            edges_rejected: self.edges_rejected,
        }
    }
}

impl StatsSnapshot {
    /// 成功的边写入次数（新建 + 覆盖）
    pub fn edge_writes(&self) -> u64 {
        self.edges_added + self.weights_updated
    }
}
