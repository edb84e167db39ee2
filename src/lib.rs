//! wgraph - 泛型有向带权图
//!
//! 面向图算法的基础数据结构，支持：
//! - 任意顶点类型（可比较、可哈希、全序）与任意可拷贝的权重类型
//! - 顶点去重并保留插入顺序，O(1) 顶点查找
//! - 有向边，每个有序顶点对最多一条边，重复添加覆盖权重
//! - 对不存在的顶点或边的查询返回 false / None / 空集合，从不报错

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId};
pub use metrics::{GraphStats, StatsSnapshot};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
