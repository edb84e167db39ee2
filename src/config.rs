//! 图配置
//!
//! 预分配容量和可选的顶点上限

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 图配置
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 顶点预分配数量（仅作为容量提示）
    pub vertex_capacity: usize,
    /// 顶点上限，达到后 `add_vertex` 返回 false
    pub max_vertices: Option<usize>,
}

impl GraphConfig {
    /// 创建默认配置（无预分配、无上限）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置顶点预分配数量
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    /// 设置顶点上限
    pub fn with_max_vertices(mut self, max: usize) -> Self {
        self.max_vertices = Some(max);
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_vertices {
            if max == 0 {
                return Err(Error::InvalidConfig("max_vertices 不能为 0".to_string()));
            }
            if self.vertex_capacity > max {
                return Err(Error::InvalidConfig(format!(
                    "vertex_capacity ({}) 超过 max_vertices ({})",
                    self.vertex_capacity, max
                )));
            }
        }
        Ok(())
    }

    /// 当前顶点数是否已达到上限
    pub(crate) fn is_full(&self, vertex_count: usize) -> bool {
        self.max_vertices.map_or(false, |max| vertex_count >= max)
    }
}
