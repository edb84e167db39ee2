//! 边定义
//!
//! 查询返回的边是独立的值拷贝，不引用图内部存储

use std::fmt;

/// 有向带权边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    /// 源顶点
    from: V,
    /// 目标顶点
    to: V,
    /// 权重
    weight: W,
}

impl<V, W: Copy> Edge<V, W> {
    /// 创建新边
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// 获取源顶点
    pub fn from(&self) -> &V {
        &self.from
    }

    /// 获取目标顶点
    pub fn to(&self) -> &V {
        &self.to
    }

    /// 获取权重
    pub fn weight(&self) -> W {
        self.weight
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }

    /// 拆分为 (from, to, weight)
    pub fn into_parts(self) -> (V, V, W) {
        (self.from, self.to, self.weight)
    }
}

/// 调试输出格式：`(from,to,weight)`
impl<V: fmt::Display, W: fmt::Display> fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.from, self.to, self.weight)
    }
}
