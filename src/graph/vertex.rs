//! 顶点注册表
//!
//! 按插入顺序保存顶点，并维护顶点到位置的哈希索引

use indexmap::IndexSet;
use std::hash::Hash;

/// 顶点在注册表中的位置（插入序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 顶点注册表
///
/// 位置一旦分配就不会改变（不支持删除），邻接索引直接以位置引用顶点
#[derive(Debug, Clone)]
pub struct VertexRegistry<V> {
    vertices: IndexSet<V>,
}

impl<V: Eq + Hash> VertexRegistry<V> {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
        }
    }

    /// 创建带预分配容量的注册表
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexSet::with_capacity(capacity),
        }
    }

    /// 插入顶点，已存在时返回 None
    pub fn insert(&mut self, vertex: V) -> Option<VertexId> {
        let (index, inserted) = self.vertices.insert_full(vertex);
        inserted.then(|| VertexId::new(index))
    }

    /// 查找顶点位置
    pub fn lookup(&self, vertex: &V) -> Option<VertexId> {
        self.vertices.get_index_of(vertex).map(VertexId::new)
    }

    /// 按位置获取顶点
    pub fn get(&self, id: VertexId) -> Option<&V> {
        self.vertices.get_index(id.as_usize())
    }

    /// 是否包含顶点
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// 顶点数量
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }
}

impl<V: Eq + Hash> Default for VertexRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
