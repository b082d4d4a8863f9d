//! 顶点定义
//!
//! 顶点是调用方元素的共享句柄：哈希取自元素，相等性取自实例身份

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// 顶点
///
/// 克隆只复制句柄，不复制元素。两个包装相等元素的不同顶点哈希值相同，
/// 但互不相等，在邻接表中是两个不同的键。
pub struct Vertex<T> {
    element: Arc<T>,
}

impl<T> Vertex<T> {
    /// 创建新顶点
    pub fn new(element: T) -> Self {
        Self {
            element: Arc::new(element),
        }
    }

    /// 获取元素
    pub fn element(&self) -> &T {
        &self.element
    }

    /// 是否为同一个顶点实例
    pub fn is_same(&self, other: &Vertex<T>) -> bool {
        Arc::ptr_eq(&self.element, &other.element)
    }
}

impl<T> Clone for Vertex<T> {
    fn clone(&self) -> Self {
        Self {
            element: Arc::clone(&self.element),
        }
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl<T> Eq for Vertex<T> {}

impl<T: Hash> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex(element={:?})", self.element)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex(element={})", self.element)
    }
}
