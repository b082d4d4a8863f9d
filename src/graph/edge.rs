//! 边定义
//!
//! 两个顶点之间的有向弧，可携带任意类型的权重

use crate::graph::vertex::Vertex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

struct EdgeInner<T, W> {
    /// 源顶点
    origin: Vertex<T>,
    /// 目标顶点
    destination: Vertex<T>,
    /// 权重
    weight: Option<W>,
}

/// 边
///
/// 端点在构造后不可变。边本身总是有序的 (origin, destination)，
/// 无向与否由图的索引方式决定。克隆只复制句柄，同一条边插入多处时共享同一实例。
pub struct Edge<T, W = ()> {
    inner: Arc<EdgeInner<T, W>>,
}

impl<T, W> Edge<T, W> {
    /// 创建无权重的边
    pub fn new(origin: Vertex<T>, destination: Vertex<T>) -> Self {
        Self::with_weight(origin, destination, None)
    }

    /// 创建带权重的边
    pub fn weighted(origin: Vertex<T>, destination: Vertex<T>, weight: W) -> Self {
        Self::with_weight(origin, destination, Some(weight))
    }

    fn with_weight(origin: Vertex<T>, destination: Vertex<T>, weight: Option<W>) -> Self {
        Self {
            inner: Arc::new(EdgeInner {
                origin,
                destination,
                weight,
            }),
        }
    }

    /// 获取 (源顶点, 目标顶点)
    pub fn endpoints(&self) -> (&Vertex<T>, &Vertex<T>) {
        (&self.inner.origin, &self.inner.destination)
    }

    /// 获取源顶点
    pub fn origin(&self) -> &Vertex<T> {
        &self.inner.origin
    }

    /// 获取目标顶点
    pub fn destination(&self) -> &Vertex<T> {
        &self.inner.destination
    }

    /// 获取另一端点
    ///
    /// 按实例身份匹配 `v`；`v` 不是任一端点时返回 `None`。
    pub fn opposite(&self, v: &Vertex<T>) -> Option<&Vertex<T>> {
        if v.is_same(&self.inner.origin) {
            Some(&self.inner.destination)
        } else if v.is_same(&self.inner.destination) {
            Some(&self.inner.origin)
        } else {
            None
        }
    }

    /// 获取权重
    pub fn weight(&self) -> Option<&W> {
        self.inner.weight.as_ref()
    }

    /// 源与目标是否为同一顶点
    pub fn is_self_loop(&self) -> bool {
        self.inner.origin.is_same(&self.inner.destination)
    }

    /// 是否为同一条边实例
    pub fn is_same(&self, other: &Edge<T, W>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T, W> Clone for Edge<T, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, W> PartialEq for Edge<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl<T, W> Eq for Edge<T, W> {}

// 权重不参与哈希
impl<T: Hash, W> Hash for Edge<T, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.origin.hash(state);
        self.inner.destination.hash(state);
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for Edge<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge(origin={:?}, destination={:?}, weight={:?})",
            self.inner.origin, self.inner.destination, self.inner.weight
        )
    }
}

/// 权重在邻接表输出中的文本
///
/// 无权重的边统一输出 `None`。自定义权重类型实现此 trait 后即可打印。
pub trait WeightLabel {
    fn fmt_label(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl WeightLabel for () {
    fn fmt_label(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

impl<W: WeightLabel + ?Sized> WeightLabel for &W {
    fn fmt_label(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_label(f)
    }
}

macro_rules! display_weight_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WeightLabel for $ty {
                fn fmt_label(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_weight_label!(
    str, String, char, bool, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize,
);

impl<T: fmt::Display, W: WeightLabel> fmt::Display for Edge<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge(origin={}, destination={}, weight=",
            self.inner.origin, self.inner.destination
        )?;
        match &self.inner.weight {
            Some(w) => w.fmt_label(f)?,
            None => write!(f, "None")?,
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_edge_endpoints() {
        let a = Vertex::new("A");
        let b = Vertex::new("B");
        let e = Edge::weighted(a.clone(), b.clone(), 0.5);

        let (o, d) = e.endpoints();
        assert!(o.is_same(&a));
        assert!(d.is_same(&b));
        assert_eq!(e.weight(), Some(&0.5));
        assert!(!e.is_self_loop());
    }

    #[test]
    fn test_edge_opposite() {
        let a = Vertex::new("A");
        let b = Vertex::new("B");
        let e: Edge<&str> = Edge::new(a.clone(), b.clone());

        assert!(e.opposite(&a).unwrap().is_same(&b));
        assert!(e.opposite(&b).unwrap().is_same(&a));

        // 元素相等但实例不同，不算端点
        let other_a = Vertex::new("A");
        assert!(e.opposite(&other_a).is_none());
    }

    #[test]
    fn test_edge_self_loop_opposite() {
        let a = Vertex::new(1);
        let e: Edge<i32> = Edge::new(a.clone(), a.clone());
        assert!(e.is_self_loop());
        assert!(e.opposite(&a).unwrap().is_same(&a));
    }

    #[test]
    fn test_edge_hash_ignores_weight() {
        let a = Vertex::new("A");
        let b = Vertex::new("B");
        let e1 = Edge::weighted(a.clone(), b.clone(), "x");
        let e2 = Edge::weighted(a.clone(), b.clone(), "y");

        assert_eq!(hash_of(&e1), hash_of(&e2));
        assert_ne!(e1, e2);
        assert_eq!(e1, e1.clone());
    }

    #[test]
    fn test_edge_format() {
        let a = Vertex::new("A");
        let b = Vertex::new("B");
        let weighted = Edge::weighted(a.clone(), b.clone(), "x");
        let plain: Edge<&str, &str> = Edge::new(a, b);

        assert_eq!(
            weighted.to_string(),
            "Edge(origin=Vertex(element=A), destination=Vertex(element=B), weight=x)"
        );
        assert_eq!(
            plain.to_string(),
            "Edge(origin=Vertex(element=A), destination=Vertex(element=B), weight=None)"
        );
    }

    #[test]
    fn test_edge_format_default_weight() {
        let a = Vertex::new(1);
        let b = Vertex::new(2);
        let plain: Edge<i32> = Edge::new(a.clone(), b.clone());
        let numeric = Edge::weighted(a.clone(), b.clone(), 2.5);
        let owned = Edge::weighted(a, b, String::from("toll"));

        assert_eq!(
            plain.to_string(),
            "Edge(origin=Vertex(element=1), destination=Vertex(element=2), weight=None)"
        );
        assert!(numeric.to_string().ends_with("weight=2.5)"));
        assert!(owned.to_string().ends_with("weight=toll)"));
    }
}
