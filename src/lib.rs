//! adjgraph - 邻接表图结构
//!
//! 同时支持有向图与无向图：
//! - 顶点与边是共享句柄，按元素哈希、按实例比较
//! - 有向图维护出边表与入边表，无向图只维护一份邻接表
//! - 提供度、关联边、邻接查询
//!
//! ```
//! use adjgraph::{Edge, Graph, Vertex};
//!
//! let mut graph: Graph<&str, f64> = Graph::undirected();
//! let a = graph.insert_vertex(Vertex::new("A")).unwrap();
//! let b = graph.insert_vertex(Vertex::new("B")).unwrap();
//! graph.insert_edge(Edge::weighted(a.clone(), b.clone(), 1.5)).unwrap();
//!
//! assert_eq!(graph.edge_count(), 1);
//! assert!(graph.get_edge(&b, &a).unwrap().is_some());
//! ```

pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Direction, Edge, Graph, Vertex, WeightLabel};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
