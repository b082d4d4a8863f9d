//! 图数据结构
//!
//! 基于邻接表的图：每个顶点映射到 (邻居顶点 -> 边) 的有序表。
//! 有向图维护出边表和入边表两份索引；无向图只维护一份，入边视图直接指向出边表，
//! 每条边在两个端点下各登记一次。

use super::edge::{Edge, WeightLabel};
use super::vertex::Vertex;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::map::{Keys, Values};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// 单个顶点的邻居表
type NeighborMap<T, W> = IndexMap<Vertex<T>, Edge<T, W>>;

/// 邻接表
type AdjacencyMap<T, W> = IndexMap<Vertex<T>, NeighborMap<T, W>>;

/// 邻接方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// 出边
    #[default]
    Outgoing,
    /// 入边
    Incoming,
}

/// 图
#[derive(Debug)]
pub struct Graph<T, W = ()> {
    /// 出边表
    outgoing: AdjacencyMap<T, W>,
    /// 入边表，无向图为 None（入边视图即出边表）
    incoming: Option<AdjacencyMap<T, W>>,
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self {
            outgoing: IndexMap::new(),
            incoming: None,
        }
    }
}

impl<T: Hash, W> Graph<T, W> {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self::from_config(&GraphConfig {
            directed,
            ..GraphConfig::default()
        })
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// 按配置创建空图
    pub fn from_config(config: &GraphConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            outgoing: IndexMap::with_capacity(capacity),
            incoming: config.directed.then(|| IndexMap::with_capacity(capacity)),
        }
    }

    /// 是否为有向图
    pub fn is_directed(&self) -> bool {
        self.incoming.is_some()
    }

    fn adjacency(&self, direction: Direction) -> &AdjacencyMap<T, W> {
        match (direction, &self.incoming) {
            (Direction::Incoming, Some(incoming)) => incoming,
            _ => &self.outgoing,
        }
    }

    // ==================== 顶点操作 ====================

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// 按插入顺序遍历所有顶点
    pub fn vertices(&self) -> Keys<'_, Vertex<T>, NeighborMap<T, W>> {
        self.outgoing.keys()
    }

    /// 顶点是否已加入图中
    pub fn contains_vertex(&self, v: &Vertex<T>) -> bool {
        self.outgoing.contains_key(v)
    }

    // ==================== 边操作 ====================

    /// 获取所有边（按实例去重）
    pub fn edges(&self) -> IndexSet<&Edge<T, W>> {
        self.outgoing
            .values()
            .flat_map(|neighbors| neighbors.values())
            .collect()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        let total: usize = self.outgoing.values().map(|neighbors| neighbors.len()).sum();
        if self.is_directed() {
            return total;
        }

        // 无向图中自环只登记一次，其余边在两个端点下各登记一次
        let self_loops = self
            .outgoing
            .iter()
            .filter(|(v, neighbors)| neighbors.contains_key(*v))
            .count();
        (total + self_loops) / 2
    }
}

// 错误信息需要格式化顶点
impl<T: Hash + fmt::Debug, W> Graph<T, W> {
    fn neighbor_map(&self, v: &Vertex<T>, direction: Direction) -> Result<&NeighborMap<T, W>> {
        self.adjacency(direction)
            .get(v)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", v)))
    }

    fn neighbor_map_mut<'a>(
        map: &'a mut AdjacencyMap<T, W>,
        v: &Vertex<T>,
    ) -> Result<&'a mut NeighborMap<T, W>> {
        map.get_mut(v)
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", v)))
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 同一实例重复添加会返回 `VertexAlreadyExists`，已有的边不受影响。
    pub fn insert_vertex(&mut self, vertex: Vertex<T>) -> Result<Vertex<T>> {
        if self.outgoing.contains_key(&vertex) {
            return Err(Error::VertexAlreadyExists(format!("{:?}", vertex)));
        }

        self.outgoing.insert(vertex.clone(), IndexMap::new());
        if let Some(incoming) = self.incoming.as_mut() {
            incoming.insert(vertex.clone(), IndexMap::new());
        }

        debug!(vertex = ?vertex, vertex_count = self.outgoing.len(), "插入顶点");
        Ok(vertex)
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 两个端点必须已加入图中，否则返回 `VertexNotFound` 且不做任何写入。
    /// 同一有序顶点对之间再次插入会覆盖原有的边。
    pub fn insert_edge(&mut self, edge: Edge<T, W>) -> Result<Edge<T, W>> {
        let origin = edge.origin().clone();
        let destination = edge.destination().clone();

        // 先校验两个端点，保证失败时图不变
        for endpoint in [&origin, &destination] {
            if !self.outgoing.contains_key(endpoint) {
                return Err(Error::VertexNotFound(format!("{:?}", endpoint)));
            }
        }

        let replaced = Self::neighbor_map_mut(&mut self.outgoing, &origin)?
            .insert(destination.clone(), edge.clone());
        if replaced.is_some() {
            trace!(origin = ?origin, destination = ?destination, "覆盖已有的边");
        }

        let reverse = match self.incoming.as_mut() {
            Some(incoming) => incoming,
            None => &mut self.outgoing,
        };
        Self::neighbor_map_mut(reverse, &destination)?.insert(origin.clone(), edge.clone());

        debug!(
            origin = ?origin,
            destination = ?destination,
            directed = self.is_directed(),
            "插入边"
        );
        Ok(edge)
    }

    /// 获取 u 到 v 的边，不相邻时返回 `None`
    pub fn get_edge(&self, u: &Vertex<T>, v: &Vertex<T>) -> Result<Option<&Edge<T, W>>> {
        Ok(self.neighbor_map(u, Direction::Outgoing)?.get(v))
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点在指定方向上的度
    pub fn degree(&self, v: &Vertex<T>, direction: Direction) -> Result<usize> {
        Ok(self.neighbor_map(v, direction)?.len())
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, v: &Vertex<T>) -> Result<usize> {
        self.degree(v, Direction::Outgoing)
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, v: &Vertex<T>) -> Result<usize> {
        self.degree(v, Direction::Incoming)
    }

    /// 获取顶点在指定方向上的关联边
    pub fn incident_edges(
        &self,
        v: &Vertex<T>,
        direction: Direction,
    ) -> Result<Values<'_, Vertex<T>, Edge<T, W>>> {
        Ok(self.neighbor_map(v, direction)?.values())
    }

    /// 获取顶点在指定方向上的邻居
    pub fn neighbors(
        &self,
        v: &Vertex<T>,
        direction: Direction,
    ) -> Result<Keys<'_, Vertex<T>, Edge<T, W>>> {
        Ok(self.neighbor_map(v, direction)?.keys())
    }
}

impl<T: fmt::Display, W: WeightLabel> fmt::Display for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.outgoing {
            if neighbors.is_empty() {
                writeln!(f, "{} is not connected to anything.", vertex)?;
                continue;
            }
            write!(f, "{} is connected to\n\t", vertex)?;
            for (idx, (neighbor, edge)) in neighbors.iter().enumerate() {
                if idx > 0 {
                    write!(f, "\n\t")?;
                }
                writeln!(f, "{} with", neighbor)?;
                writeln!(f, "\t{}", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
