/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph 的存储：节点 arena + 按源节点分桶的邻接表
 */

use super::error::GraphError;
use crate::nn::{Edge, NodeId, NodeInfo};
use std::collections::BTreeMap;

/// 每个源节点的出边桶：dest_id -> Edge
pub type EdgeBucket = BTreeMap<NodeId, Edge>;

/// 通用的有向图结构（不含任何训练语义）
///
/// - 节点存放在按 id 索引的稠密数组里，图独占所有节点
/// - 边按源节点分桶，每个 (source, dest) 有序对至多一条边
/// - 节点数量在构造/`resize` 时确定，id 在图的生命周期内不会被回收
///
/// `Clone` 是深拷贝：新图拥有独立的节点与边。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub(in crate::nn) nodes: Vec<NodeInfo>,
    pub(in crate::nn) adjacency: Vec<EdgeBucket>,
}

impl Graph {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::default()
    }

    /// 创建含 `size` 个默认节点（identity、零偏置）的图
    pub fn with_size(size: usize) -> Self {
        Self {
            nodes: vec![NodeInfo::default(); size],
            adjacency: vec![EdgeBucket::new(); size],
        }
    }

    /// 为空图分配恰好 `size` 个节点槽位及对应的空出边桶
    ///
    /// 已含节点的图不能再改变大小，否则已有的 id 会失效
    pub fn resize(&mut self, size: usize) -> Result<(), GraphError> {
        if !self.nodes.is_empty() {
            return Err(GraphError::InvalidOperation(format!(
                "只能对空图调用 resize，当前图已有 {} 个节点",
                self.nodes.len()
            )));
        }
        self.nodes = vec![NodeInfo::default(); size];
        self.adjacency = vec![EdgeBucket::new(); size];
        Ok(())
    }

    // ========== 基础访问器 ==========

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn get_node(&self, id: NodeId) -> Result<&NodeInfo, GraphError> {
        self.nodes
            .get(id.index())
            .ok_or(GraphError::NodeNotFound(id))
    }

    pub fn get_node_mut(&mut self, id: NodeId) -> Result<&mut NodeInfo, GraphError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(GraphError::NodeNotFound(id))
    }

    /// 用 `info` 的副本替换 `id` 处的节点
    pub fn set_node(&mut self, id: NodeId, info: NodeInfo) -> Result<(), GraphError> {
        *self.get_node_mut(id)? = info;
        Ok(())
    }

    // ========== 边 ==========

    /// 设置边 `source -> dest` 的权重
    ///
    /// 边已存在时只改权重，保留已累积的梯度；否则插入一条梯度为 0 的新边。
    /// 存在性只在源节点的桶里检查（边只按源节点存放）。
    pub fn set_edge(
        &mut self,
        source: NodeId,
        dest: NodeId,
        weight: f64,
    ) -> Result<(), GraphError> {
        if !self.contains_node(source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.contains_node(dest) {
            return Err(GraphError::NodeNotFound(dest));
        }
        self.adjacency[source.index()]
            .entry(dest)
            .and_modify(|edge| edge.weight = weight)
            .or_insert_with(|| Edge::new(source, dest, weight));
        Ok(())
    }

    pub fn get_edge(&self, source: NodeId, dest: NodeId) -> Option<&Edge> {
        self.adjacency.get(source.index())?.get(&dest)
    }

    pub fn get_edge_mut(&mut self, source: NodeId, dest: NodeId) -> Option<&mut Edge> {
        self.adjacency.get_mut(source.index())?.get_mut(&dest)
    }

    /// 节点 `id` 的全部出边（按 dest 升序）
    pub fn edges_from(&self, id: NodeId) -> Result<&EdgeBucket, GraphError> {
        self.adjacency
            .get(id.index())
            .ok_or(GraphError::NodeNotFound(id))
    }

    pub fn get_node_children(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        Ok(self.edges_from(id)?.keys().copied().collect())
    }

    /// 没有出边的节点视为输出节点
    pub fn is_sink(&self, id: NodeId) -> Result<bool, GraphError> {
        Ok(self.edges_from(id)?.is_empty())
    }

    /// 图中全部边，按 (source, dest) 升序
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flat_map(BTreeMap::values)
    }

    pub(in crate::nn) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> + '_ {
        self.adjacency.iter_mut().flat_map(BTreeMap::values_mut)
    }

    pub fn edges_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum()
    }

    // ========== 激活状态 ==========

    /// 把所有节点的激活前/后值清零（偏置和梯度保持不变）
    pub(in crate::nn) fn flush_activations(&mut self) {
        for node in &mut self.nodes {
            node.flush();
        }
    }
}
