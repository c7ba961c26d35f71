/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 创建、按层全连接构建与基础访问器
 */

use super::{Mode, NeuralNetwork};
use crate::nn::{Activation, Graph, GraphError, NetworkConfig, NodeId, NodeInfo};
use rand::Rng;
use rand::SeedableRng;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use std::collections::HashMap;

impl NeuralNetwork {
    // ========== 创建 ==========

    /// 创建含 `size` 个默认节点、没有任何边的网络
    pub fn new(size: usize) -> Self {
        Self::with_config(size, NetworkConfig::default())
    }

    pub fn with_config(size: usize, config: NetworkConfig) -> Self {
        let rng = config.seed.map(StdRng::seed_from_u64);
        Self {
            graph: Graph::with_size(size),
            layers: Vec::new(),
            input_node_ids: Vec::new(),
            output_node_ids: Vec::new(),
            config,
            mode: Mode::Train,
            pending_examples: 0,
            contributions: HashMap::new(),
            rng,
        }
    }

    /// 按层规格构建全连接网络
    ///
    /// 相邻两层之间两两相连，初始权重取自标准正态分布，偏置为 0。
    /// 至少需要 2 层（输入层和输出层），且每层至少 1 个节点。
    pub fn from_layers(
        specs: &[(usize, Activation)],
        config: NetworkConfig,
    ) -> Result<Self, GraphError> {
        if specs.len() < 2 {
            return Err(GraphError::InvalidOperation(format!(
                "神经网络至少需要 2 层，但得到 {} 层",
                specs.len()
            )));
        }
        let mut network = Self::with_config(0, config);
        network.build_fully_connected(specs)?;
        Ok(network)
    }

    /// 在空网络上逐层创建节点，并把每层与上一层全连接
    pub(in crate::nn::network) fn build_fully_connected(
        &mut self,
        specs: &[(usize, Activation)],
    ) -> Result<(), GraphError> {
        if let Some(index) = specs.iter().position(|&(size, _)| size == 0) {
            return Err(GraphError::InvalidOperation(format!(
                "第 {index} 层没有节点"
            )));
        }

        let total = specs
            .iter()
            .try_fold(0usize, |acc, &(size, _)| acc.checked_add(size))
            .ok_or_else(|| {
                GraphError::InvalidOperation("各层节点数之和超出可表示的范围".to_string())
            })?;
        self.graph.resize(total)?;

        let mut next_id = 0;
        let mut previous_layer: Vec<NodeId> = Vec::new();
        let mut layers = Vec::with_capacity(specs.len());
        for &(size, activation) in specs {
            let current_layer: Vec<NodeId> = (next_id..next_id + size).map(NodeId).collect();
            next_id += size;

            for &id in &current_layer {
                self.graph.set_node(id, NodeInfo::new(activation, 0.0, 0.0))?;
            }
            for &source in &previous_layer {
                for &dest in &current_layer {
                    let weight = self.sample_standard_normal();
                    self.graph.set_edge(source, dest, weight)?;
                }
            }

            previous_layer.clone_from(&current_layer);
            layers.push(current_layer);
        }

        self.set_layers(layers)
    }

    /// 从标准正态分布采样一个初始权重（Box-Muller）
    pub(in crate::nn::network) fn sample_standard_normal(&mut self) -> f64 {
        match self.rng.as_mut() {
            Some(rng) => standard_normal(rng),
            None => standard_normal(&mut rand::thread_rng()),
        }
    }

    // ========== 配置 ==========

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub const fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub const fn set_learning_rate(&mut self, learning_rate: f64) {
        self.config.learning_rate = learning_rate;
    }

    /// 设置/重置网络的随机种子
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = Some(StdRng::seed_from_u64(seed));
    }

    pub const fn pending_examples(&self) -> usize {
        self.pending_examples
    }

    // ========== 基础访问器 ==========

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn nodes_count(&self) -> usize {
        self.graph.nodes_count()
    }

    pub fn layers(&self) -> &[Vec<NodeId>] {
        &self.layers
    }

    pub fn input_node_ids(&self) -> &[NodeId] {
        &self.input_node_ids
    }

    pub fn output_node_ids(&self) -> &[NodeId] {
        &self.output_node_ids
    }

    /// 设置层划分，并由首层/末层得出输入/输出节点
    ///
    /// 各层依次拼接后必须恰好是 `0..N-1`（即按创建顺序划分全部节点），
    /// 这样保存出的模型文件才能按层重新分配出相同的 id。
    pub fn set_layers(&mut self, layers: Vec<Vec<NodeId>>) -> Result<(), GraphError> {
        if layers.len() < 2 {
            return Err(GraphError::InvalidOperation(format!(
                "神经网络至少需要 2 层，但得到 {} 层",
                layers.len()
            )));
        }
        if layers.iter().any(Vec::is_empty) {
            return Err(GraphError::InvalidOperation("层不能为空".to_string()));
        }
        let in_creation_order = layers
            .iter()
            .flatten()
            .enumerate()
            .all(|(expected, id)| id.index() == expected);
        let covered: usize = layers.iter().map(Vec::len).sum();
        if !in_creation_order || covered != self.graph.nodes_count() {
            return Err(GraphError::InvalidOperation(format!(
                "层必须按创建顺序划分全部 {} 个节点",
                self.graph.nodes_count()
            )));
        }

        self.input_node_ids.clone_from(&layers[0]);
        self.output_node_ids.clone_from(&layers[layers.len() - 1]);
        self.layers = layers;
        Ok(())
    }

    pub fn set_input_node_ids(&mut self, ids: Vec<NodeId>) -> Result<(), GraphError> {
        self.check_node_ids(&ids)?;
        self.input_node_ids = ids;
        Ok(())
    }

    pub fn set_output_node_ids(&mut self, ids: Vec<NodeId>) -> Result<(), GraphError> {
        self.check_node_ids(&ids)?;
        self.output_node_ids = ids;
        Ok(())
    }

    fn check_node_ids(&self, ids: &[NodeId]) -> Result<(), GraphError> {
        match ids.iter().find(|&&id| !self.graph.contains_node(id)) {
            Some(&id) => Err(GraphError::NodeNotFound(id)),
            None => Ok(()),
        }
    }

    /// 清空所有节点的激活值和 contribution 缓存，为下一个样本做准备
    pub(in crate::nn::network) fn flush(&mut self) {
        self.graph.flush_activations();
        self.contributions.clear();
    }
}

fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u1: f64 = Standard.sample(rng);
        let u2: f64 = Standard.sample(rng);
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        // u1 恰为 0 时 ln 发散，重新采样
        if z.is_finite() {
            return z;
        }
    }
}
