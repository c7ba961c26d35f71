/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 前向传播（predict）
 */

use super::NeuralNetwork;
use crate::data::DataInstance;
use crate::nn::{GraphError, NodeId};
use log::warn;
use std::collections::VecDeque;

impl NeuralNetwork {
    /// 计算一个样本的预测值（输出层各节点的激活后值，按输出层顺序）
    ///
    /// - 评估模式：得到输出后立即清空激活状态
    /// - 训练模式：待处理样本数加一，并以真实标签和（唯一的）输出值触发反向梯度累积
    ///
    /// 特征数与输入层节点数不一致时返回 `InputSizeMismatch`，网络状态不变。
    ///
    /// 前向传播要求网络可由逐层全连接构建（如 `from_layers`/`load` 的结果），
    /// 这样广度优先的到达顺序才是合法的依赖顺序；本方法不做检查。
    pub fn predict(&mut self, instance: &DataInstance) -> Result<Vec<f64>, GraphError> {
        if self.is_train_mode() && self.output_node_ids.is_empty() {
            return Err(GraphError::InvalidOperation(
                "训练模式下 predict 需要至少 1 个输出节点".to_string(),
            ));
        }

        let output = self.propagate(&instance.features)?;

        if self.is_train_mode() {
            self.pending_examples += 1;
            self.contribute(f64::from(instance.label), output[0])?;
        } else {
            self.flush();
        }
        Ok(output)
    }

    /// 从全部输入节点同时出发做广度优先传播，每个节点恰好出队处理一次
    fn propagate(&mut self, features: &[f64]) -> Result<Vec<f64>, GraphError> {
        if features.len() != self.input_node_ids.len() {
            warn!(
                "输入长度不匹配：网络期望 {} 个特征，实际得到 {} 个",
                self.input_node_ids.len(),
                features.len()
            );
            return Err(GraphError::InputSizeMismatch {
                expected: self.input_node_ids.len(),
                got: features.len(),
            });
        }

        let mut visited = vec![false; self.graph.nodes_count()];
        let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(self.graph.nodes_count());

        for (&id, &value) in self.input_node_ids.iter().zip(features) {
            self.graph.get_node_mut(id)?.pre_activation = value;
            visited[id.index()] = true;
            queue.push_back(id);
        }

        let graph = &mut self.graph;
        while let Some(current) = queue.pop_front() {
            let post_activation = {
                let node = graph
                    .nodes
                    .get_mut(current.index())
                    .ok_or(GraphError::NodeNotFound(current))?;
                node.pre_activation += node.bias;
                node.activate()
            };

            for edge in graph.adjacency[current.index()].values() {
                graph.nodes[edge.dest.index()].pre_activation += post_activation * edge.weight;
                if !visited[edge.dest.index()] {
                    visited[edge.dest.index()] = true;
                    queue.push_back(edge.dest);
                }
            }
        }

        self.output_node_ids
            .iter()
            .map(|&id| self.graph.get_node(id).map(|node| node.post_activation))
            .collect()
    }
}
