/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 反向梯度累积（记忆化的后序遍历）
 *
 * contribution 即损失对节点激活前值的梯度（经典反向传播中的 delta）：
 * - 输出节点（无出边）：-(y - p) / (p * (1 - p))，再乘以激活函数导数
 * - 其他节点：Σ w(v->d) * contribution(d)，再乘以激活函数导数
 * 同时把 contribution(d) * post(v) 累加进边 v->d 的权重梯度，
 * 把节点自身的 contribution 累加进其偏置梯度。
 *
 * 递归改写为显式工作栈，每个节点在一次反向传播中至多计算一次。
 */

use super::NeuralNetwork;
use crate::nn::{GraphError, NodeId};
use log::trace;
use std::collections::HashSet;

/// 工作栈中的帧
enum Frame {
    /// 首次访问：先压入后继节点
    Expand(NodeId),
    /// 后继都已求出：计算本节点的 contribution
    Settle(NodeId),
}

impl NeuralNetwork {
    /// 以真实标签 `label` 和预测值 `predicted` 累积一个样本的梯度
    ///
    /// 无论成功与否，结束后都会清空激活值和 contribution 缓存；
    /// 偏置梯度和权重梯度则一直保留到 `update`。
    pub(in crate::nn::network) fn contribute(
        &mut self,
        label: f64,
        predicted: f64,
    ) -> Result<(), GraphError> {
        let result = self.contribute_from_inputs(label, predicted);
        self.flush();
        result
    }

    fn contribute_from_inputs(&mut self, label: f64, predicted: f64) -> Result<(), GraphError> {
        for input_id in self.input_node_ids.clone() {
            let post_activation = self.graph.get_node(input_id)?.post_activation;
            for dest in self.graph.get_node_children(input_id)? {
                let incoming = self.resolve_contribution(dest, label, predicted)?;
                if let Some(edge) = self.graph.get_edge_mut(input_id, dest) {
                    edge.weight_grad += incoming * post_activation;
                }
            }
        }
        Ok(())
    }

    /// 求出 `start` 的 contribution（已缓存则直接返回）
    fn resolve_contribution(
        &mut self,
        start: NodeId,
        label: f64,
        predicted: f64,
    ) -> Result<f64, GraphError> {
        if let Some(&cached) = self.contributions.get(&start) {
            return Ok(cached);
        }

        let mut stack = vec![Frame::Expand(start)];
        let mut in_progress: HashSet<NodeId> = HashSet::new();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(id) => {
                    if self.contributions.contains_key(&id) {
                        continue;
                    }
                    // 本节点尚未求出时又被自己的后代请求，说明图中有环
                    if !in_progress.insert(id) {
                        return Err(GraphError::InvalidOperation(format!(
                            "反向传播时在节点{id}处发现环，网络必须是无环图"
                        )));
                    }
                    stack.push(Frame::Settle(id));
                    for dest in self.graph.edges_from(id)?.keys() {
                        if !self.contributions.contains_key(dest) {
                            stack.push(Frame::Expand(*dest));
                        }
                    }
                    if stack.len() > self.config.max_backward_depth {
                        return Err(GraphError::InvalidOperation(format!(
                            "反向传播工作栈超过上限 {}",
                            self.config.max_backward_depth
                        )));
                    }
                }
                Frame::Settle(id) => {
                    let contribution = self.settle_contribution(id, label, predicted)?;
                    in_progress.remove(&id);
                    self.contributions.insert(id, contribution);
                }
            }
        }

        self.contributions.get(&start).copied().ok_or_else(|| {
            GraphError::InvalidOperation(format!(
                "节点{start}的 contribution 未能求出。不该触及本错误，否则说明crate代码有问题"
            ))
        })
    }

    /// 在所有后继的 contribution 都已缓存时，计算节点 `id` 自身的 contribution
    fn settle_contribution(
        &mut self,
        id: NodeId,
        label: f64,
        predicted: f64,
    ) -> Result<f64, GraphError> {
        let graph = &mut self.graph;
        let node = graph.nodes.get(id.index()).ok_or(GraphError::NodeNotFound(id))?;
        let post_activation = node.post_activation;

        let bucket = &mut graph.adjacency[id.index()];
        let mut outgoing = 0.0;
        if bucket.is_empty() {
            // 输出节点：对数损失关于 sigmoid 输出的导数
            outgoing = -(label - predicted) / (predicted * (1.0 - predicted));
        } else {
            for (dest, edge) in bucket.iter_mut() {
                let incoming = *self.contributions.get(dest).ok_or_else(|| {
                    GraphError::InvalidOperation(format!(
                        "节点{dest}的 contribution 尚未求出。不该触及本错误，\
                         否则说明crate代码有问题"
                    ))
                })?;
                outgoing += edge.weight * incoming;
                edge.weight_grad += incoming * post_activation;
            }
        }

        let node = &mut graph.nodes[id.index()];
        outgoing *= node.derive();
        node.bias_grad += outgoing;
        trace!("节点{id}的 contribution = {outgoing}");
        Ok(outgoing)
    }
}
