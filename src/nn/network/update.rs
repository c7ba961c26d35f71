/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 梯度下降更新
 */

use super::NeuralNetwork;
use log::debug;

impl NeuralNetwork {
    /// 用累积的梯度更新所有偏置和权重，然后把梯度清零
    ///
    /// 梯度是自上次更新以来所有样本梯度的直接求和（不除以样本数）。
    /// 连续调用两次时，第二次什么也不会改变。
    pub fn update(&mut self) {
        let learning_rate = self.config.learning_rate;
        debug!(
            "以学习率 {learning_rate} 应用 {} 个样本累积的梯度",
            self.pending_examples
        );

        // θ = θ - α * ∇θ
        for node in &mut self.graph.nodes {
            node.bias -= learning_rate * node.bias_grad;
            node.bias_grad = 0.0;
        }
        for edge in self.graph.edges_mut() {
            edge.weight -= learning_rate * edge.weight_grad;
            edge.weight_grad = 0.0;
        }

        self.pending_examples = 0;
    }
}
