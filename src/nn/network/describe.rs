/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 描述符与调试输出
 */

use super::NeuralNetwork;
use crate::nn::descriptor::{EdgeDescriptor, LayerDescriptor, NetworkDescriptor, NodeDescriptor};
use crate::nn::GraphError;
use std::fmt;

impl NeuralNetwork {
    /// 生成网络的结构化描述（层、节点偏置、边权重以及各自累积的梯度）
    pub fn describe(&self) -> NetworkDescriptor {
        let layers = self
            .layers
            .iter()
            .map(|layer| LayerDescriptor {
                node_ids: layer.iter().map(|id| id.index()).collect(),
                activation: self.graph.nodes[layer[0].index()].activation,
            })
            .collect();

        let nodes = self
            .graph
            .nodes
            .iter()
            .enumerate()
            .map(|(id, node)| NodeDescriptor {
                id,
                activation: node.activation,
                bias: node.bias,
                bias_grad: node.bias_grad,
            })
            .collect();

        let edges = self
            .graph
            .edges()
            .map(|edge| EdgeDescriptor {
                source: edge.source.index(),
                dest: edge.dest.index(),
                weight: edge.weight,
                weight_grad: edge.weight_grad,
            })
            .collect();

        NetworkDescriptor {
            version: NetworkDescriptor::VERSION.to_string(),
            learning_rate: self.config.learning_rate,
            mode: self.mode,
            layers,
            nodes,
            edges,
        }
    }

    /// 以 JSON 输出网络描述
    pub fn to_json(&self) -> Result<String, GraphError> {
        self.describe()
            .to_json()
            .map_err(|e| GraphError::InvalidOperation(format!("序列化网络描述失败: {e}")))
    }
}

impl fmt::Display for NeuralNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, layer) in self.layers.iter().enumerate() {
            let ids: Vec<String> = layer.iter().map(ToString::to_string).collect();
            writeln!(f, "layer {index}: {}", ids.join(" "))?;
        }
        write!(f, "{}", self.graph)
    }
}
