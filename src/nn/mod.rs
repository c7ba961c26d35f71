/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 负责神经网络（neural network）的构建、训练与持久化
 */

mod activation;
mod config;
pub mod descriptor;
mod graph;
mod network;
mod nodes;

pub use activation::Activation;
pub use config::NetworkConfig;
pub use descriptor::NetworkDescriptor;
pub use graph::{EdgeBucket, Graph, GraphError};
pub use network::{Mode, NeuralNetwork};
pub use nodes::{Edge, NodeId, NodeInfo};

#[cfg(test)]
mod tests;
