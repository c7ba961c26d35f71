//! # Graph NN
//!
//! `graph_nn`是一个直接建立在可变有向图上的极简神经网络计算引擎：
//! 节点携带激活状态，边携带权重，二者都带有梯度累积器。
//!
//! - [`nn::Graph`]: 节点 arena + 按源节点分桶的邻接表
//! - [`nn::NeuralNetwork`]: 前向传播、记忆化反向梯度累积、梯度下降更新、文本模型格式
//! - [`data`]: CSV 数据加载与逐特征 z-score 标准化
//!

pub mod data;
pub mod nn;
pub mod utils;
