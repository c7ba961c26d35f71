/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork：建立在 Graph 之上的神经网络引擎
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 创建、按层全连接构建、访问器
 * - mode.rs: train/eval 模式
 * - forward.rs: 广度优先前向传播（predict）
 * - backward.rs: 记忆化的反向梯度累积（contribute）
 * - update.rs: 梯度下降更新
 * - model_io.rs: 文本模型格式的加载/保存
 * - describe.rs: 描述符与调试输出
 * - assess.rs: 准确率评估
 */

mod assess;
mod backward;
mod core;
mod describe;
mod forward;
mod mode;
mod model_io;
mod update;

pub use mode::Mode;

use crate::nn::{Graph, NetworkConfig, NodeId};
use rand::rngs::StdRng;
use std::collections::HashMap;

/// 神经网络
///
/// 在 `Graph` 的节点/边之上增加了层分组、输入/输出节点集合、学习率、
/// train/eval 模式以及前向、反向、更新三个算法。训练过程中整个模型被原地修改。
///
/// `Clone` 会深拷贝所有节点和边，但它不在训练的热路径上。
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    pub(in crate::nn) graph: Graph,
    /// 按创建顺序划分全部节点的层，第 0 层为输入层，最后一层为输出层
    pub(in crate::nn) layers: Vec<Vec<NodeId>>,
    pub(in crate::nn) input_node_ids: Vec<NodeId>,
    pub(in crate::nn) output_node_ids: Vec<NodeId>,
    pub(in crate::nn) config: NetworkConfig,
    pub(in crate::nn) mode: Mode,
    /// 自上次 update 以来累积过梯度的样本数（仅供查看，不参与梯度平均）
    pub(in crate::nn) pending_examples: usize,
    /// 单次反向传播内有效：node_id -> 该节点的 contribution
    pub(in crate::nn) contributions: HashMap<NodeId, f64>,
    /// 网络级别的随机数生成器（用于初始权重采样），None 表示使用 thread_rng
    pub(in crate::nn) rng: Option<StdRng>,
}
