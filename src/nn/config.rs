/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 的运行配置
 */

use serde::{Deserialize, Serialize};

/// 网络配置
///
/// 梯度是自上次 `update` 以来所有样本梯度的直接求和（不取平均），
/// 调用方通过两次 `update` 之间 `predict` 的次数隐式决定“批大小”，
/// 学习率需相应取小。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub learning_rate: f64,
    /// 初始权重采样的随机种子；`None` 表示使用 thread_rng（非确定性）
    pub seed: Option<u64>,
    /// 反向传播显式工作栈的最大深度
    pub max_backward_depth: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            seed: None,
            max_backward_depth: 1_000_000,
        }
    }
}

impl NetworkConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_backward_depth(mut self, depth: usize) -> Self {
        self.max_backward_depth = depth;
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
