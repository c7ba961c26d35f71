/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络描述符（Network Descriptor）
 *                 可序列化的结构化快照，用于调试输出和与外部工具交换
 */

use crate::nn::{Activation, Mode};
use serde::{Deserialize, Serialize};

/// 网络的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    pub learning_rate: f64,
    pub mode: Mode,
    pub layers: Vec<LayerDescriptor>,
    pub nodes: Vec<NodeDescriptor>,
    pub edges: Vec<EdgeDescriptor>,
}

/// 层描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub node_ids: Vec<usize>,
    /// 层内首个节点的激活函数（保存模型时以它代表整层）
    pub activation: Activation,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: usize,
    pub activation: Activation,
    pub bias: f64,
    pub bias_grad: f64,
}

/// 边描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    pub source: usize,
    pub dest: usize,
    pub weight: f64,
    pub weight_grad: f64,
}

impl NetworkDescriptor {
    pub const VERSION: &'static str = "1.0";

    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串反序列化
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
