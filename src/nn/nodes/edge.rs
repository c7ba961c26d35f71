use super::NodeId;
use std::fmt;

/// 带权有向边 `source -> dest`
///
/// 两端的 id 只是指向所属图节点集合的外键，边本身不拥有节点，可按值复制
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub dest: NodeId,
    pub weight: f64,
    /// 权重梯度的累积值，只有 `update` 才会清零
    pub weight_grad: f64,
}

impl Edge {
    pub const fn new(source: NodeId, dest: NodeId, weight: f64) -> Self {
        Self {
            source,
            dest,
            weight,
            weight_grad: 0.0,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source: {} dest: {} weight: {}",
            self.source, self.dest, self.weight
        )
    }
}
