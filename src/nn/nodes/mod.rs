/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 图中的节点（激活状态容器）与带权有向边
 */

mod edge;
mod node_info;

pub use edge::Edge;
pub use node_info::NodeInfo;

use std::fmt;

/// 节点在所属图中的稠密编号（0..N-1），创建后永不改变
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}
