/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 激活函数注册表：闭合的激活函数集合及其与文本标识符的双向映射
 *
 * 模型文件中以标识符（identity/relu/sigmoid）记录每层的激活函数，
 * 因此标识符与函数之间必须是全映射，保存后再加载能得到同一个函数。
 */

use crate::nn::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 节点的激活函数（连同其导数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Identity,
    ReLU,
    Sigmoid,
}

impl Activation {
    /// 注册表中全部的激活函数
    pub const ALL: [Self; 3] = [Self::Identity, Self::ReLU, Self::Sigmoid];

    /// 按标识符查找激活函数
    pub fn lookup(identifier: &str) -> Result<Self, GraphError> {
        match identifier {
            "identity" => Ok(Self::Identity),
            "relu" => Ok(Self::ReLU),
            "sigmoid" => Ok(Self::Sigmoid),
            _ => Err(GraphError::UnknownActivation(identifier.to_string())),
        }
    }

    /// `lookup` 的逆映射
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::ReLU => "relu",
            Self::Sigmoid => "sigmoid",
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::ReLU => x.max(0.0),
            Self::Sigmoid => sigmoid(x),
        }
    }

    /// 激活函数在 `x`（激活前值）处的导数
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Self::Identity => 1.0,
            // relu 的导数即阶跃函数，0 处取 0
            Self::ReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Sigmoid => {
                let s = sigmoid(x);
                s * (1.0 - s)
            }
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl FromStr for Activation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}
