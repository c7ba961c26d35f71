use crate::nn::Activation;
use std::fmt;

/// 单个激活单元的状态
///
/// - `pre_activation`: 加权输入之和 + 偏置（每个样本之间清零）
/// - `post_activation`: `activation(pre_activation)`
/// - `bias_grad`: 偏置梯度的累积值，只有 `update` 才会清零
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    pub pre_activation: f64,
    pub post_activation: f64,
    pub bias: f64,
    pub bias_grad: f64,
    pub activation: Activation,
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self::new(Activation::Identity, 0.0, 0.0)
    }
}

impl NodeInfo {
    /// 以给定的激活函数、初始激活前值和偏置创建节点，激活后值立即按激活函数算出
    pub fn new(activation: Activation, value: f64, bias: f64) -> Self {
        let mut node = Self {
            pre_activation: value,
            post_activation: 0.0,
            bias,
            bias_grad: 0.0,
            activation,
        };
        node.activate();
        node
    }

    /// 在当前激活前值处求激活函数，结果写入 `post_activation`
    pub fn activate(&mut self) -> f64 {
        self.post_activation = self.activation.apply(self.pre_activation);
        self.post_activation
    }

    /// 在当前激活前值处求激活函数的导数
    pub fn derive(&self) -> f64 {
        self.activation.derivative(self.pre_activation)
    }

    /// 清空激活状态（不触及偏置及其梯度）
    pub(crate) fn flush(&mut self) {
        self.pre_activation = 0.0;
        self.post_activation = 0.0;
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(z={}\t, a={}\t, bias={}\t, activation={})",
            self.pre_activation, self.post_activation, self.bias, self.activation
        )
    }
}
