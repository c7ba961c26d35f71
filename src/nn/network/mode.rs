/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork train/eval 模式
 */

use super::NeuralNetwork;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 训练模式下 predict 会累积梯度，评估模式下只做前向计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Train,
    Eval,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Eval => write!(f, "eval"),
        }
    }
}

impl NeuralNetwork {
    pub const fn train(&mut self) {
        self.mode = Mode::Train;
    }

    pub const fn eval(&mut self) {
        self.mode = Mode::Eval;
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_train_mode(&self) -> bool {
        matches!(self.mode, Mode::Train)
    }

    /// 在评估模式下执行 `f`，结束后恢复原来的模式
    pub fn eval_scope<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let previous = self.mode;
        self.eval();
        let result = f(self);
        self.mode = previous;
        result
    }
}
