//! 数据加载模块
//!
//! 提供样本读取和标准化功能。
//!
//! # 主要组件
//!
//! - [`DataInstance`]: 单个样本（特征向量 + 整数标签）
//! - [`DataLoader`]: 读取 CSV 并对每个特征做 z-score 标准化
//! - [`transforms`]: 数据变换函数（特征统计量、标准化）
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use graph_nn::data::DataLoader;
//! use graph_nn::nn::{NetworkConfig, NeuralNetwork};
//!
//! let mut network = NeuralNetwork::load("models/diabetes.init", NetworkConfig::default())?;
//! let train = DataLoader::from_path("data/diabetes_train.csv")?;
//!
//! network.train();
//! for instance in train.instances() {
//!     network.predict(instance)?;
//! }
//! network.update();
//! ```

mod dataloader;
pub mod error;
pub mod transforms;

#[cfg(test)]
mod tests;

// Re-exports
pub use dataloader::{DataInstance, DataLoader};
pub use error::DataError;
