/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 准确率评估
 */

use super::NeuralNetwork;
use crate::data::{DataInstance, DataLoader};
use crate::nn::GraphError;
use log::{debug, warn};
use std::path::Path;

impl NeuralNetwork {
    /// 在评估模式下逐个预测，返回“四舍五入后的首个输出 == 标签”的比例
    ///
    /// 不累积任何梯度；结束后恢复原来的模式。空数据集返回 `EmptyDataset`。
    pub fn assess(&mut self, instances: &[DataInstance]) -> Result<f64, GraphError> {
        if instances.is_empty() {
            return Err(GraphError::EmptyDataset);
        }

        self.eval_scope(|network| {
            let mut correct = 0usize;
            for instance in instances {
                let output = network.predict(instance)?;
                let Some(predicted) = output.first() else {
                    warn!("网络没有输出节点，无法评估准确率");
                    return Err(GraphError::InvalidOperation(
                        "网络没有输出节点，无法评估".to_string(),
                    ));
                };
                if predicted.round() as i64 == i64::from(instance.label) {
                    correct += 1;
                }
            }
            Ok(correct as f64 / instances.len() as f64)
        })
    }

    /// 读取 CSV 数据文件（逐特征标准化后）并评估准确率
    pub fn assess_file<P: AsRef<Path>>(&mut self, path: P) -> Result<f64, GraphError> {
        let loader = DataLoader::from_path(path.as_ref())?;
        let accuracy = self.assess(loader.instances())?;
        debug!(
            "{} 上的准确率：{accuracy:.4}（{} 个样本）",
            path.as_ref().display(),
            loader.len()
        );
        Ok(accuracy)
    }
}
