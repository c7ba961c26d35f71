/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph / NeuralNetwork 操作的错误类型
 */

use crate::data::DataError;
use crate::nn::NodeId;
use thiserror::Error;

/// 图与网络操作错误类型
///
/// 所有错误都以 `Result` 形式交还调用方，由调用方决定是否终止进程。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// 引用了图中不存在的节点 id
    #[error("节点{0}不存在")]
    NodeNotFound(NodeId),
    /// 标识符不在激活函数注册表中
    #[error("未知的激活函数标识符: {0}")]
    UnknownActivation(String),
    /// 特征向量长度与输入层节点数不一致
    #[error("输入长度不匹配：网络期望 {expected} 个特征，实际得到 {got} 个")]
    InputSizeMismatch { expected: usize, got: usize },
    /// 模型文件无法打开、读取或不符合格式
    #[error("模型文件格式错误: {0}")]
    MalformedModel(String),
    /// 在空数据集上评估
    #[error("无法在空数据集上评估准确率")]
    EmptyDataset,
    /// 保存模型时文件无法创建或写入
    #[error("IO 错误: {0}")]
    IoError(String),
    /// 评估所用的数据文件无法读取或解析
    #[error("数据加载失败: {0}")]
    DataLoad(String),
    #[error("无效操作: {0}")]
    InvalidOperation(String),
}

impl From<DataError> for GraphError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::EmptyDataset => Self::EmptyDataset,
            other => Self::DataLoad(other.to_string()),
        }
    }
}
