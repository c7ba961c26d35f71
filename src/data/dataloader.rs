/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : DataLoader - 读取 CSV 样本并逐特征标准化
 *
 * 每行一个样本，逗号分隔；最后一列是整数标签，其余列为特征。
 * 读取完成后对整个数据集做 z-score 标准化。
 */

use super::DataError;
use super::transforms::standardize;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 单个样本：特征向量 + 整数标签
#[derive(Debug, Clone, PartialEq)]
pub struct DataInstance {
    pub features: Vec<f64>,
    pub label: i32,
}

impl DataInstance {
    pub fn new(features: Vec<f64>, label: i32) -> Self {
        Self { features, label }
    }
}

impl fmt::Display for DataInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let features: Vec<String> = self.features.iter().map(ToString::to_string).collect();
        write!(f, "{}: {}", self.label, features.join(", "))
    }
}

/// 已标准化的数据集
///
/// # 示例
/// ```ignore
/// let loader = DataLoader::from_path("data/diabetes_train.csv")?;
/// println!("样本数: {}", loader.len());
/// ```
#[derive(Debug, Clone)]
pub struct DataLoader {
    instances: Vec<DataInstance>,
}

impl DataLoader {
    /// 从 CSV 文件读取
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| DataError::FileNotFound(path.to_path_buf()))?;
        let loader = Self::from_reader(BufReader::new(file))?;
        debug!("已从 {} 读取 {} 个样本", path.display(), loader.len());
        Ok(loader)
    }

    /// 从任意 CSV 文本输入读取
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DataError> {
        let mut instances = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            // 跳过空行
            if line.is_empty() {
                continue;
            }

            instances.push(parse_row(line, index + 1)?);
        }
        Self::from_instances(instances)
    }

    /// 由现成的样本构建，同样会做标准化
    pub fn from_instances(mut instances: Vec<DataInstance>) -> Result<Self, DataError> {
        if let Some(first) = instances.first() {
            let dim = first.features.len();
            if let Some(bad) = instances.iter().position(|x| x.features.len() != dim) {
                return Err(DataError::FormatError(format!(
                    "第 {} 个样本有 {} 个特征，与首个样本的 {dim} 个不一致",
                    bad + 1,
                    instances[bad].features.len()
                )));
            }
        }
        standardize(&mut instances)?;
        Ok(Self { instances })
    }

    pub fn instances(&self) -> &[DataInstance] {
        &self.instances
    }

    pub fn into_instances(self) -> Vec<DataInstance> {
        self.instances
    }

    /// 获取样本数量
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// 检查数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// 特征维数
    pub fn feature_dim(&self) -> usize {
        self.instances.first().map_or(0, |x| x.features.len())
    }
}

fn parse_row(line: &str, line_number: usize) -> Result<DataInstance, DataError> {
    let values: Vec<&str> = line.split(',').map(str::trim).collect();
    let (label, features) = values
        .split_last()
        .ok_or_else(|| DataError::FormatError(format!("第 {line_number} 行为空")))?;

    let label: i32 = label.parse().map_err(|_| {
        DataError::FormatError(format!("第 {line_number} 行的标签无法解析: `{label}`"))
    })?;
    let features = features
        .iter()
        .map(|value| {
            value.parse::<f64>().map_err(|_| {
                DataError::FormatError(format!("第 {line_number} 行的特征无法解析: `{value}`"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DataInstance::new(features, label))
}
