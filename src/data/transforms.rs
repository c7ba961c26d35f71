//! 数据变换函数
//!
//! 提供逐特征的 z-score 标准化。

use super::{DataError, DataInstance};

/// 标准差的下限，避免常数特征除零
const MIN_STD: f64 = 1e-8;

/// 计算每个特征在整个数据集上的均值和（总体）标准差
///
/// # 返回
/// `(means, stds)`，长度均为特征维数
pub fn feature_stats(instances: &[DataInstance]) -> Result<(Vec<f64>, Vec<f64>), DataError> {
    let first = instances.first().ok_or(DataError::EmptyDataset)?;
    let dim = first.features.len();
    let n = instances.len() as f64;

    let mut means = vec![0.0; dim];
    for instance in instances {
        for (mean, &x) in means.iter_mut().zip(&instance.features) {
            *mean += x;
        }
    }
    for mean in &mut means {
        *mean /= n;
    }

    let mut stds = vec![0.0; dim];
    for instance in instances {
        for ((std, &x), &mean) in stds.iter_mut().zip(&instance.features).zip(&means) {
            let diff = x - mean;
            *std += diff * diff;
        }
    }
    for std in &mut stds {
        *std = (*std / n).sqrt().max(MIN_STD);
    }

    Ok((means, stds))
}

/// 把每个特征标准化为零均值、单位标准差（原地修改）
///
/// 空数据集没有可用的统计量，返回 `DataError::EmptyDataset`
pub fn standardize(instances: &mut [DataInstance]) -> Result<(), DataError> {
    let (means, stds) = feature_stats(instances)?;
    for instance in instances.iter_mut() {
        for ((x, &mean), &std) in instance.features.iter_mut().zip(&means).zip(&stds) {
            *x = (*x - mean) / std;
        }
    }
    Ok(())
}
