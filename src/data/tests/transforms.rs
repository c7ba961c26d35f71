//! transforms 模块单元测试

use crate::data::transforms::{feature_stats, standardize};
use crate::data::{DataError, DataInstance};
use approx::assert_abs_diff_eq;

#[test]
fn test_feature_stats_basic() {
    let instances = vec![
        DataInstance::new(vec![1.0, 10.0], 0),
        DataInstance::new(vec![3.0, 10.0], 1),
    ];
    let (means, stds) = feature_stats(&instances).unwrap();

    assert_abs_diff_eq!(means[0], 2.0);
    assert_abs_diff_eq!(means[1], 10.0);
    // 总体标准差
    assert_abs_diff_eq!(stds[0], 1.0);
    // 常数特征的标准差被下限截断
    assert_abs_diff_eq!(stds[1], 1e-8);
}

#[test]
fn test_feature_stats_empty() {
    assert!(matches!(feature_stats(&[]), Err(DataError::EmptyDataset)));
}

#[test]
fn test_standardize_zero_mean_unit_std() {
    let mut instances = vec![
        DataInstance::new(vec![2.0, -1.0], 0),
        DataInstance::new(vec![4.0, 0.0], 1),
        DataInstance::new(vec![9.0, 7.0], 1),
    ];
    standardize(&mut instances).unwrap();

    let (means, stds) = feature_stats(&instances).unwrap();
    for j in 0..2 {
        assert_abs_diff_eq!(means[j], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stds[j], 1.0, epsilon = 1e-12);
    }
    // 标签不受影响
    let labels: Vec<i32> = instances.iter().map(|x| x.label).collect();
    assert_eq!(labels, vec![0, 1, 1]);
}

#[test]
fn test_standardize_constant_feature_becomes_zero() {
    let mut instances = vec![
        DataInstance::new(vec![5.0], 0),
        DataInstance::new(vec![5.0], 1),
    ];
    standardize(&mut instances).unwrap();
    assert!(instances.iter().all(|x| x.features[0] == 0.0));
}
