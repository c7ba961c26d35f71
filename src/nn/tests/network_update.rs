use super::{two_three_one, two_to_one_sigmoid};
use crate::data::DataInstance;
use crate::nn::{NeuralNetwork, NodeId};
use approx::assert_abs_diff_eq;

fn weights(network: &NeuralNetwork) -> Vec<f64> {
    network.graph().edges().map(|e| e.weight).collect()
}

fn biases(network: &NeuralNetwork) -> Vec<f64> {
    network
        .graph()
        .node_ids()
        .map(|id| network.graph().get_node(id).unwrap().bias)
        .collect()
}

#[test]
fn test_update_scenario() {
    let mut network = two_to_one_sigmoid();
    network.set_learning_rate(0.1);
    network.predict(&DataInstance::new(vec![1.0, 1.0], 1)).unwrap();
    network.update();

    let graph = network.graph();
    assert_abs_diff_eq!(graph.get_node(NodeId(2)).unwrap().bias, 0.05, epsilon = 1e-12);
    let w0 = graph.get_edge(NodeId(0), NodeId(2)).unwrap().weight;
    let w1 = graph.get_edge(NodeId(1), NodeId(2)).unwrap().weight;
    assert_abs_diff_eq!(w0, 0.55, epsilon = 1e-12);
    assert_abs_diff_eq!(w1, -0.45, epsilon = 1e-12);

    // 梯度已清零
    assert!(graph.edges().all(|e| e.weight_grad == 0.0));
    assert!(graph.node_ids().all(|id| graph.get_node(id).unwrap().bias_grad == 0.0));
    assert_eq!(network.pending_examples(), 0);
}

#[test]
fn test_second_update_is_noop() {
    let mut network = two_three_one(21);
    network.predict(&DataInstance::new(vec![0.3, 0.9], 0)).unwrap();
    network.update();
    let after_first = network.describe();

    network.update();
    assert_eq!(network.describe(), after_first);
}

#[test]
fn test_update_without_gradients_keeps_parameters() {
    let mut network = two_three_one(2);
    let (w, b) = (weights(&network), biases(&network));
    network.update();
    assert_eq!(weights(&network), w);
    assert_eq!(biases(&network), b);
}

#[test]
fn test_accumulation_order_does_not_matter() {
    let first = DataInstance::new(vec![0.6, -0.2], 1);
    let second = DataInstance::new(vec![-0.9, 0.4], 0);

    let mut forward_order = two_three_one(17);
    forward_order.predict(&first).unwrap();
    forward_order.predict(&second).unwrap();
    forward_order.update();

    let mut reverse_order = two_three_one(17);
    reverse_order.predict(&second).unwrap();
    reverse_order.predict(&first).unwrap();
    reverse_order.update();

    for (a, b) in weights(&forward_order).iter().zip(weights(&reverse_order)) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
    for (a, b) in biases(&forward_order).iter().zip(biases(&reverse_order)) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }

    // 每个样本之后都 update 则不同（没有隐式平均，也不等价于一次批量更新）
    let mut per_example = two_three_one(17);
    per_example.predict(&first).unwrap();
    per_example.update();
    per_example.predict(&second).unwrap();
    per_example.update();

    let max_diff = weights(&forward_order)
        .iter()
        .zip(weights(&per_example))
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    assert!(max_diff > 1e-9, "逐样本更新与批量更新的结果不应相同");
}

#[test]
fn test_learning_rate_scales_step() {
    let instance = DataInstance::new(vec![1.0, 1.0], 1);

    let mut small = two_to_one_sigmoid();
    small.set_learning_rate(0.01);
    small.predict(&instance).unwrap();
    small.update();

    let mut large = two_to_one_sigmoid();
    large.set_learning_rate(1.0);
    large.predict(&instance).unwrap();
    large.update();

    let small_bias = small.graph().get_node(NodeId(2)).unwrap().bias;
    let large_bias = large.graph().get_node(NodeId(2)).unwrap().bias;
    assert_abs_diff_eq!(small_bias, 0.005, epsilon = 1e-12);
    assert_abs_diff_eq!(large_bias, 0.5, epsilon = 1e-12);
}
