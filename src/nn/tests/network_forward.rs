use super::{two_three_one, two_to_one_sigmoid};
use crate::assert_err;
use crate::data::DataInstance;
use crate::nn::{Activation, GraphError, NetworkConfig, NeuralNetwork, NodeId};
use approx::assert_abs_diff_eq;

#[test]
fn test_network_creation() {
    let network = NeuralNetwork::new(4);
    assert_eq!(network.nodes_count(), 4);
    assert!(network.layers().is_empty());
    assert!(network.input_node_ids().is_empty());
    assert!(network.output_node_ids().is_empty());
    assert!(network.is_train_mode());
    assert_abs_diff_eq!(network.learning_rate(), 0.1);
    assert_eq!(network.pending_examples(), 0);
}

#[test]
fn test_from_layers_is_fully_connected() {
    let network = two_three_one(1);
    assert_eq!(network.nodes_count(), 6);
    assert_eq!(
        network.layers(),
        &[
            vec![NodeId(0), NodeId(1)],
            vec![NodeId(2), NodeId(3), NodeId(4)],
            vec![NodeId(5)]
        ]
    );
    assert_eq!(network.input_node_ids(), &[NodeId(0), NodeId(1)]);
    assert_eq!(network.output_node_ids(), &[NodeId(5)]);
    // 2*3 + 3*1
    assert_eq!(network.graph().edges_count(), 9);
    for source in [0, 1] {
        for dest in [2, 3, 4] {
            assert!(network.graph().get_edge(NodeId(source), NodeId(dest)).is_some());
        }
    }
    for id in network.graph().node_ids() {
        assert_abs_diff_eq!(network.graph().get_node(id).unwrap().bias, 0.0);
    }
    assert_eq!(network.graph().get_node(NodeId(3)).unwrap().activation, Activation::Sigmoid);
}

#[test]
fn test_from_layers_rejects_invalid_specs() {
    assert_err!(
        NeuralNetwork::from_layers(&[(2, Activation::Identity)], NetworkConfig::default()),
        GraphError::InvalidOperation(_)
    );
    assert_err!(
        NeuralNetwork::from_layers(
            &[(2, Activation::Identity), (0, Activation::Sigmoid)],
            NetworkConfig::default()
        ),
        GraphError::InvalidOperation(_)
    );
}

#[test]
fn test_seeded_initialization_is_reproducible() {
    let a = two_three_one(42);
    let b = two_three_one(42);
    let c = two_three_one(43);
    let weights = |n: &NeuralNetwork| n.graph().edges().map(|e| e.weight).collect::<Vec<_>>();
    assert_eq!(weights(&a), weights(&b));
    assert_ne!(weights(&a), weights(&c));
}

#[test]
fn test_predict_scenario_output() {
    let mut network = two_to_one_sigmoid();
    network.eval();

    let output = network.predict(&DataInstance::new(vec![1.0, 1.0], 1)).unwrap();
    assert_eq!(output.len(), 1);
    assert_abs_diff_eq!(output[0], 0.5);
}

#[test]
fn test_predict_identity_is_matrix_vector_product() {
    // 3 个输入直接连到 2 个 identity 输出，零偏置
    let text = "\
2 5
3 identity
2 identity
6
0 3 1.0
1 3 2.0
2 3 3.0
0 4 -1.0
1 4 0.5
2 4 0.25
0
";
    let mut network =
        NeuralNetwork::from_reader(text.as_bytes(), NetworkConfig::default()).unwrap();
    network.eval();

    let x = [2.0, -1.0, 4.0];
    let output = network.predict(&DataInstance::new(x.to_vec(), 0)).unwrap();

    let w = [[1.0, 2.0, 3.0], [-1.0, 0.5, 0.25]];
    assert_eq!(output.len(), 2);
    for (row, &y) in w.iter().zip(&output) {
        let expected: f64 = row.iter().zip(&x).map(|(a, b)| a * b).sum();
        assert_abs_diff_eq!(y, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_predict_applies_bias_and_hidden_layer() {
    // 1 -> 1(relu, 偏置 -1) -> 1(identity, 偏置 0.5)
    let text = "\
3 3
1 identity
1 relu
1 identity
2
0 1 2.0
1 2 3.0
2
1 -1.0
2 0.5
";
    let mut network =
        NeuralNetwork::from_reader(text.as_bytes(), NetworkConfig::default()).unwrap();
    network.eval();

    // relu(2*2 - 1) = 3, 3*3 + 0.5 = 9.5
    let output = network.predict(&DataInstance::new(vec![2.0], 0)).unwrap();
    assert_abs_diff_eq!(output[0], 9.5);

    // relu(2*0.25 - 1) = 0, 0*3 + 0.5 = 0.5
    let output = network.predict(&DataInstance::new(vec![0.25], 0)).unwrap();
    assert_abs_diff_eq!(output[0], 0.5);
}

#[test]
fn test_eval_predict_flushes_and_keeps_gradients_zero() {
    let mut network = two_three_one(3);
    network.eval();
    network.predict(&DataInstance::new(vec![0.2, -0.4], 1)).unwrap();

    for id in network.graph().node_ids() {
        let node = network.graph().get_node(id).unwrap();
        assert_abs_diff_eq!(node.pre_activation, 0.0);
        assert_abs_diff_eq!(node.post_activation, 0.0);
        assert_abs_diff_eq!(node.bias_grad, 0.0);
    }
    assert!(network.graph().edges().all(|e| e.weight_grad == 0.0));
    assert_eq!(network.pending_examples(), 0);
}

#[test]
fn test_predict_input_size_mismatch_changes_nothing() {
    let mut network = two_to_one_sigmoid();
    let before = network.graph().clone();

    assert_err!(
        network.predict(&DataInstance::new(vec![1.0, 2.0, 3.0], 1)),
        GraphError::InputSizeMismatch(2, 3)
    );
    assert_err!(
        network.predict(&DataInstance::new(vec![], 0)),
        GraphError::InputSizeMismatch(2, 0)
    );

    assert_eq!(network.graph(), &before);
    assert_eq!(network.pending_examples(), 0);
}

#[test]
fn test_train_predict_requires_output_nodes() {
    let mut network = NeuralNetwork::new(2);
    network.set_input_node_ids(vec![NodeId(0), NodeId(1)]).unwrap();
    assert_err!(
        network.predict(&DataInstance::new(vec![1.0, 1.0], 1)),
        GraphError::InvalidOperation(_)
    );

    // 评估模式下没有输出节点时得到空结果
    network.eval();
    let output = network.predict(&DataInstance::new(vec![1.0, 1.0], 1)).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_set_layers_validation() {
    let mut network = NeuralNetwork::new(3);
    assert_err!(
        network.set_layers(vec![vec![NodeId(0), NodeId(1), NodeId(2)]]),
        GraphError::InvalidOperation(_)
    );
    assert_err!(network.set_layers(vec![vec![NodeId(0)], vec![]]), GraphError::InvalidOperation(_));
    // 没有覆盖全部节点
    assert_err!(
        network.set_layers(vec![vec![NodeId(0)], vec![NodeId(1)]]),
        GraphError::InvalidOperation(_)
    );
    // 不是创建顺序
    assert_err!(
        network.set_layers(vec![vec![NodeId(1), NodeId(0)], vec![NodeId(2)]]),
        GraphError::InvalidOperation(_)
    );

    network
        .set_layers(vec![vec![NodeId(0), NodeId(1)], vec![NodeId(2)]])
        .unwrap();
    assert_eq!(network.input_node_ids(), &[NodeId(0), NodeId(1)]);
    assert_eq!(network.output_node_ids(), &[NodeId(2)]);

    assert_err!(network.set_input_node_ids(vec![NodeId(7)]), GraphError::NodeNotFound(NodeId(7)));
    assert_err!(network.set_output_node_ids(vec![NodeId(3)]), GraphError::NodeNotFound(NodeId(3)));
}

#[test]
fn test_manual_network_matches_loaded_one() {
    let mut network = NeuralNetwork::new(3);
    network
        .set_layers(vec![vec![NodeId(0), NodeId(1)], vec![NodeId(2)]])
        .unwrap();
    let graph = network.graph_mut();
    graph
        .set_node(NodeId(2), crate::nn::NodeInfo::new(Activation::Sigmoid, 0.0, 0.0))
        .unwrap();
    graph.set_edge(NodeId(0), NodeId(2), 0.5).unwrap();
    graph.set_edge(NodeId(1), NodeId(2), -0.5).unwrap();
    network.eval();

    let mut loaded = two_to_one_sigmoid();
    loaded.eval();

    let instance = DataInstance::new(vec![0.3, 1.7], 0);
    assert_eq!(network.predict(&instance).unwrap(), loaded.predict(&instance).unwrap());
}

#[test]
fn test_eval_scope_restores_mode() {
    let mut network = two_to_one_sigmoid();
    assert!(network.is_train_mode());
    let output = network.eval_scope(|n| {
        assert!(!n.is_train_mode());
        n.predict(&DataInstance::new(vec![1.0, 1.0], 1))
    });
    assert_abs_diff_eq!(output.unwrap()[0], 0.5);
    assert!(network.is_train_mode());
    assert_eq!(network.pending_examples(), 0);

    network.eval();
    network.eval_scope(|_| {});
    assert!(!network.is_train_mode());
}
