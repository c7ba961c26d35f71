mod network_forward;
mod network_update;

use crate::nn::{NetworkConfig, NeuralNetwork};

/// 2 个 identity 输入 -> 1 个 sigmoid 输出，权重 [0.5, -0.5]，偏置 0
pub(super) fn two_to_one_sigmoid() -> NeuralNetwork {
    let text = "\
2 3
2 identity
1 sigmoid
2
0 2 0.5
1 2 -0.5
0
";
    NeuralNetwork::from_reader(text.as_bytes(), NetworkConfig::default().with_seed(7)).unwrap()
}

/// 2 -> 3(sigmoid) -> 1(sigmoid) 的全连接网络，权重由固定种子采样
pub(super) fn two_three_one(seed: u64) -> NeuralNetwork {
    use crate::nn::Activation;
    NeuralNetwork::from_layers(
        &[
            (2, Activation::Identity),
            (3, Activation::Sigmoid),
            (1, Activation::Sigmoid),
        ],
        NetworkConfig::default().with_seed(seed),
    )
    .unwrap()
}
