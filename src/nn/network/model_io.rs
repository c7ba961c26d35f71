/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NeuralNetwork 文本模型格式的加载/保存
 *
 * 格式（逐行，空白分隔；每行多余的内容被忽略）：
 *
 *   <层数> <节点总数>
 *   <第0层节点数> <第0层激活函数标识符>
 *   ...
 *   <第K层节点数> <第K层激活函数标识符>
 *   <权重覆盖条数>
 *   <源节点id> <目标节点id> <权重>      （重复“权重覆盖条数”次）
 *   <偏置覆盖条数>
 *   <节点id> <偏置>                      （重复“偏置覆盖条数”次）
 *
 * 节点 id 按层顺序依次分配为 0..节点总数-1。
 */

use super::NeuralNetwork;
use crate::nn::{Activation, GraphError, NetworkConfig, NodeId};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

impl NeuralNetwork {
    /// 从模型文件加载网络
    pub fn load<P: AsRef<Path>>(path: P, config: NetworkConfig) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GraphError::MalformedModel(format!("无法打开 {} 进行读取: {e}", path.display()))
        })?;
        let network = Self::from_reader(BufReader::new(file), config)?;
        debug!(
            "已从 {} 加载模型：{} 层，{} 个节点，{} 条边",
            path.display(),
            network.layers.len(),
            network.nodes_count(),
            network.graph.edges_count()
        );
        Ok(network)
    }

    /// 从任意文本输入解析网络
    ///
    /// 先按层全连接并以标准正态分布初始化权重、偏置置 0，再依次应用权重覆盖和偏置覆盖。
    pub fn from_reader<R: BufRead>(reader: R, config: NetworkConfig) -> Result<Self, GraphError> {
        let mut records = Records::new(reader);

        let header = records.next_record("网络头部")?;
        let num_layers: i64 = header.field(0, "层数")?;
        let total_nodes: usize = header.field(1, "节点总数")?;
        if num_layers < 2 {
            return Err(GraphError::MalformedModel(format!(
                "神经网络至少需要 2 层，但得到 {num_layers} 层"
            )));
        }

        let mut specs = Vec::new();
        for layer in 0..num_layers {
            let record = records.next_record(&format!("第 {layer} 层"))?;
            let size: usize = record.field(0, "层节点数")?;
            let activation = Activation::lookup(record.token(1, "激活函数标识符")?)?;
            specs.push((size, activation));
        }

        let declared = specs
            .iter()
            .try_fold(0usize, |acc, &(size, _)| acc.checked_add(size))
            .ok_or_else(|| {
                GraphError::MalformedModel("各层节点数之和超出可表示的范围".to_string())
            })?;
        if declared != total_nodes {
            return Err(GraphError::MalformedModel(format!(
                "各层节点数之和为 {declared}，与声明的节点总数 {total_nodes} 不一致"
            )));
        }

        let mut network = Self::with_config(0, config);
        network
            .build_fully_connected(&specs)
            .map_err(|e| GraphError::MalformedModel(e.to_string()))?;

        let weight_count: usize = records.next_record("权重覆盖条数")?.field(0, "权重覆盖条数")?;
        for _ in 0..weight_count {
            let record = records.next_record("权重覆盖")?;
            let source: usize = record.field(0, "源节点id")?;
            let dest: usize = record.field(1, "目标节点id")?;
            let weight: f64 = record.field(2, "权重")?;
            network
                .graph
                .set_edge(NodeId(source), NodeId(dest), weight)?;
        }

        let bias_count: usize = records.next_record("偏置覆盖条数")?.field(0, "偏置覆盖条数")?;
        for _ in 0..bias_count {
            let record = records.next_record("偏置覆盖")?;
            let id: usize = record.field(0, "节点id")?;
            let bias: f64 = record.field(1, "偏置")?;
            network.graph.get_node_mut(NodeId(id))?.bias = bias;
        }

        Ok(network)
    }

    /// 保存模型：层规格，然后是每一条边和每一个节点的偏置
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GraphError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            GraphError::IoError(format!("无法创建模型文件 {}: {e}", path.display()))
        })?;
        let mut writer = BufWriter::new(file);
        self.write_model(&mut writer)?;
        writer
            .flush()
            .map_err(|e| GraphError::IoError(format!("刷新缓冲区失败: {e}")))?;
        debug!("已保存模型到 {}", path.display());
        Ok(())
    }

    /// 以模型文件格式写出网络（浮点数使用最短的可精确往返表示）
    pub fn write_model<W: Write>(&self, writer: &mut W) -> Result<(), GraphError> {
        if self.layers.len() < 2 {
            return Err(GraphError::InvalidOperation(
                "网络没有层划分，无法保存为模型文件".to_string(),
            ));
        }

        let mut text = format!("{} {}\n", self.layers.len(), self.graph.nodes_count());
        for layer in &self.layers {
            let activation = self.graph.get_node(layer[0])?.activation;
            text.push_str(&format!("{} {}\n", layer.len(), activation));
        }

        text.push_str(&format!("{}\n", self.graph.edges_count()));
        for edge in self.graph.edges() {
            text.push_str(&format!("{} {} {}\n", edge.source, edge.dest, edge.weight));
        }

        text.push_str(&format!("{}\n", self.graph.nodes_count()));
        for (id, node) in self.graph.nodes.iter().enumerate() {
            text.push_str(&format!("{id} {}\n", node.bias));
        }

        writer
            .write_all(text.as_bytes())
            .map_err(|e| GraphError::IoError(format!("写入模型失败: {e}")))
    }
}

/// 按行读取非空记录，并在出错时报告行号
struct Records<R> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

struct Record {
    tokens: Vec<String>,
    line_number: usize,
}

impl<R: BufRead> Records<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    fn next_record(&mut self, what: &str) -> Result<Record, GraphError> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line.map_err(|e| {
                GraphError::MalformedModel(format!("读取第 {} 行失败: {e}", self.line_number))
            })?;
            let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if !tokens.is_empty() {
                return Ok(Record {
                    tokens,
                    line_number: self.line_number,
                });
            }
        }
        Err(GraphError::MalformedModel(format!(
            "文件在读取{what}时意外结束"
        )))
    }
}

impl Record {
    fn token(&self, index: usize, what: &str) -> Result<&str, GraphError> {
        self.tokens.get(index).map(String::as_str).ok_or_else(|| {
            GraphError::MalformedModel(format!("第 {} 行缺少{what}", self.line_number))
        })
    }

    fn field<T: FromStr>(&self, index: usize, what: &str) -> Result<T, GraphError> {
        let token = self.token(index, what)?;
        token.parse().map_err(|_| {
            GraphError::MalformedModel(format!(
                "第 {} 行的{what}无法解析: `{token}`",
                self.line_number
            ))
        })
    }
}
