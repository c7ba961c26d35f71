/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph 的调试输出（DOT 边表 + 逐节点状态）
 */

use super::Graph;
use std::fmt;

impl Graph {
    /// 生成 Graphviz DOT 格式的边表，边上标注权重
    ///
    /// 可直接粘贴到 <https://dreampuf.github.io/GraphvizOnline/> 预览
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph G {\n");
        for edge in self.edges() {
            dot.push_str(&format!(
                "\t{} -> {}[label=\"{}\"]\n",
                edge.source, edge.dest, edge.weight
            ));
        }
        dot.push('}');
        dot
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.to_dot())?;
        let lines: Vec<String> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(id, node)| format!("node {id}: {node}"))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
