/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : Graph 模块：节点 arena 与邻接表
 *
 * 公开 API：
 * - `Graph`: 通用有向图（无训练语义）
 * - `GraphError`: 错误类型
 */

mod display;
mod error;
mod storage;

pub use error::GraphError;
pub use storage::{EdgeBucket, Graph};
