//! 拓扑构建

// 子模块声明
mod csma;

// 重新导出公共接口
pub use csma::{SegmentEndpoints, build_compare_topology};
