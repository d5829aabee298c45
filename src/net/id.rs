//! 标识符类型
//!
//! 定义主机与 CSMA 段的唯一标识符。

/// 段内主机标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// CSMA 段标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(pub usize);
