//! 帧类型
//!
//! 共享总线上传输的帧。载荷语义由 `FrameKind` 区分：可靠流的
//! 数据分段与确认帧，以及尽力而为流的数据报。

use super::id::NodeId;
use crate::metrics::FlowKind;

/// 帧的载荷类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// 数据帧：可靠流的一个线路分段，或尽力而为流的一个数据报。
    Data,
    /// 可靠流的确认帧（逐分段回送）。
    Ack,
}

/// 总线帧
#[derive(Debug, Clone)]
pub struct Frame {
    pub id: u64,
    pub flow: FlowKind,
    pub kind: FrameKind,
    pub size_bytes: u32,
    pub src: NodeId,
    pub dst: NodeId,
}
