//! 流量事件
//!
//! 发送/接收通知的显式表示。指标核心是这一事件序列的归约器，
//! 不依赖任何仿真引擎即可测试。

use super::flow::FlowKind;
use crate::sim::SimTime;

/// 通知类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficEventKind {
    Transmit,
    Receive,
}

/// 一次发送或接收通知
#[derive(Debug, Clone, Copy)]
pub struct TrafficEvent {
    pub kind: TrafficEventKind,
    pub flow: FlowKind,
    pub size_bytes: u32,
    pub at: SimTime,
}
