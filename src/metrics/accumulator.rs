//! 指标累加器
//!
//! 独占持有两条流的运行计数；事件入口是纯归约，派生指标按需计算。
//! 采样器与报告只读。

use super::event::{TrafficEvent, TrafficEventKind};
use super::flow::{FlowKind, FlowMetrics};
use crate::sim::SimTime;
use serde::Serialize;
use tracing::trace;

/// 某时刻对一条流的不可变读数。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot {
    pub t_secs: f64,
    pub packets_sent: u64,
    pub packets_received: u64,
    pub bytes_received: u64,
    pub throughput_mbps: f64,
    pub delivery_ratio_pct: f64,
}

/// 两条流的指标累加器
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    reliable: FlowMetrics,
    best_effort: FlowMetrics,
}

impl MetricsAccumulator {
    pub fn flow(&self, flow: FlowKind) -> &FlowMetrics {
        match flow {
            FlowKind::Reliable => &self.reliable,
            FlowKind::BestEffort => &self.best_effort,
        }
    }

    fn flow_mut(&mut self, flow: FlowKind) -> &mut FlowMetrics {
        match flow {
            FlowKind::Reliable => &mut self.reliable,
            FlowKind::BestEffort => &mut self.best_effort,
        }
    }

    /// 归约一个流量事件。唯一的计数变更路径。
    pub fn apply(&mut self, ev: &TrafficEvent) {
        let m = self.flow_mut(ev.flow);
        match ev.kind {
            TrafficEventKind::Transmit => {
                m.packets_sent += 1;
                m.bytes_sent += ev.size_bytes as u64;
            }
            TrafficEventKind::Receive => {
                m.packets_received += 1;
                m.bytes_received += ev.size_bytes as u64;
                if m.first_rx.is_none() {
                    m.first_rx = Some(ev.at);
                }
                m.last_rx = ev.at;
            }
        }
        trace!(flow = ?ev.flow, kind = ?ev.kind, size_bytes = ev.size_bytes, at = ?ev.at, "归集流量事件");
    }

    /// 发送通知入口
    pub fn on_transmit(&mut self, flow: FlowKind, size_bytes: u32, now: SimTime) {
        self.apply(&TrafficEvent {
            kind: TrafficEventKind::Transmit,
            flow,
            size_bytes,
            at: now,
        });
    }

    /// 接收通知入口
    pub fn on_receive(&mut self, flow: FlowKind, size_bytes: u32, now: SimTime) {
        self.apply(&TrafficEvent {
            kind: TrafficEventKind::Receive,
            flow,
            size_bytes,
            at: now,
        });
    }

    /// 在 `now` 时刻生成一条流的读数
    pub fn snapshot(&self, flow: FlowKind, now: SimTime) -> Snapshot {
        let m = self.flow(flow);
        Snapshot {
            t_secs: now.as_secs_f64(),
            packets_sent: m.packets_sent,
            packets_received: m.packets_received,
            bytes_received: m.bytes_received,
            throughput_mbps: m.throughput_mbps(),
            delivery_ratio_pct: m.delivery_ratio_pct(),
        }
    }
}
