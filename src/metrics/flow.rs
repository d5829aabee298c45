//! 每流运行计数
//!
//! 定义流类别与单条流的运行计数及其派生指标。

use crate::sim::SimTime;
use serde::Serialize;

/// 流类别：可靠（面向连接、带确认）或尽力而为（无连接）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Reliable,
    BestEffort,
}

impl FlowKind {
    /// 报告与日志中使用的展示名
    pub fn label(self) -> &'static str {
        match self {
            FlowKind::Reliable => "RELIABLE",
            FlowKind::BestEffort => "BEST-EFFORT",
        }
    }
}

/// 单条流的运行计数。只有事件归集入口会修改它。
#[derive(Debug, Clone, Default)]
pub struct FlowMetrics {
    pub packets_sent: u64,
    pub bytes_sent: u64,
    pub packets_received: u64,
    pub bytes_received: u64,
    /// 首个接收事件的时刻；None 表示尚未收到任何数据。
    pub first_rx: Option<SimTime>,
    /// 最近一次接收事件的时刻。接收事件按时间非降序到达，故单调不减。
    pub last_rx: SimTime,
}

impl FlowMetrics {
    /// 活跃时长（首次到最近一次接收，秒）。观测不足两个时刻时为 None。
    pub fn active_duration_secs(&self) -> Option<f64> {
        let first = self.first_rx?;
        if self.last_rx <= first {
            return None;
        }
        Some(self.last_rx.as_secs_f64() - first.as_secs_f64())
    }

    /// 吞吐量（Mbps）。按活跃时长计算，空闲启动期不稀释速率。
    pub fn throughput_mbps(&self) -> f64 {
        match self.active_duration_secs() {
            Some(dur) => (self.bytes_received as f64 * 8.0) / dur / 1_000_000.0,
            None => 0.0,
        }
    }

    /// 投递率（百分比）。发送计数为零时为 0。
    ///
    /// 收发两端统计的可能不是同一总体（发送端数应用分组，接收端数
    /// 线路分段），因此比值可以超过 100；这里不截断，由报告层标注。
    pub fn delivery_ratio_pct(&self) -> f64 {
        if self.packets_sent == 0 {
            0.0
        } else {
            self.packets_received as f64 / self.packets_sent as f64 * 100.0
        }
    }
}
