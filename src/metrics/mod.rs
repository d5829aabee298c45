//! 流量指标核心
//!
//! 把发送/接收事件流聚合为每流运行计数，按周期采样写入追加式
//! CSV，并为最终对比报告提供派生指标（吞吐量、投递率）。

// 子模块声明
mod accumulator;
mod csv;
mod event;
mod flow;
mod sampler;

// 重新导出公共接口
pub use accumulator::{MetricsAccumulator, Snapshot};
pub use csv::{MetricsCsv, SinkError};
pub use event::{TrafficEvent, TrafficEventKind};
pub use flow::{FlowKind, FlowMetrics};
pub use sampler::{SampleTick, SamplerConfig, SamplerPhase, SamplerState, next_tick};
