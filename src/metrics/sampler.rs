//! 周期采样器
//!
//! 自重调度的采样事件：每个 tick 读取两条流的快照写入 Sink，
//! 再由纯决策函数判断是否调度下一个 tick。

use super::flow::FlowKind;
use crate::sim::{Event, SimTime, Simulator, World};
use crate::world::CompareWorld;
use tracing::{debug, warn};

/// 采样参数
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    /// 运行起点之后首个 tick 的偏移
    pub start_offset: SimTime,
    /// tick 间隔
    pub interval: SimTime,
    /// 运行终点
    pub horizon: SimTime,
    /// 终点处的容差：下一个 tick 必须严格早于 horizon - epsilon
    pub epsilon: SimTime,
}

impl SamplerConfig {
    /// 默认节奏：1.1s 起，每 0.1s 一次，终点容差 0.05s。
    pub fn for_horizon(horizon: SimTime) -> Self {
        Self {
            start_offset: SimTime::from_millis(1_100),
            interval: SimTime::from_millis(100),
            horizon,
            epsilon: SimTime::from_millis(50),
        }
    }
}

/// 采样器所处的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplerPhase {
    /// 已到达终点容差，不再采样
    #[default]
    Idle,
    /// 有一个 tick 已调度、尚未执行
    Scheduled,
}

/// 采样器状态机（阶段 + 运行摘要）
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplerState {
    pub phase: SamplerPhase,
    pub ticks: u64,
    pub last_tick_at: Option<SimTime>,
}

/// 纯决策函数：给定当前 tick 时刻与参数，返回下一个 tick 的时刻。
///
/// 仅当下一个 tick 严格早于 `horizon - epsilon` 时才继续调度，
/// 因此最后一个 tick 一定落在终点容差之前，终点时刻不会再采样。
pub fn next_tick(now: SimTime, cfg: &SamplerConfig) -> Option<SimTime> {
    let next = now.saturating_add(cfg.interval);
    if next.0.saturating_add(cfg.epsilon.0) < cfg.horizon.0 {
        Some(next)
    } else {
        None
    }
}

/// 采样事件：读取两条流的快照，写入 Sink，再决定是否重调度自身。
#[derive(Debug)]
pub struct SampleTick {
    pub cfg: SamplerConfig,
}

impl SampleTick {
    /// 在运行起点调度首个 tick，并把采样器标记为已调度。
    pub fn schedule_first(sim: &mut Simulator, world: &mut CompareWorld, cfg: SamplerConfig) {
        world.sampler.phase = SamplerPhase::Scheduled;
        sim.schedule(cfg.start_offset, SampleTick { cfg });
    }
}

impl Event for SampleTick {
    #[tracing::instrument(skip(self, sim, world))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let SampleTick { cfg } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<CompareWorld>()
            .expect("world must be CompareWorld");

        let now = sim.now();
        let reliable = w.metrics.snapshot(FlowKind::Reliable, now);
        let best_effort = w.metrics.snapshot(FlowKind::BestEffort, now);
        debug!(t_secs = reliable.t_secs, tick = w.sampler.ticks + 1, "📊 周期采样");

        // 运行中的写入失败只告警，不中断时间线；按行落盘是唯一的持久化保证。
        if let Some(csv) = &mut w.csv {
            if let Err(e) = csv.append(&reliable, &best_effort) {
                warn!(error = %e, "采样行写入失败");
            }
        }

        w.sampler.ticks += 1;
        w.sampler.last_tick_at = Some(now);

        match next_tick(now, &cfg) {
            Some(at) => {
                w.sampler.phase = SamplerPhase::Scheduled;
                sim.schedule(at, SampleTick { cfg });
            }
            None => {
                w.sampler.phase = SamplerPhase::Idle;
                debug!(now = ?now, "采样到达终点容差，停止");
            }
        }
    }
}
