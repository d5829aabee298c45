//! 仿真时间类型
//!
//! 以纳秒为单位的仿真时间及其单位转换。调度始终使用整数纳秒，
//! 避免浮点累积误差；只有派生指标的计算才转换为浮点秒。

/// 仿真时间（纳秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);
    pub const NANOS_PER_SEC: u64 = 1_000_000_000;

    pub fn from_micros(us: u64) -> SimTime {
        SimTime(us.saturating_mul(1_000))
    }
    pub fn from_millis(ms: u64) -> SimTime {
        SimTime(ms.saturating_mul(1_000_000))
    }
    pub fn from_secs(s: u64) -> SimTime {
        SimTime(s.saturating_mul(Self::NANOS_PER_SEC))
    }

    /// 转换为浮点秒（仅用于派生指标计算与输出）。
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / Self::NANOS_PER_SEC as f64
    }

    /// 饱和加法：自重调度事件计算 now + delta 的常用形式。
    pub fn saturating_add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_add(rhs.0))
    }
}
