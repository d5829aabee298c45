//! CSMA 共享总线
//!
//! 半双工共享介质：段内所有帧（数据与确认，双向）在同一条
//! busy-until 时间线上串行化，之后经固定传播时延到达。

use crate::sim::SimTime;

/// 一段 CSMA 总线介质。
#[derive(Debug)]
pub struct CsmaBus {
    pub data_rate_bps: u64,
    pub delay: SimTime,
    pub busy_until: SimTime,
}

impl CsmaBus {
    /// 创建新总线
    pub fn new(data_rate_bps: u64, delay: SimTime) -> Self {
        Self {
            data_rate_bps,
            delay,
            busy_until: SimTime::ZERO,
        }
    }

    /// 计算串行化指定字节数所需的时间
    pub(crate) fn tx_time(&self, bytes: u32) -> SimTime {
        // ceil(bytes*8 / bps) 秒 -> 纳秒
        if self.data_rate_bps == 0 {
            return SimTime(u64::MAX / 4);
        }
        let bits = (bytes as u128).saturating_mul(8);
        let nanos = (bits.saturating_mul(1_000_000_000u128) + (self.data_rate_bps as u128 - 1))
            / self.data_rate_bps as u128;
        SimTime(nanos.min(u64::MAX as u128) as u64)
    }

    /// 占用介质发送一帧，返回帧到达接收端的时刻。
    ///
    /// 介质忙时排队等待：发送从 max(now, busy_until) 开始。
    pub(crate) fn seize(&mut self, now: SimTime, bytes: u32) -> SimTime {
        let start = now.max(self.busy_until);
        let depart = start.saturating_add(self.tx_time(bytes));
        self.busy_until = depart;
        depart.saturating_add(self.delay)
    }
}
