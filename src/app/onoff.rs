//! OnOff 发送应用
//!
//! 恒定速率、始终为 on 的发送端：一个自重调度事件按分组间隔
//! 产生应用分组。可靠流在此分段上线路（逐分段确认由汇聚端回送）；
//! 尽力而为流整包作为一个数据报。

use crate::metrics::FlowKind;
use crate::net::{FrameKind, NodeId, SegmentId};
use crate::sim::{Event, SimTime, Simulator, World};
use crate::world::CompareWorld;
use tracing::{debug, trace};

/// 可靠流确认帧大小（字节）
pub const ACK_BYTES: u32 = 64;

/// 发送端参数。事件自带一份，无需世界侧注册表。
#[derive(Debug, Clone, Copy)]
pub struct OnOffConfig {
    pub flow: FlowKind,
    pub seg: SegmentId,
    pub src: NodeId,
    pub dst: NodeId,
    /// 应用分组大小（字节）
    pub packet_bytes: u32,
    /// 应用速率（bit/s）
    pub rate_bps: u64,
    /// 可靠流线路分段载荷上限（字节）；尽力而为流忽略
    pub mss_bytes: u32,
    /// 发送停止时刻（到达后不再产生新分组）
    pub stop_at: SimTime,
}

impl OnOffConfig {
    /// 恒定速率下相邻应用分组的间隔：packet_bytes*8 / rate_bps。
    pub fn packet_gap(&self) -> SimTime {
        if self.rate_bps == 0 {
            return SimTime(u64::MAX / 4);
        }
        let bits = (self.packet_bytes as u128).saturating_mul(8);
        let nanos = (bits.saturating_mul(1_000_000_000u128) + (self.rate_bps as u128 - 1))
            / self.rate_bps as u128;
        SimTime(nanos.min(u64::MAX as u128) as u64)
    }

    /// 一个应用分组在线路上的载荷序列。
    ///
    /// 可靠流按 mss 切分，尾段为余量；尽力而为流整包一帧。
    pub fn wire_sizes(&self) -> Vec<u32> {
        match self.flow {
            FlowKind::BestEffort => vec![self.packet_bytes],
            FlowKind::Reliable => {
                let mut out = Vec::new();
                let mut remain = self.packet_bytes;
                while remain > 0 {
                    let len = remain.min(self.mss_bytes.max(1));
                    out.push(len);
                    remain -= len;
                }
                out
            }
        }
    }
}

/// 事件：产生一个应用分组并重调度自身。
#[derive(Debug)]
pub struct SendAppPacket {
    pub cfg: OnOffConfig,
}

impl Event for SendAppPacket {
    #[tracing::instrument(skip(self, sim, world), fields(flow = ?self.cfg.flow))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let SendAppPacket { cfg } = *self;
        let now = sim.now();
        if now >= cfg.stop_at {
            debug!(now = ?now, "应用停止时刻已到，不再发送");
            return;
        }

        let w = world
            .as_any_mut()
            .downcast_mut::<CompareWorld>()
            .expect("world must be CompareWorld");

        // 发送端测量点：按应用分组计数。
        w.metrics.on_transmit(cfg.flow, cfg.packet_bytes, now);

        for len in cfg.wire_sizes() {
            let frame = w
                .net
                .make_frame(cfg.flow, FrameKind::Data, len, cfg.src, cfg.dst);
            w.net.transmit(cfg.seg, frame, sim);
        }

        trace!(gap = ?cfg.packet_gap(), "重调度下一个应用分组");
        sim.schedule_in(cfg.packet_gap(), SendAppPacket { cfg });
    }
}
