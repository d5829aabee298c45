//! 网络拓扑管理
//!
//! 持有全部 CSMA 段；负责帧的创建与介质上的发送调度。

use super::bus::CsmaBus;
use super::deliver_frame::DeliverFrame;
use super::frame::{Frame, FrameKind};
use super::id::{NodeId, SegmentId};
use crate::metrics::FlowKind;
use crate::sim::{SimTime, Simulator};
use tracing::{debug, trace};

/// 接入段总线的主机
#[derive(Debug)]
pub struct Host {
    pub id: NodeId,
    pub name: String,
}

/// 一个 CSMA 段：共享总线与接入的主机。
#[derive(Debug)]
pub struct CsmaSegment {
    pub bus: CsmaBus,
    pub hosts: Vec<Host>,
}

impl CsmaSegment {
    /// 接入一台主机
    pub fn add_host(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.hosts.len());
        self.hosts.push(Host {
            id,
            name: name.into(),
        });
        id
    }
}

/// 网络：若干相互独立的 CSMA 段
#[derive(Debug, Default)]
pub struct Network {
    segments: Vec<CsmaSegment>,
    next_frame_id: u64,
}

impl Network {
    /// 新建一个段并返回其标识
    pub fn add_segment(&mut self, data_rate_bps: u64, delay: SimTime) -> SegmentId {
        let id = SegmentId(self.segments.len());
        self.segments.push(CsmaSegment {
            bus: CsmaBus::new(data_rate_bps, delay),
            hosts: Vec::new(),
        });
        id
    }

    pub fn segment(&self, id: SegmentId) -> &CsmaSegment {
        &self.segments[id.0]
    }

    pub fn segment_mut(&mut self, id: SegmentId) -> &mut CsmaSegment {
        &mut self.segments[id.0]
    }

    /// 创建帧
    pub fn make_frame(
        &mut self,
        flow: FlowKind,
        kind: FrameKind,
        size_bytes: u32,
        src: NodeId,
        dst: NodeId,
    ) -> Frame {
        let id = self.next_frame_id;
        self.next_frame_id = self.next_frame_id.wrapping_add(1);
        Frame {
            id,
            flow,
            kind,
            size_bytes,
            src,
            dst,
        }
    }

    /// 把帧放上段总线：按介质占用计算到达时刻并调度交付事件。
    #[tracing::instrument(skip(self, sim), fields(seg = seg.0, frame_id = frame.id, flow = ?frame.flow))]
    pub fn transmit(&mut self, seg: SegmentId, frame: Frame, sim: &mut Simulator) {
        let bus = &mut self.segments[seg.0].bus;
        let now = sim.now();
        let arrive = bus.seize(now, frame.size_bytes);

        trace!(
            now = ?now,
            busy_until = ?bus.busy_until,
            arrive = ?arrive,
            size_bytes = frame.size_bytes,
            "介质占用完成"
        );
        debug!(kind = ?frame.kind, arrive = ?arrive, "调度帧交付事件");

        sim.schedule(arrive, DeliverFrame { seg, frame });
    }
}
