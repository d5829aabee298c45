//! 帧交付事件
//!
//! 定义帧到达目的主机时的交付事件。

use super::frame::Frame;
use super::id::SegmentId;
use crate::sim::{Event, Simulator, World};
use crate::world::CompareWorld;
use tracing::debug;

/// 事件：一帧到达其目的主机，交给世界处理。
#[derive(Debug)]
pub struct DeliverFrame {
    pub seg: SegmentId,
    pub frame: Frame,
}

impl Event for DeliverFrame {
    #[tracing::instrument(skip(self, sim, world), fields(frame_id = self.frame.id, flow = ?self.frame.flow, kind = ?self.frame.kind))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverFrame { seg, frame } = *self;

        debug!(now = ?sim.now(), "📨 帧到达目的主机");

        let w = world
            .as_any_mut()
            .downcast_mut::<CompareWorld>()
            .expect("world must be CompareWorld");
        w.on_frame(seg, frame, sim);
    }
}
