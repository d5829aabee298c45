//! 对比世界
//!
//! 世界实现：网络 + 指标累加器 + 采样器状态 + 采样日志。
//! 全部可变状态都挂在这里并随事件传入，不存在进程级全局量。

use crate::app::ACK_BYTES;
use crate::metrics::{FlowKind, MetricsAccumulator, MetricsCsv, SamplerState};
use crate::net::{Frame, FrameKind, Network, SegmentId};
use crate::sim::{Simulator, World};
use std::any::Any;
use tracing::trace;

/// 对比仿真的世界。
#[derive(Debug, Default)]
pub struct CompareWorld {
    pub net: Network,
    pub metrics: MetricsAccumulator,
    pub sampler: SamplerState,
    /// 采样日志；None 表示本次运行不落盘（测试用）。
    pub csv: Option<MetricsCsv>,
}

impl CompareWorld {
    /// 帧到达目的主机后的处理。
    pub(crate) fn on_frame(&mut self, seg: SegmentId, frame: Frame, sim: &mut Simulator) {
        match frame.kind {
            FrameKind::Data => {
                // 接收端测量点：按到达的线路帧计数。
                self.metrics
                    .on_receive(frame.flow, frame.size_bytes, sim.now());

                // 可靠流：每个数据分段回送一个确认帧，占用同一共享介质。
                if frame.flow == FlowKind::Reliable {
                    let ack = self.net.make_frame(
                        frame.flow,
                        FrameKind::Ack,
                        ACK_BYTES,
                        frame.dst,
                        frame.src,
                    );
                    self.net.transmit(seg, ack, sim);
                }
            }
            FrameKind::Ack => {
                // 确认帧只消耗介质时间，不进入接收测量点。
                trace!(frame_id = frame.id, "确认帧到达发送端");
            }
        }
    }
}

impl World for CompareWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
