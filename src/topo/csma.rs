//! CSMA 对比拓扑构建

use crate::config::RunConfig;
use crate::net::{NodeId, SegmentId};
use crate::sim::SimTime;
use crate::world::CompareWorld;

/// 一个段上的收发端点
#[derive(Debug, Clone, Copy)]
pub struct SegmentEndpoints {
    pub seg: SegmentId,
    pub sender: NodeId,
    pub sink: NodeId,
}

/// 构建两个镜像 CSMA 段（可靠侧与尽力而为侧）
///
/// 每段 `nodes` 台主机接入同一总线：0 号为发送端，末号为汇聚端，
/// 中间主机只接入不收发。返回 (可靠段, 尽力而为段)。
pub fn build_compare_topology(
    world: &mut CompareWorld,
    cfg: &RunConfig,
) -> (SegmentEndpoints, SegmentEndpoints) {
    let delay = SimTime::from_micros(cfg.delay_us);
    let data_rate_bps = cfg.data_rate_bps();

    let mut build = |prefix: &str| {
        let seg = world.net.add_segment(data_rate_bps, delay);
        let s = world.net.segment_mut(seg);
        let mut sender = NodeId(0);
        let mut sink = NodeId(0);
        for i in 0..cfg.nodes {
            let id = s.add_host(format!("{prefix}{i}"));
            if i == 0 {
                sender = id;
            }
            sink = id;
        }
        SegmentEndpoints { seg, sender, sink }
    };

    let reliable = build("r");
    let best_effort = build("b");
    (reliable, best_effort)
}
