//! 网络模块
//!
//! CSMA 共享总线网络：段、帧与介质序列化。

// 子模块声明
mod bus;
mod deliver_frame;
mod frame;
mod id;
mod network;

// 重新导出公共接口
pub use bus::CsmaBus;
pub use deliver_frame::DeliverFrame;
pub use frame::{Frame, FrameKind};
pub use id::{NodeId, SegmentId};
pub use network::{CsmaSegment, Host, Network};
