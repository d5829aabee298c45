//! 仿真核心模块
//!
//! 事件驱动仿真的核心组件：仿真时间、事件队列与世界接口。

// 子模块声明
mod event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use event::{Event, ScheduledEvent};
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
