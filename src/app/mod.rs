//! 应用层
//!
//! 恒定速率 OnOff 发送端。

// 子模块声明
mod onoff;

// 重新导出公共接口
pub use onoff::{ACK_BYTES, OnOffConfig, SendAppPacket};
