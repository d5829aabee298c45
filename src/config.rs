//! Run parameters for the comparison experiment.
//!
//! These only parameterize the driver layer (channels and applications);
//! the metrics core consumes nothing but the resulting horizon.

use crate::sim::SimTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid run parameters, rejected before any setup happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("nodes must be >= 2 per segment (got {0})")]
    TooFewNodes(u32),
    #[error("data_rate_mbps must be > 0")]
    ZeroDataRate,
    #[error("app_rate_mbps must be > 0")]
    ZeroAppRate,
    #[error("packet_bytes must be > 0")]
    ZeroPacketBytes,
    #[error("mss_bytes must be > 0")]
    ZeroMss,
    #[error("sim_time_secs must be > 0")]
    ZeroSimTime,
}

/// Everything a single run is parameterized by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Hosts attached to each CSMA segment.
    pub nodes: u32,
    /// Channel data rate in Mbps.
    pub data_rate_mbps: u64,
    /// Channel propagation delay in microseconds.
    pub delay_us: u64,
    /// Total simulated run time in seconds.
    pub sim_time_secs: u64,
    /// Application packet size in bytes.
    pub packet_bytes: u32,
    /// Application sending rate in Mbps (same for both flows).
    pub app_rate_mbps: u64,
    /// Wire segment payload cap for the reliable flow, in bytes.
    pub mss_bytes: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            nodes: 5,
            data_rate_mbps: 100,
            delay_us: 2,
            sim_time_secs: 10,
            packet_bytes: 1024,
            app_rate_mbps: 50,
            mss_bytes: 536,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nodes < 2 {
            return Err(ConfigError::TooFewNodes(self.nodes));
        }
        if self.data_rate_mbps == 0 {
            return Err(ConfigError::ZeroDataRate);
        }
        if self.app_rate_mbps == 0 {
            return Err(ConfigError::ZeroAppRate);
        }
        if self.packet_bytes == 0 {
            return Err(ConfigError::ZeroPacketBytes);
        }
        if self.mss_bytes == 0 {
            return Err(ConfigError::ZeroMss);
        }
        if self.sim_time_secs == 0 {
            return Err(ConfigError::ZeroSimTime);
        }
        Ok(())
    }

    /// Run horizon: the sampler stops relative to this and the engine runs until it.
    pub fn horizon(&self) -> SimTime {
        SimTime::from_secs(self.sim_time_secs)
    }

    pub fn data_rate_bps(&self) -> u64 {
        self.data_rate_mbps.saturating_mul(1_000_000)
    }

    pub fn app_rate_bps(&self) -> u64 {
        self.app_rate_mbps.saturating_mul(1_000_000)
    }
}
