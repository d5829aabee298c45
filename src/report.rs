//! Final comparison report.
//!
//! Built once after the run horizon is reached, from the final counters.
//! Delivery ratios above 100% are annotated as measurement artifacts
//! (the transmit and receive points count different populations) and are
//! never clamped or turned into a reliability claim.

use crate::config::RunConfig;
use crate::metrics::{FlowKind, FlowMetrics, MetricsAccumulator};
use serde::Serialize;
use std::fmt;

/// Fixed operator-context notes about the two transport semantics.
/// Static content, not derived from data.
pub const INSIGHTS: &[&str] = &[
    "Both flows use an always-on constant-rate application with the same data rate",
    "The reliable flow provides delivery guarantees through per-segment acknowledgments",
    "The best-effort flow has lower overhead but no guaranteed delivery",
    "The throughput difference shows the protocol overhead impact",
];

const ARTIFACT_NOTE: &str =
    "measurement artifact: transmit and receive points count different populations";

/// Final reading of one flow.
#[derive(Debug, Clone, Serialize)]
pub struct FlowReport {
    pub kind: FlowKind,
    pub packets_sent: u64,
    pub bytes_sent: u64,
    pub packets_received: u64,
    pub bytes_received: u64,
    pub delivery_ratio_pct: f64,
    /// True when the delivery ratio exceeds 100%.
    pub ratio_artifact: bool,
    pub throughput_mbps: f64,
    pub active_duration_secs: Option<f64>,
}

impl FlowReport {
    fn from_metrics(kind: FlowKind, m: &FlowMetrics) -> Self {
        let delivery_ratio_pct = m.delivery_ratio_pct();
        Self {
            kind,
            packets_sent: m.packets_sent,
            bytes_sent: m.bytes_sent,
            packets_received: m.packets_received,
            bytes_received: m.bytes_received,
            delivery_ratio_pct,
            ratio_artifact: delivery_ratio_pct > 100.0,
            throughput_mbps: m.throughput_mbps(),
            active_duration_secs: m.active_duration_secs(),
        }
    }
}

/// Throughput comparison; only meaningful when both sides are above zero.
#[derive(Debug, Clone, Serialize)]
pub struct ThroughputComparison {
    /// The faster flow; None when both are numerically equal.
    pub faster: Option<FlowKind>,
    /// Relative difference: |A-B| / max(A,B) * 100.
    pub diff_pct: f64,
}

/// Delivery-ratio comparison, in percentage points.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryComparison {
    pub higher: Option<FlowKind>,
    pub diff_points: f64,
    /// True when either side is a measurement artifact; the difference is
    /// then not a reliability ranking.
    pub artifact: bool,
}

/// The final comparison report.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub config: RunConfig,
    pub reliable: FlowReport,
    pub best_effort: FlowReport,
    pub throughput: Option<ThroughputComparison>,
    pub delivery: Option<DeliveryComparison>,
    pub insights: Vec<&'static str>,
}

impl ComparisonReport {
    /// Build the report from the final counters.
    pub fn build(config: RunConfig, metrics: &MetricsAccumulator) -> Self {
        let reliable =
            FlowReport::from_metrics(FlowKind::Reliable, metrics.flow(FlowKind::Reliable));
        let best_effort =
            FlowReport::from_metrics(FlowKind::BestEffort, metrics.flow(FlowKind::BestEffort));

        let throughput = (reliable.throughput_mbps > 0.0 && best_effort.throughput_mbps > 0.0)
            .then(|| {
                let a = reliable.throughput_mbps;
                let b = best_effort.throughput_mbps;
                let faster = if a > b {
                    Some(FlowKind::Reliable)
                } else if b > a {
                    Some(FlowKind::BestEffort)
                } else {
                    None
                };
                ThroughputComparison {
                    faster,
                    diff_pct: (a - b).abs() / a.max(b) * 100.0,
                }
            });

        let delivery = (reliable.delivery_ratio_pct > 0.0 && best_effort.delivery_ratio_pct > 0.0)
            .then(|| {
                let a = reliable.delivery_ratio_pct;
                let b = best_effort.delivery_ratio_pct;
                let higher = if a > b {
                    Some(FlowKind::Reliable)
                } else if b > a {
                    Some(FlowKind::BestEffort)
                } else {
                    None
                };
                DeliveryComparison {
                    higher,
                    diff_points: (a - b).abs(),
                    artifact: reliable.ratio_artifact || best_effort.ratio_artifact,
                }
            });

        Self {
            config,
            reliable,
            best_effort,
            throughput,
            delivery,
            insights: INSIGHTS.to_vec(),
        }
    }
}

fn write_flow_block(f: &mut fmt::Formatter<'_>, r: &FlowReport) -> fmt::Result {
    writeln!(f, "【 {} TRAFFIC METRICS 】", r.kind.label())?;
    writeln!(f, "  Total Packets Sent:      {}", r.packets_sent)?;
    writeln!(f, "  Total Bytes Sent:        {} bytes", r.bytes_sent)?;
    writeln!(f, "  Total Packets Received:  {}", r.packets_received)?;
    writeln!(f, "  Total Bytes Received:    {} bytes", r.bytes_received)?;
    if r.packets_sent > 0 {
        if r.ratio_artifact {
            writeln!(
                f,
                "  Packet Delivery Ratio:   {:.2}% [{ARTIFACT_NOTE}]",
                r.delivery_ratio_pct
            )?;
        } else {
            writeln!(
                f,
                "  Packet Delivery Ratio:   {:.2}%",
                r.delivery_ratio_pct
            )?;
        }
    }
    if let Some(dur) = r.active_duration_secs {
        writeln!(f, "  Throughput:              {:.2} Mbps", r.throughput_mbps)?;
        writeln!(f, "  Active Duration:         {dur:.3} seconds")?;
    }
    Ok(())
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "╔════════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            f,
            "║    CSMA NETWORK PERFORMANCE: RELIABLE vs BEST-EFFORT FLOW      ║"
        )?;
        writeln!(
            f,
            "║            (Both using an always-on OnOff source)              ║"
        )?;
        writeln!(
            f,
            "╚════════════════════════════════════════════════════════════════╝"
        )?;
        writeln!(f)?;

        writeln!(f, "【 CONFIGURATION 】")?;
        writeln!(f, "  Nodes per Segment:       {}", self.config.nodes)?;
        writeln!(
            f,
            "  Channel Data Rate:       {} Mbps",
            self.config.data_rate_mbps
        )?;
        writeln!(
            f,
            "  Propagation Delay:       {} microseconds",
            self.config.delay_us
        )?;
        writeln!(
            f,
            "  Packet Size:             {} bytes",
            self.config.packet_bytes
        )?;
        writeln!(
            f,
            "  Application Data Rate:   {} Mbps (same for both)",
            self.config.app_rate_mbps
        )?;
        writeln!(
            f,
            "  Segment Payload (MSS):   {} bytes",
            self.config.mss_bytes
        )?;
        writeln!(
            f,
            "  Simulation Time:         {} seconds",
            self.config.sim_time_secs
        )?;
        writeln!(f)?;

        write_flow_block(f, &self.reliable)?;
        writeln!(f)?;
        write_flow_block(f, &self.best_effort)?;
        writeln!(f)?;

        writeln!(f, "【 PERFORMANCE COMPARISON 】")?;
        if let Some(t) = &self.throughput {
            let (a, b) = (
                self.reliable.throughput_mbps,
                self.best_effort.throughput_mbps,
            );
            match t.faster {
                Some(FlowKind::Reliable) => writeln!(
                    f,
                    "  ✓ RELIABLE faster by {:.2}% ({a:.2} vs {b:.2} Mbps)",
                    t.diff_pct
                )?,
                Some(FlowKind::BestEffort) => writeln!(
                    f,
                    "  ✓ BEST-EFFORT faster by {:.2}% ({b:.2} vs {a:.2} Mbps)",
                    t.diff_pct
                )?,
                None => writeln!(f, "  ✓ Both flows show the same throughput: {a:.2} Mbps")?,
            }
        }
        if let Some(d) = &self.delivery {
            write!(
                f,
                "  ✓ Delivery Ratio: RELIABLE {:.2}% vs BEST-EFFORT {:.2}%",
                self.reliable.delivery_ratio_pct, self.best_effort.delivery_ratio_pct
            )?;
            if d.artifact {
                writeln!(f, " [{ARTIFACT_NOTE}; not a reliability ranking]")?;
            } else {
                match d.higher {
                    Some(k) => writeln!(f, " ({} higher by {:.2} points)", k.label(), d.diff_points)?,
                    None => writeln!(f, " (equal)")?,
                }
            }
        }
        writeln!(f)?;

        writeln!(f, "【 KEY INSIGHTS 】")?;
        for line in &self.insights {
            writeln!(f, "  • {line}")?;
        }
        Ok(())
    }
}
