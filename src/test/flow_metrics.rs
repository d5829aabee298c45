use crate::metrics::FlowMetrics;
use crate::sim::SimTime;

#[test]
fn zeroed_flow_has_no_derived_metrics() {
    let m = FlowMetrics::default();
    assert!(m.first_rx.is_none());
    assert_eq!(m.active_duration_secs(), None);
    assert_eq!(m.throughput_mbps(), 0.0);
    assert_eq!(m.delivery_ratio_pct(), 0.0);
}

#[test]
fn delivery_ratio_is_zero_without_sends_regardless_of_receives() {
    let m = FlowMetrics {
        packets_received: 42,
        bytes_received: 42 * 1_024,
        ..FlowMetrics::default()
    };
    assert_eq!(m.delivery_ratio_pct(), 0.0);
}

#[test]
fn throughput_formula_round_trips() {
    // 1,000,000 bytes over one second of active duration is 8 Mbps.
    let m = FlowMetrics {
        bytes_received: 1_000_000,
        first_rx: Some(SimTime::from_secs(1)),
        last_rx: SimTime::from_secs(2),
        ..FlowMetrics::default()
    };
    assert_eq!(m.active_duration_secs(), Some(1.0));
    assert_eq!(m.throughput_mbps(), 8.0);
}

#[test]
fn throughput_is_zero_without_positive_active_duration() {
    let m = FlowMetrics {
        bytes_received: 1_000_000,
        first_rx: Some(SimTime::from_secs(2)),
        last_rx: SimTime::from_secs(2),
        ..FlowMetrics::default()
    };
    assert_eq!(m.active_duration_secs(), None);
    assert_eq!(m.throughput_mbps(), 0.0);
}

#[test]
fn delivery_ratio_above_100_is_not_clamped() {
    let m = FlowMetrics {
        packets_sent: 10,
        packets_received: 25,
        ..FlowMetrics::default()
    };
    assert_eq!(m.delivery_ratio_pct(), 250.0);
}
