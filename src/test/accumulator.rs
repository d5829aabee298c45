use crate::metrics::{FlowKind, MetricsAccumulator, TrafficEvent, TrafficEventKind};
use crate::sim::SimTime;

#[test]
fn transmit_only_touches_send_counters() {
    let mut acc = MetricsAccumulator::default();
    acc.on_transmit(FlowKind::Reliable, 1_024, SimTime::from_secs(1));
    acc.on_transmit(FlowKind::Reliable, 1_024, SimTime::from_secs(2));

    let m = acc.flow(FlowKind::Reliable);
    assert_eq!(m.packets_sent, 2);
    assert_eq!(m.bytes_sent, 2_048);
    assert_eq!(m.packets_received, 0);
    assert!(m.first_rx.is_none());

    // Before any receive the derived metrics stay at zero.
    let snap = acc.snapshot(FlowKind::Reliable, SimTime::from_secs(3));
    assert_eq!(snap.throughput_mbps, 0.0);
    assert_eq!(snap.delivery_ratio_pct, 0.0);
}

#[test]
fn receive_sets_first_rx_once_and_tracks_last_rx() {
    let mut acc = MetricsAccumulator::default();
    let t1 = SimTime::from_millis(1_500);
    let t2 = SimTime::from_millis(2_500);

    acc.on_receive(FlowKind::BestEffort, 512, t1);
    let m = acc.flow(FlowKind::BestEffort);
    assert_eq!(m.first_rx, Some(t1));
    assert_eq!(m.last_rx, t1);

    acc.on_receive(FlowKind::BestEffort, 512, t2);
    let m = acc.flow(FlowKind::BestEffort);
    assert_eq!(m.first_rx, Some(t1));
    assert_eq!(m.last_rx, t2);
    assert_eq!(m.packets_received, 2);
    assert_eq!(m.bytes_received, 1_024);
}

#[test]
fn flows_are_accounted_independently() {
    let mut acc = MetricsAccumulator::default();
    acc.on_transmit(FlowKind::Reliable, 100, SimTime::from_secs(1));
    acc.on_receive(FlowKind::BestEffort, 200, SimTime::from_secs(1));

    assert_eq!(acc.flow(FlowKind::Reliable).packets_sent, 1);
    assert_eq!(acc.flow(FlowKind::Reliable).packets_received, 0);
    assert_eq!(acc.flow(FlowKind::BestEffort).packets_sent, 0);
    assert_eq!(acc.flow(FlowKind::BestEffort).packets_received, 1);
}

#[test]
fn reducer_accepts_explicit_traffic_events() {
    let mut acc = MetricsAccumulator::default();
    acc.apply(&TrafficEvent {
        kind: TrafficEventKind::Transmit,
        flow: FlowKind::Reliable,
        size_bytes: 64,
        at: SimTime::from_secs(1),
    });
    acc.apply(&TrafficEvent {
        kind: TrafficEventKind::Receive,
        flow: FlowKind::Reliable,
        size_bytes: 64,
        at: SimTime::from_secs(1),
    });

    let m = acc.flow(FlowKind::Reliable);
    assert_eq!(m.packets_sent, 1);
    assert_eq!(m.packets_received, 1);
    assert_eq!(m.delivery_ratio_pct(), 100.0);
}

#[test]
fn hundred_packet_scenario_matches_formula() {
    let mut acc = MetricsAccumulator::default();

    // 100 transmits of 1024 bytes starting at t=1.0, receives at 1.0 + 0.01*i.
    for i in 0u64..100 {
        acc.on_transmit(FlowKind::Reliable, 1_024, SimTime::from_secs(1));
        acc.on_receive(
            FlowKind::Reliable,
            1_024,
            SimTime::from_millis(1_000 + 10 * i),
        );
    }

    let snap = acc.snapshot(FlowKind::Reliable, SimTime::from_secs(2));
    assert_eq!(snap.packets_sent, 100);
    assert_eq!(snap.packets_received, 100);
    assert_eq!(snap.bytes_received, 102_400);
    assert_eq!(snap.delivery_ratio_pct, 100.0);

    // Active duration is 1.0..1.99 seconds.
    let expected = 102_400.0 * 8.0 / 0.99 / 1_000_000.0;
    assert!((snap.throughput_mbps - expected).abs() < 1e-9);
}
