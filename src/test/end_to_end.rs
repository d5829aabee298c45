use crate::app::{OnOffConfig, SendAppPacket};
use crate::config::RunConfig;
use crate::metrics::{FlowKind, SampleTick, SamplerConfig, SamplerPhase};
use crate::report::ComparisonReport;
use crate::sim::{SimTime, Simulator};
use crate::topo::build_compare_topology;
use crate::world::CompareWorld;

/// Wire up the whole driver (no CSV sink) and run it to the horizon.
fn run_compare(sim_time_secs: u64) -> (CompareWorld, RunConfig) {
    let cfg = RunConfig {
        sim_time_secs,
        ..RunConfig::default()
    };
    let mut sim = Simulator::default();
    let mut world = CompareWorld::default();

    let (reliable, best_effort) = build_compare_topology(&mut world, &cfg);
    let horizon = cfg.horizon();

    for (ep, flow) in [
        (reliable, FlowKind::Reliable),
        (best_effort, FlowKind::BestEffort),
    ] {
        sim.schedule(
            SimTime::from_secs(1),
            SendAppPacket {
                cfg: OnOffConfig {
                    flow,
                    seg: ep.seg,
                    src: ep.sender,
                    dst: ep.sink,
                    packet_bytes: cfg.packet_bytes,
                    rate_bps: cfg.app_rate_bps(),
                    mss_bytes: cfg.mss_bytes,
                    stop_at: horizon,
                },
            },
        );
    }
    SampleTick::schedule_first(&mut sim, &mut world, SamplerConfig::for_horizon(horizon));

    sim.run_until(horizon, &mut world);
    (world, cfg)
}

#[test]
fn two_second_run_measures_both_flows() {
    let (world, cfg) = run_compare(2);

    // 1024 bytes at 50 Mbps is one application packet every 163.84 us;
    // sends happen in [1.0, 2.0).
    let be = world.metrics.flow(FlowKind::BestEffort);
    assert_eq!(be.packets_sent, 6_104);
    assert_eq!(be.bytes_sent, 6_104 * 1_024);
    assert!(be.packets_received > 0);
    assert!(be.packets_received <= be.packets_sent);
    assert!(be.delivery_ratio_pct() <= 100.0);

    // Each reliable application packet crosses the wire as two segments
    // (536 + 488), so the receive count outruns the send count.
    let rel = world.metrics.flow(FlowKind::Reliable);
    assert_eq!(rel.packets_sent, 6_104);
    assert!(rel.packets_received > rel.packets_sent);
    assert!(rel.delivery_ratio_pct() > 100.0);
    assert!(rel.bytes_received <= rel.bytes_sent);
    assert!(rel.first_rx.is_some());
    assert!(rel.first_rx.unwrap() < rel.last_rx);

    let report = ComparisonReport::build(cfg, &world.metrics);
    assert!(report.reliable.ratio_artifact);
    assert!(!report.best_effort.ratio_artifact);
    assert!(report.throughput.is_some());
    assert!(report.delivery.expect("both flows delivered").artifact);
}

#[test]
fn sampler_runs_on_schedule_during_a_real_run() {
    let (world, _cfg) = run_compare(2);

    // Ticks at 1.1 .. 1.9, then idle before the 2.0 horizon.
    assert_eq!(world.sampler.ticks, 9);
    assert_eq!(world.sampler.last_tick_at, Some(SimTime::from_millis(1_900)));
    assert_eq!(world.sampler.phase, SamplerPhase::Idle);
}

#[test]
fn snapshots_reflect_all_events_up_to_now() {
    let (world, _cfg) = run_compare(2);

    // A snapshot taken at the horizon agrees with the final counters.
    let snap = world
        .metrics
        .snapshot(FlowKind::BestEffort, SimTime::from_secs(2));
    let m = world.metrics.flow(FlowKind::BestEffort);
    assert_eq!(snap.packets_sent, m.packets_sent);
    assert_eq!(snap.packets_received, m.packets_received);
    assert_eq!(snap.bytes_received, m.bytes_received);
    assert!(snap.throughput_mbps > 0.0);
}
