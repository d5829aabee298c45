use crate::metrics::{SampleTick, SamplerConfig, SamplerPhase, next_tick};
use crate::sim::{SimTime, Simulator};
use crate::world::CompareWorld;

#[test]
fn tick_walk_covers_the_run_and_stops_before_the_boundary_margin() {
    let cfg = SamplerConfig::for_horizon(SimTime::from_secs(10));
    let cutoff = SimTime(cfg.horizon.0 - cfg.epsilon.0);

    let mut ticks = vec![cfg.start_offset];
    let mut now = cfg.start_offset;
    while let Some(next) = next_tick(now, &cfg) {
        ticks.push(next);
        now = next;
    }

    // 1.1, 1.2, ..., 9.9 — no tick at or after 9.95.
    assert_eq!(ticks.len(), 89);
    assert_eq!(*ticks.last().expect("non-empty"), SimTime::from_millis(9_900));
    assert!(ticks.iter().all(|t| *t < cutoff));
}

#[test]
fn next_tick_boundary_is_strict() {
    let cfg = SamplerConfig::for_horizon(SimTime::from_secs(10));

    assert_eq!(
        next_tick(SimTime::from_millis(9_800), &cfg),
        Some(SimTime::from_millis(9_900))
    );
    assert_eq!(next_tick(SimTime::from_millis(9_900), &cfg), None);

    // Off-grid: a next tick landing exactly on horizon - epsilon is rejected.
    assert_eq!(next_tick(SimTime::from_millis(9_850), &cfg), None);
    assert_eq!(
        next_tick(SimTime::from_millis(9_849), &cfg),
        Some(SimTime::from_millis(9_949))
    );
}

#[test]
fn sample_tick_reschedules_itself_until_idle() {
    let mut sim = Simulator::default();
    let mut world = CompareWorld::default();
    let cfg = SamplerConfig::for_horizon(SimTime::from_secs(10));

    SampleTick::schedule_first(&mut sim, &mut world, cfg);
    assert_eq!(world.sampler.phase, SamplerPhase::Scheduled);

    sim.run_until(cfg.horizon, &mut world);

    assert_eq!(world.sampler.ticks, 89);
    assert_eq!(world.sampler.last_tick_at, Some(SimTime::from_millis(9_900)));
    assert_eq!(world.sampler.phase, SamplerPhase::Idle);
}

#[test]
fn sample_tick_with_short_horizon_samples_while_it_can() {
    let mut sim = Simulator::default();
    let mut world = CompareWorld::default();
    let cfg = SamplerConfig::for_horizon(SimTime::from_secs(2));

    SampleTick::schedule_first(&mut sim, &mut world, cfg);
    sim.run_until(cfg.horizon, &mut world);

    // 1.1 .. 1.9
    assert_eq!(world.sampler.ticks, 9);
    assert_eq!(world.sampler.last_tick_at, Some(SimTime::from_millis(1_900)));
    assert_eq!(world.sampler.phase, SamplerPhase::Idle);
}
