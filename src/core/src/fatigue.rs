//! Per-tick condition drain and recovery (spec §4.3). Grounded on
//! `club/player/attributes.rs`'s `condition`/`rest`/`condition_percentage`
//! pattern, adapted from its 0..10000 fixed-point day-granularity value to
//! this spec's 0..100 per-tick value.

use crate::team::TeamState;
use crate::types::Phase;

const BENCH_RECOVERY_PER_SECOND: f64 = 0.4;

fn phase_drain_per_second(phase: Phase) -> f64 {
    match phase {
        Phase::Inside50 | Phase::CenterBounce => 0.09,
        Phase::OpenPlay => 0.06,
        Phase::ShotOnGoal | Phase::KickIn => 0.04,
        Phase::Stoppage => 0.02,
    }
}

/// Maps `condition` in `[0, 100]` to `fatigue_mult` in `[0.6, 1.0]` via a
/// smoothstep curve, monotone non-decreasing as required by spec §3's
/// invariant list. Endpoints are exact: `condition=100 -> 1.0`,
/// `condition=0 -> 0.6`.
pub fn fatigue_mult(condition: f64) -> f64 {
    let x = (condition / 100.0).clamp(0.0, 1.0);
    let smoothstep = x * x * (3.0 - 2.0 * x);
    0.6 + 0.4 * smoothstep
}

/// Applies one tick of fatigue to a team's on-field and bench runtimes.
/// On-field runtimes drain by phase-dependent, work-rate-scaled amount;
/// bench runtimes recover at a fixed rate. `fatigue_mult` is recomputed for
/// every runtime afterward so it is always consistent with `condition`.
pub fn apply_fatigue(team: &mut TeamState, phase: Phase, tick_seconds: u32) {
    let base_drain = phase_drain_per_second(phase) * tick_seconds as f64;
    for runtime in team.on_field.iter_mut() {
        if runtime.is_out() || runtime.is_temporarily_off() {
            continue;
        }
        let work_rate_scale = 0.7 + 0.006 * runtime.player.mental.work_rate as f64;
        runtime.condition = (runtime.condition - base_drain * work_rate_scale).max(0.0);
        runtime.seconds_played += tick_seconds;
        runtime.seconds_since_rotation += tick_seconds;
        runtime.fatigue_mult = fatigue_mult(runtime.condition);
    }

    let bench_recovery = BENCH_RECOVERY_PER_SECOND * tick_seconds as f64;
    for runtime in team.bench.iter_mut() {
        runtime.condition = (runtime.condition + bench_recovery).min(100.0);
        runtime.fatigue_mult = fatigue_mult(runtime.condition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Mental, Physical, Player, Skill};
    use crate::runtime::PlayerRuntime;
    use crate::team::{Tactics, TeamState};
    use crate::types::{PlayerId, Role, TeamId};

    fn stub_player(id: u32) -> Player {
        Player {
            id: PlayerId(id),
            name: "P".to_string(),
            age: 24,
            role: Role::Wing,
            physical: Physical {
                speed: 70,
                acceleration: 70,
                strength: 70,
                agility: 70,
                jump: 70,
            },
            skill: Skill {
                kicking: 70,
                marking: 70,
                handball: 70,
                tackling: 70,
                clearance: 70,
                ruck_work: 70,
                spoiling: 70,
            },
            mental: Mental {
                decision_making: 70,
                composure: 70,
                work_rate: 70,
                positioning: 70,
                leadership: 70,
            },
            durability: 70,
        }
    }

    #[test]
    fn fatigue_mult_endpoints_match_spec() {
        assert!((fatigue_mult(100.0) - 1.0).abs() < 1e-9);
        assert!((fatigue_mult(0.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn fatigue_mult_is_monotone_nondecreasing() {
        let mut prev = fatigue_mult(0.0);
        let mut condition = 1.0;
        while condition <= 100.0 {
            let current = fatigue_mult(condition);
            assert!(current >= prev - 1e-12);
            prev = current;
            condition += 1.0;
        }
    }

    #[test]
    fn on_field_drains_and_bench_recovers() {
        let on_field = vec![PlayerRuntime::new(stub_player(1), TeamId(1), true)];
        let bench = {
            let mut runtime = PlayerRuntime::new(stub_player(2), TeamId(1), false);
            runtime.condition = 50.0;
            vec![runtime]
        };
        let mut team = TeamState::new(TeamId(1), "Test", Tactics::default(), on_field, bench);

        apply_fatigue(&mut team, Phase::Inside50, 5);

        assert!(team.on_field[0].condition < 100.0);
        assert!(team.bench[0].condition > 50.0);
    }

    #[test]
    fn out_and_temporarily_off_players_do_not_drain() {
        let mut out_runtime = PlayerRuntime::new(stub_player(1), TeamId(1), true);
        out_runtime.injured_out = true;
        let mut team = TeamState::new(TeamId(1), "Test", Tactics::default(), vec![out_runtime], vec![]);

        apply_fatigue(&mut team, Phase::Inside50, 5);

        assert_eq!(team.on_field[0].condition, 100.0);
    }
}
