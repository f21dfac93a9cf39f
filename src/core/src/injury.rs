//! Phase- and fatigue-weighted injury risk (spec §4.5). Grounds the
//! mechanism — not the taxonomy — on `club/player/injury.rs`'s weighted-roll
//! pattern. The teacher's 21-variant `InjuryType` enum collapses to the
//! five-level severity spec.md §9 directs, plus a concussion flag classified
//! separately per §4.5.

use serde::{Deserialize, Serialize};

use crate::rng::Rng;
use crate::runtime::PlayerRuntime;
use crate::team::TeamState;
use crate::tuning::Tuning;
use crate::types::{PlayerId, Phase, Weather};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Niggle,
    Minor,
    Moderate,
    Major,
    Severe,
}

/// One triggered injury event, reported to the caller for telemetry/commentary.
#[derive(Debug, Clone, Copy)]
pub struct InjuryEvent {
    pub player_id: PlayerId,
    pub severity: Severity,
    pub concussion: bool,
    pub injured_out: bool,
}

/// Weather isn't part of the spec's tuning table (§6 only lists weather
/// penalties for progress/accuracy), so this multiplier is a fixed, documented
/// constant rather than a configurable field: wet grounds raise soft-tissue
/// and contact-injury risk independent of what a host tunes.
fn weather_injury_mult(weather: Weather) -> f64 {
    match weather {
        Weather::Clear => 1.0,
        Weather::Windy => 1.05,
        Weather::LightRain => 1.15,
        Weather::HeavyRain => 1.30,
    }
}

fn injury_risk(
    runtime: &PlayerRuntime,
    phase: Phase,
    weather: Weather,
    tick_seconds: u32,
    tuning: &Tuning,
) -> f64 {
    let phase_mult = match phase {
        Phase::CenterBounce => tuning.injury_phase_mult.center_bounce,
        Phase::Stoppage => tuning.injury_phase_mult.stoppage,
        Phase::OpenPlay => tuning.injury_phase_mult.open_play,
        Phase::Inside50 => tuning.injury_phase_mult.inside50,
        Phase::ShotOnGoal => tuning.injury_phase_mult.shot_on_goal,
        Phase::KickIn => tuning.injury_phase_mult.kick_in,
    };
    let condition_term = 1.0 + tuning.injury_fatigue_scale * (1.0 - runtime.condition / 100.0);
    let durability_term =
        1.0 + tuning.injury_durability_scale * (1.0 - runtime.player.durability as f64 / 100.0);

    tuning.injury_base_per_minute_risk
        * phase_mult
        * condition_term
        * durability_term
        * weather_injury_mult(weather)
        * tick_seconds as f64
}

/// Per-phase severity weights: aerial-contest phases skew toward
/// moderate/major/severe and carry a higher concussion chance; open-play
/// phases skew toward niggle/minor muscle strains.
fn severity_weights(phase: Phase) -> [f64; 5] {
    match phase {
        Phase::CenterBounce | Phase::Inside50 | Phase::ShotOnGoal => {
            [0.30, 0.25, 0.20, 0.15, 0.10]
        }
        Phase::Stoppage => [0.40, 0.30, 0.18, 0.08, 0.04],
        Phase::OpenPlay | Phase::KickIn => [0.45, 0.30, 0.15, 0.07, 0.03],
    }
}

fn concussion_chance(phase: Phase) -> f64 {
    match phase {
        Phase::CenterBounce | Phase::Inside50 | Phase::ShotOnGoal => 0.12,
        Phase::Stoppage => 0.06,
        Phase::OpenPlay | Phase::KickIn => 0.04,
    }
}

fn draw_severity(weights: [f64; 5], draw: f64) -> Severity {
    let total: f64 = weights.iter().sum();
    let mut acc = 0.0;
    let severities = [
        Severity::Niggle,
        Severity::Minor,
        Severity::Moderate,
        Severity::Major,
        Severity::Severe,
    ];
    for (weight, severity) in weights.iter().zip(severities) {
        acc += weight / total;
        if draw < acc {
            return severity;
        }
    }
    Severity::Severe
}

/// Evaluates injury risk for every eligible on-field runtime this tick, in
/// vector order (fixed, deterministic). Stops drawing once `injury_max_per_team`
/// total events for the match is reached — the cap bounds further RNG
/// consumption too, not just reported events, so the sequence stays
/// reproducible given the same prior draws.
pub fn apply_injury_model(
    team: &mut TeamState,
    phase: Phase,
    weather: Weather,
    tick_seconds: u32,
    tuning: &Tuning,
    rng: &mut Rng,
    events_so_far: u32,
) -> Vec<InjuryEvent> {
    let mut events = Vec::new();
    let mut total_events = events_so_far;
    let mut forced_off = Vec::new();

    for (idx, runtime) in team.on_field.iter_mut().enumerate() {
        if total_events >= tuning.injury_max_per_team {
            break;
        }
        if runtime.is_out() || runtime.is_temporarily_off() {
            continue;
        }

        let risk = injury_risk(runtime, phase, weather, tick_seconds, tuning);
        let roll = rng.next_float();
        if roll >= risk {
            continue;
        }

        let severity_draw = rng.next_float();
        let severity = draw_severity(severity_weights(phase), severity_draw);
        let concussion_draw = rng.next_float();
        let concussion = concussion_draw < concussion_chance(phase);

        let (injured_out, mult_lo, mult_hi) = match severity {
            Severity::Niggle | Severity::Minor => (false, 0.85, 0.95),
            Severity::Moderate | Severity::Major | Severity::Severe => (false, 0.5, 0.8),
        };
        let injured_out = injured_out || concussion;
        let mult_draw = rng.next_float();
        runtime.injury_mult = mult_lo + mult_draw * (mult_hi - mult_lo);

        if injured_out {
            runtime.injured_out = true;
            log::debug!("injury: player {:?} permanently out ({:?}, concussion={})", runtime.player_id(), severity, concussion);
        } else {
            runtime.return_in_seconds = 180 + (rng.next_int(0, 420) as u32);
            log::debug!("injury: player {:?} temporarily off ({:?})", runtime.player_id(), severity);
        }

        events.push(InjuryEvent {
            player_id: runtime.player_id(),
            severity,
            concussion,
            injured_out,
        });
        total_events += 1;
        forced_off.push(idx);
    }

    if !forced_off.is_empty() {
        forced_off.sort_unstable_by(|a, b| b.cmp(a));
        for idx in forced_off {
            let runtime = team.on_field.swap_remove(idx);
            team.bench.push(runtime);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Mental, Physical, Player, Skill};
    use crate::runtime::PlayerRuntime;
    use crate::team::Tactics;
    use crate::tuning::tuning_default;
    use crate::types::{PlayerId, Role, TeamId};

    fn stub_player(id: u32, durability: u8) -> Player {
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
            durability,
        }
    }

    #[test]
    fn low_durability_never_exceeds_cap_over_many_ticks() {
        let tuning = tuning_default();
        let mut rng = Rng::new(1);
        let on_field: Vec<PlayerRuntime> = (0..18)
            .map(|i| {
                let mut r = PlayerRuntime::new(stub_player(i, 30), TeamId(1), true);
                r.condition = 20.0;
                r
            })
            .collect();
        let mut team = TeamState::new(TeamId(1), "Test", Tactics::default(), on_field, vec![]);

        let mut total = 0u32;
        for _ in 0..960 {
            let events = apply_injury_model(&mut team, Phase::Inside50, Weather::HeavyRain, 5, &tuning, &mut rng, total);
            total += events.len() as u32;
        }

        assert!(total <= tuning.injury_max_per_team);
    }

    #[test]
    fn severity_draw_respects_weight_buckets() {
        let weights = [0.5, 0.2, 0.1, 0.1, 0.1];
        assert_eq!(draw_severity(weights, 0.0), Severity::Niggle);
        assert_eq!(draw_severity(weights, 0.49), Severity::Niggle);
        assert_eq!(draw_severity(weights, 0.51), Severity::Minor);
        assert_eq!(draw_severity(weights, 0.99), Severity::Severe);
    }

    #[test]
    fn injured_out_runtime_is_moved_to_bench() {
        let tuning = tuning_default();
        let mut rng = Rng::new(42);
        let mut runtime = PlayerRuntime::new(stub_player(1, 1), TeamId(1), true);
        runtime.condition = 1.0;
        let mut team = TeamState::new(TeamId(1), "Test", Tactics::default(), vec![runtime], vec![]);

        // Force a trigger by using an artificially large base risk.
        let mut forced_tuning = tuning.clone();
        forced_tuning.injury_base_per_minute_risk = 1.0;
        let events = apply_injury_model(&mut team, Phase::Inside50, Weather::HeavyRain, 5, &forced_tuning, &mut rng, 0);

        assert_eq!(events.len(), 1);
        assert!(team.on_field.is_empty());
        assert_eq!(team.bench.len(), 1);
    }
}
