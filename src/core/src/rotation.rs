//! Interchange policy (spec §4.4). Grounded on
//! `club/team/squad/swap.rs`'s `AbilitySwapEvaluator`: rank candidates on one
//! side, rank candidates on the other, pair off while a cap holds. Simplified
//! to a single freshest-bench-for-most-tired swap per team per tick, since
//! the teacher's multiple position-group passes operate on a day granularity
//! this tick-based model does not have.

use crate::team::TeamState;

fn rotation_threshold(rotation_aggressiveness: u8) -> f64 {
    30.0 + rotation_aggressiveness as f64 * 0.3
}

/// Index of the most-tired eligible on-field runtime: ordered by descending
/// `seconds_since_rotation`, ascending `condition` as the tiebreak.
fn most_tired_on_field(team: &TeamState) -> Option<usize> {
    team.on_field
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_out() && !r.is_temporarily_off())
        .max_by(|(_, a), (_, b)| {
            a.seconds_since_rotation
                .cmp(&b.seconds_since_rotation)
                .then_with(|| b.condition.partial_cmp(&a.condition).unwrap())
        })
        .map(|(idx, _)| idx)
}

/// Index of the freshest eligible bench runtime, ties broken by ascending
/// player id for determinism.
fn freshest_bench(team: &TeamState) -> Option<usize> {
    team.bench
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_out() && !r.is_temporarily_off())
        .max_by(|(_, a), (_, b)| {
            a.condition
                .partial_cmp(&b.condition)
                .unwrap()
                .then_with(|| b.player_id().0.cmp(&a.player_id().0))
        })
        .map(|(idx, _)| idx)
}

/// Counts down `return_in_seconds` for every bench runtime (spec §4.5
/// niggle/minor countdown). A runtime that reaches zero becomes an ordinary
/// eligible bench candidate again.
pub fn tick_injury_countdowns(team: &mut TeamState, tick_seconds: u32) {
    for runtime in team.bench.iter_mut() {
        if runtime.return_in_seconds > 0 {
            runtime.return_in_seconds = runtime.return_in_seconds.saturating_sub(tick_seconds);
        }
    }
}

/// Tops the on-field count back up to `target_on_field` from the freshest
/// eligible bench players, without touching `interchanges_used` — this is
/// forced backfill after an injury, not a tactical rotation (spec §3
/// invariant: on-field ∪ bench stays constant, injured players just lose
/// rotation eligibility).
pub fn fill_vacancies(team: &mut TeamState) {
    while team.on_field.len() < team.target_on_field {
        let Some(fresh_idx) = freshest_bench(team) else {
            break;
        };
        let mut fresh = team.bench.swap_remove(fresh_idx);
        fresh.on_field = true;
        fresh.seconds_since_rotation = 0;
        team.on_field.push(fresh);
    }
}

/// Attempts one swap for a team this tick. Returns `true` if a swap happened
/// (the match layer uses this to increment the interchange counter).
/// Permanently injured players are never considered as swap candidates on
/// either side (spec §4.4: "never swapped back in").
pub fn attempt_rotation(team: &mut TeamState) -> bool {
    if team.interchanges_used >= team.tactics.interchange_cap as u32 {
        return false;
    }

    let Some(tired_idx) = most_tired_on_field(team) else {
        return false;
    };
    let threshold = rotation_threshold(team.tactics.rotation_aggressiveness);
    if team.on_field[tired_idx].condition >= threshold {
        return false;
    }

    let Some(fresh_idx) = freshest_bench(team) else {
        return false;
    };

    let mut tired = team.on_field.swap_remove(tired_idx);
    let mut fresh = team.bench.swap_remove(fresh_idx);

    tired.on_field = false;
    tired.seconds_since_rotation = 0;
    fresh.on_field = true;
    fresh.seconds_since_rotation = 0;

    team.bench.push(tired);
    team.on_field.push(fresh);
    team.interchanges_used += 1;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Mental, Physical, Player, Skill};
    use crate::runtime::PlayerRuntime;
    use crate::team::Tactics;
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

    fn team_with(tired_condition: f64, bench_condition: f64, cap: u8) -> TeamState {
        let mut tired = PlayerRuntime::new(stub_player(1), TeamId(1), true);
        tired.condition = tired_condition;
        tired.seconds_since_rotation = 600;

        let mut fresh_bench = PlayerRuntime::new(stub_player(2), TeamId(1), false);
        fresh_bench.condition = bench_condition;

        let mut tactics = Tactics::default();
        tactics.interchange_cap = cap;
        tactics.rotation_aggressiveness = 50;

        TeamState::new(TeamId(1), "Test", tactics, vec![tired], vec![fresh_bench])
    }

    #[test]
    fn swaps_tired_player_for_fresh_bench() {
        let mut team = team_with(10.0, 100.0, 10);
        let swapped = attempt_rotation(&mut team);
        assert!(swapped);
        assert_eq!(team.on_field[0].player_id(), PlayerId(2));
        assert_eq!(team.bench[0].player_id(), PlayerId(1));
        assert_eq!(team.interchanges_used, 1);
    }

    #[test]
    fn no_swap_when_condition_above_threshold() {
        let mut team = team_with(90.0, 100.0, 10);
        assert!(!attempt_rotation(&mut team));
        assert_eq!(team.interchanges_used, 0);
    }

    #[test]
    fn no_swap_when_cap_exhausted() {
        let mut team = team_with(10.0, 100.0, 0);
        assert!(!attempt_rotation(&mut team));
    }

    #[test]
    fn injured_out_bench_player_is_never_swapped_in() {
        let mut team = team_with(10.0, 100.0, 10);
        team.bench[0].injured_out = true;
        assert!(!attempt_rotation(&mut team));
    }

    #[test]
    fn fill_vacancies_tops_up_from_bench() {
        let mut team = team_with(50.0, 100.0, 10);
        team.on_field.clear();
        fill_vacancies(&mut team);
        assert_eq!(team.on_field.len(), 1);
        assert!(team.bench.is_empty());
    }

    #[test]
    fn injury_countdown_reaches_zero() {
        let mut team = team_with(50.0, 100.0, 10);
        team.bench[0].return_in_seconds = 5;
        tick_injury_countdowns(&mut team, 5);
        assert_eq!(team.bench[0].return_in_seconds, 0);
    }
}
