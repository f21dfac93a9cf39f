//! Pure rating functions (spec §4.2). None of these touch the RNG or mutate
//! anything; each takes a slice of on-field contributors and returns a single
//! score. Grounded on `club/player/calculators/calculator.rs`'s style of
//! small, pure, weighted-sum scoring functions over attribute fields.

use itertools::Itertools;

use crate::player::Player;
use crate::runtime::PlayerRuntime;

fn midfield_component(player: &Player) -> f64 {
    0.45 * player.skill.clearance as f64
        + 0.25 * player.physical.strength as f64
        + 0.15 * player.mental.positioning as f64
        + 0.15 * player.mental.decision_making as f64
}

fn inside50_component(player: &Player) -> f64 {
    0.5 * player.skill.marking as f64
        + 0.3 * player.skill.kicking as f64
        + 0.2 * player.mental.decision_making as f64
}

fn defense_component(player: &Player) -> f64 {
    0.5 * player.skill.tackling as f64 + 0.3 * player.mental.positioning as f64 + 0.2 * player.mental.work_rate as f64
}

/// Averages the top `n` scores without sorting the whole (≤22-element)
/// slice, via `itertools`' `k_largest_by` — cheaper than a full sort when
/// only a handful of the on-field set ever matters.
fn top_n_average(scores: Vec<f64>, n: usize) -> f64 {
    if scores.is_empty() {
        return 1.0;
    }
    let top: Vec<f64> = scores.into_iter().k_largest_by(n, |a, b| a.partial_cmp(b).unwrap()).collect();
    let count = top.len();
    top.into_iter().sum::<f64>() / count as f64
}

fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 1.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Top-5 midfield rating over static attributes, unscaled by condition.
pub fn midfield_rating(players: &[&Player]) -> f64 {
    top_n_average(players.iter().map(|p| midfield_component(p)).collect(), 5)
}

/// Top-5 midfield rating over on-field runtimes, each term scaled by
/// `fatigue_mult * injury_mult` (spec §4.2 "runtime-aware overload").
pub fn midfield_rating_runtime(runtimes: &[&PlayerRuntime]) -> f64 {
    top_n_average(
        runtimes
            .iter()
            .map(|r| midfield_component(&r.player) * r.fatigue_mult * r.injury_mult)
            .collect(),
        5,
    )
}

/// Top-6 inside-50 quality rating over static attributes.
pub fn inside50_rating(players: &[&Player]) -> f64 {
    top_n_average(players.iter().map(|p| inside50_component(p)).collect(), 6)
}

/// Top-6 inside-50 quality rating over on-field runtimes, condition-scaled.
pub fn inside50_rating_runtime(runtimes: &[&PlayerRuntime]) -> f64 {
    top_n_average(
        runtimes
            .iter()
            .map(|r| inside50_component(&r.player) * r.fatigue_mult * r.injury_mult)
            .collect(),
        6,
    )
}

/// Mean defensive pressure over all on-field static attributes.
pub fn defensive_pressure(players: &[&Player]) -> f64 {
    mean(&players.iter().map(|p| defense_component(p)).collect::<Vec<_>>())
}

/// Mean defensive pressure over all on-field runtimes, condition-scaled.
pub fn defensive_pressure_runtime(runtimes: &[&PlayerRuntime]) -> f64 {
    mean(
        &runtimes
            .iter()
            .map(|r| defense_component(&r.player) * r.fatigue_mult * r.injury_mult)
            .collect::<Vec<_>>(),
    )
}

/// Bounds a probability into `[0, 1]`.
pub fn clamp01(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Two-class softmax: `exp(a-m) / (exp(a-m) + exp(b-m))`, `m = max(a,b)` for
/// numerical stability. Returns the probability mass assigned to `a`.
pub fn two_class_softmax(a: f64, b: f64) -> f64 {
    let m = a.max(b);
    let ea = (a - m).exp();
    let eb = (b - m).exp();
    ea / (ea + eb)
}
