//! Phase resolution functions (spec §4.7). Each function mutates `ctx.phase`,
//! `ctx.ball`, `ctx.score`, and `ctx.telemetry`, consuming RNG draws in
//! exactly one fixed order per phase, as the determinism property (spec §8)
//! requires.
//!
//! `progress_base`/`progress_scale` and `shot_base_goal`/`shot_scale_with_qual`
//! are the two formulas spec §6's tuning table names explicit knobs for, so
//! those substitute for the inline `0.5 + base/200` and `0.35 + 0.35·qual/100`
//! defaults from §4.7 (the tuning table's own stated defaults — 0.45/1÷260
//! and 0.25/0.25 — govern here; see DESIGN.md for this reconciliation).
//! Coefficients §4.7 names but §6's table does not (the 0.6 defense weight,
//! 0.7/0.15 OpenPlay thresholds, the Inside50 formula's 0.25/150, KickIn's
//! 0.55) stay as local constants since there is no corresponding `Tuning`
//! field to source them from.

use crate::context::MatchContext;
use crate::rating::{clamp01, defensive_pressure_runtime, inside50_rating_runtime, midfield_rating_runtime, two_class_softmax};
use crate::types::Phase;

const OPEN_PLAY_DEFENSE_WEIGHT: f64 = 0.6;
const OPEN_PLAY_FORWARD_FACTOR: f64 = 0.7;
const OPEN_PLAY_CONTEST_PROB: f64 = 0.15;
const INSIDE50_BASE: f64 = 0.25;
const INSIDE50_SCALE: f64 = 1.0 / 150.0;
const INSIDE50_DEFENSE_WEIGHT: f64 = 0.5;
const INSIDE50_CONTEST_PROB: f64 = 0.15;
const SHOT_BEHIND_PROB: f64 = 0.35;
const KICKIN_RETAIN_PROB: f64 = 0.55;

pub fn resolve(ctx: &mut MatchContext) {
    match ctx.phase {
        Phase::CenterBounce => resolve_clearance(ctx, true),
        Phase::Stoppage => resolve_clearance(ctx, false),
        Phase::OpenPlay => resolve_open_play(ctx),
        Phase::Inside50 => resolve_inside50(ctx),
        Phase::ShotOnGoal => resolve_shot_on_goal(ctx),
        Phase::KickIn => resolve_kick_in(ctx),
    }
}

fn resolve_clearance(ctx: &mut MatchContext, apply_hga: bool) {
    let home_refs = ctx.home.on_field_refs();
    let away_refs = ctx.away.on_field_refs();
    let mut h = midfield_rating_runtime(&home_refs) * (0.9 + 0.2 * ctx.home.tactics.contest_bias as f64 / 100.0);
    let a = midfield_rating_runtime(&away_refs) * (0.9 + 0.2 * ctx.away.tactics.contest_bias as f64 / 100.0);

    if apply_hga {
        h *= 1.0 + ctx.tuning.home_ground_advantage * ctx.ground.hga_scale as f64;
    }

    let p_home = two_class_softmax(h, a);
    let draw = ctx.rng.next_float();
    let winner = if draw < p_home { ctx.home.team_id } else { ctx.away.team_id };

    ctx.ball = crate::ball::BallState::new(winner);
    ctx.phase = Phase::OpenPlay;
}

fn resolve_open_play(ctx: &mut MatchContext) {
    let attacker_id = ctx.ball.possession_team;
    let defender_id = ctx.opponent_of(attacker_id);

    let attacker_refs = ctx.team(attacker_id).on_field_refs();
    let defender_refs = ctx.team(defender_id).on_field_refs();
    let inside50_quality = inside50_rating_runtime(&attacker_refs);
    let defense = defensive_pressure_runtime(&defender_refs);
    let weather_penalty = ctx.tuning.weather_progress_penalty.for_weather(ctx.weather);

    let base = inside50_quality - OPEN_PLAY_DEFENSE_WEIGHT * defense - weather_penalty;
    let p_forward = clamp01(ctx.tuning.progress_base + base * ctx.tuning.progress_scale);

    let draw = ctx.rng.next_float();
    if draw < OPEN_PLAY_FORWARD_FACTOR * p_forward {
        ctx.ball.inside_attacking_50 = true;
        ctx.phase = Phase::Inside50;
        ctx.telemetry.inside50_entries += 1;
    } else if draw < OPEN_PLAY_FORWARD_FACTOR * p_forward + OPEN_PLAY_CONTEST_PROB {
        ctx.phase = Phase::Stoppage;
    } else {
        ctx.ball.possession_team = defender_id;
        ctx.phase = Phase::OpenPlay;
    }
}

fn resolve_inside50(ctx: &mut MatchContext) {
    let attacker_id = ctx.ball.possession_team;
    let defender_id = ctx.opponent_of(attacker_id);

    let attacker_refs = ctx.team(attacker_id).on_field_refs();
    let defender_refs = ctx.team(defender_id).on_field_refs();
    let inside50_quality = inside50_rating_runtime(&attacker_refs);
    let defense = defensive_pressure_runtime(&defender_refs);
    let kicking_risk = ctx.team(attacker_id).tactics.kicking_risk as f64;

    let x = clamp01(INSIDE50_BASE + (inside50_quality - INSIDE50_DEFENSE_WEIGHT * defense) * INSIDE50_SCALE)
        * (0.5 + 0.5 * kicking_risk / 100.0);

    let draw = ctx.rng.next_float();
    if draw < x {
        ctx.phase = Phase::ShotOnGoal;
        ctx.telemetry.shots += 1;
    } else if draw < x + INSIDE50_CONTEST_PROB {
        ctx.phase = Phase::Stoppage;
    } else {
        ctx.ball.possession_team = defender_id;
        ctx.ball.inside_attacking_50 = false;
        ctx.phase = Phase::OpenPlay;
    }
}

fn resolve_shot_on_goal(ctx: &mut MatchContext) {
    let attacker_id = ctx.ball.possession_team;
    let defender_id = ctx.opponent_of(attacker_id);
    let attacker_refs = ctx.team(attacker_id).on_field_refs();
    let inside50_quality = inside50_rating_runtime(&attacker_refs);
    let accuracy_penalty = ctx.tuning.weather_accuracy_penalty.for_weather(ctx.weather);

    let p_goal = clamp01(
        ctx.tuning.shot_base_goal + ctx.tuning.shot_scale_with_qual * inside50_quality / 100.0 - accuracy_penalty,
    );

    let draw = ctx.rng.next_float();
    let is_home_attacker = attacker_id == ctx.home.team_id;
    if draw < p_goal {
        if is_home_attacker {
            ctx.score.add_home_goal();
        } else {
            ctx.score.add_away_goal();
        }
        ctx.telemetry.goals += 1;
        ctx.phase = Phase::CenterBounce;
    } else if draw < p_goal + SHOT_BEHIND_PROB {
        if is_home_attacker {
            ctx.score.add_home_behind();
        } else {
            ctx.score.add_away_behind();
        }
        ctx.telemetry.behinds += 1;
        ctx.ball.possession_team = defender_id;
        ctx.ball.inside_attacking_50 = false;
        ctx.phase = Phase::KickIn;
    } else {
        ctx.ball.possession_team = defender_id;
        ctx.ball.inside_attacking_50 = false;
        ctx.phase = Phase::KickIn;
    }
}

fn resolve_kick_in(ctx: &mut MatchContext) {
    let kicking_team = ctx.ball.possession_team;
    let draw = ctx.rng.next_float();
    if draw >= KICKIN_RETAIN_PROB {
        ctx.ball.possession_team = ctx.opponent_of(kicking_team);
    }
    ctx.phase = Phase::OpenPlay;
}
