//! The match state machine (spec §4.7, the core). Re-architected away from
//! the teacher's continuous physics tick (`nalgebra::Vector3` positions,
//! steering behaviors, per-player state machines) toward the spec's coarse
//! six-phase probabilistic state machine — the teacher's *control-flow*
//! shape survives: `FootballEngine::play`'s "build context → tick loop →
//! phase transitions → result" becomes `play_match`'s "build `MatchContext`
//! → quarter loop → tick loop → `MatchResult`".

mod phase;

use serde::{Deserialize, Serialize};

use crate::ball::BallState;
use crate::context::MatchContext;
use crate::error::{EngineError, EngineResult};
use crate::fatigue;
use crate::injury;
use crate::player::Player;
use crate::rng::Rng;
use crate::rotation;
use crate::runtime::PlayerRuntime;
use crate::selector;
use crate::team::{Tactics, TeamState};
use crate::telemetry::{MatchSink, MatchSnapshot, NullSink};
use crate::tuning::Tuning;
use crate::types::{Ground, PlayerId, Score, TeamId, Weather};

/// Per-player in-match stat line (SPEC_FULL supplement #2), aggregated purely
/// from state the engine already owns — not a new subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMatchStats {
    pub player_id: PlayerId,
    pub seconds_played: u32,
    pub touches_estimate: u32,
    pub condition_end: f64,
}

/// The complete record of one simulated match (spec §6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub round: u32,
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub score: Score,
    pub total_ticks: u32,
    pub inside50_entries: u32,
    pub shots: u32,
    pub goals: u32,
    pub behinds: u32,
    pub home_interchanges: u32,
    pub away_interchanges: u32,
    pub home_injury_events: u32,
    pub away_injury_events: u32,
    pub home_avg_condition_end: f64,
    pub away_avg_condition_end: f64,
    pub player_stats: Vec<PlayerMatchStats>,
}

fn build_team_state(team_id: TeamId, name: &str, tactics: Tactics, roster: &[Player]) -> TeamState {
    let selection = selector::select_squad(roster);
    let by_id = |id: PlayerId| roster.iter().find(|p| p.id == id).cloned().expect("selector only returns rostered ids");

    let on_field: Vec<PlayerRuntime> = selection
        .on_field
        .iter()
        .map(|id| PlayerRuntime::new(by_id(*id), team_id, true))
        .collect();
    let bench: Vec<PlayerRuntime> = selection
        .bench
        .iter()
        .map(|id| PlayerRuntime::new(by_id(*id), team_id, false))
        .collect();

    TeamState::new(team_id, name, tactics, on_field, bench)
}

fn snapshot(ctx: &MatchContext) -> MatchSnapshot {
    MatchSnapshot {
        quarter: ctx.quarter,
        time_remaining: ctx.time_remaining,
        phase: ctx.phase,
        score: ctx.score,
        home_id: ctx.home.team_id,
        away_id: ctx.away.team_id,
        home_interchanges: ctx.home.interchanges_used,
        away_interchanges: ctx.away.interchanges_used,
        home_injury_events: ctx.telemetry.home_injury_events,
        away_injury_events: ctx.telemetry.away_injury_events,
        home_avg_condition: ctx.home.average_condition(),
        away_avg_condition: ctx.away.average_condition(),
    }
}

fn tick(ctx: &mut MatchContext, sink: &mut dyn MatchSink) {
    let tick_seconds = ctx.tuning.tick_seconds;
    let phase = ctx.phase;
    let weather = ctx.weather;

    fatigue::apply_fatigue(&mut ctx.home, phase, tick_seconds);
    fatigue::apply_fatigue(&mut ctx.away, phase, tick_seconds);

    if rotation::attempt_rotation(&mut ctx.home) {
        ctx.telemetry.home_interchanges += 1;
    }
    if rotation::attempt_rotation(&mut ctx.away) {
        ctx.telemetry.away_interchanges += 1;
    }

    let home_events = injury::apply_injury_model(
        &mut ctx.home,
        phase,
        weather,
        tick_seconds,
        &ctx.tuning,
        &mut ctx.rng,
        ctx.telemetry.home_injury_events,
    );
    ctx.telemetry.home_injury_events += home_events.len() as u32;
    let away_events = injury::apply_injury_model(
        &mut ctx.away,
        phase,
        weather,
        tick_seconds,
        &ctx.tuning,
        &mut ctx.rng,
        ctx.telemetry.away_injury_events,
    );
    ctx.telemetry.away_injury_events += away_events.len() as u32;

    rotation::tick_injury_countdowns(&mut ctx.home, tick_seconds);
    rotation::tick_injury_countdowns(&mut ctx.away, tick_seconds);
    rotation::fill_vacancies(&mut ctx.home);
    rotation::fill_vacancies(&mut ctx.away);

    phase::resolve(ctx);

    ctx.time_remaining = ctx.time_remaining.saturating_sub(tick_seconds);
    ctx.telemetry.ticks += 1;

    let snap = snapshot(ctx);
    sink.on_tick(&snap);
}

fn collect_player_stats(team: &TeamState) -> Vec<PlayerMatchStats> {
    team.on_field
        .iter()
        .chain(team.bench.iter())
        .map(|r| PlayerMatchStats {
            player_id: r.player_id(),
            seconds_played: r.seconds_played,
            touches_estimate: ((r.seconds_played as f64 / 60.0) * (0.2 + 0.01 * r.player.mental.work_rate as f64))
                .round() as u32,
            condition_end: r.condition,
        })
        .collect()
}

/// Simulates one match to completion (spec §6). Never fails for valid
/// inputs — `InvalidInput` is reserved for structurally broken parameters
/// caught before any tick runs (spec §7).
#[allow(clippy::too_many_arguments)]
pub fn play_match(
    round: u32,
    home_id: TeamId,
    away_id: TeamId,
    home_name: &str,
    away_name: &str,
    home_roster: &[Player],
    away_roster: &[Player],
    home_tactics: Tactics,
    away_tactics: Tactics,
    weather: Weather,
    ground: Ground,
    seed: u64,
    tuning: &Tuning,
    sink: Option<&mut dyn MatchSink>,
) -> EngineResult<MatchResult> {
    if home_id == away_id {
        return Err(EngineError::InvalidInput(format!(
            "home_id and away_id must differ, both were {home_id:?}"
        )));
    }
    if tuning.quarter_seconds == 0 {
        return Err(EngineError::InvalidInput("quarter_seconds must be positive".to_string()));
    }
    if tuning.tick_seconds == 0 {
        return Err(EngineError::InvalidInput("tick_seconds must be positive".to_string()));
    }
    if tuning.tick_seconds > tuning.quarter_seconds {
        return Err(EngineError::InvalidInput(
            "tick_seconds must not exceed quarter_seconds".to_string(),
        ));
    }

    let home = build_team_state(home_id, home_name, home_tactics, home_roster);
    let away = build_team_state(away_id, away_name, away_tactics, away_roster);
    let mut ctx = MatchContext::new(home, away, weather, ground, Rng::new(seed), tuning.clone());
    ctx.ball = BallState::new(home_id);

    let mut null_sink = NullSink;
    let sink: &mut dyn MatchSink = sink.unwrap_or(&mut null_sink);

    for quarter in 1..=4u8 {
        ctx.quarter = quarter;
        ctx.time_remaining = ctx.tuning.quarter_seconds;
        ctx.phase = crate::types::Phase::CenterBounce;

        while ctx.time_remaining > 0 {
            tick(&mut ctx, sink);
        }
    }

    let final_snapshot = snapshot(&ctx);
    sink.on_complete(&final_snapshot);

    let mut player_stats = collect_player_stats(&ctx.home);
    player_stats.extend(collect_player_stats(&ctx.away));

    Ok(MatchResult {
        round,
        home_id,
        away_id,
        score: ctx.score,
        total_ticks: ctx.telemetry.ticks,
        inside50_entries: ctx.telemetry.inside50_entries,
        shots: ctx.telemetry.shots,
        goals: ctx.telemetry.goals,
        behinds: ctx.telemetry.behinds,
        home_interchanges: ctx.telemetry.home_interchanges,
        away_interchanges: ctx.telemetry.away_interchanges,
        home_injury_events: ctx.telemetry.home_injury_events,
        away_injury_events: ctx.telemetry.away_injury_events,
        home_avg_condition_end: ctx.home.average_condition(),
        away_avg_condition_end: ctx.away.average_condition(),
        player_stats,
    })
}
