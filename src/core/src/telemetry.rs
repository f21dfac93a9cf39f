//! Telemetry accumulator and sink trait (spec §4.8). The sink trait is the
//! re-architected replacement for the teacher's inheritance-flavored
//! `EventDispatcher::dispatch` (spec §9 "event callbacks on manager objects"
//! redesign flag): the engine holds a borrowed `&mut dyn MatchSink`, never an
//! owned callback list, so there is no cyclic reference between engine and
//! observer.

use crate::types::{Phase, Score, TeamId};

/// Running counters owned by the match context for the whole match (spec §3
/// `Telemetry`). Never serialized mid-match; only read at tick/complete time
/// to build a [`MatchSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    pub home_interchanges: u32,
    pub away_interchanges: u32,
    pub home_injury_events: u32,
    pub away_injury_events: u32,
    pub inside50_entries: u32,
    pub shots: u32,
    pub goals: u32,
    pub behinds: u32,
    pub ticks: u32,
}

/// One point-in-time view handed to a [`MatchSink`]. Cheap to construct —
/// the engine builds one per tick from state it already owns.
#[derive(Debug, Clone, Copy)]
pub struct MatchSnapshot {
    pub quarter: u8,
    pub time_remaining: u32,
    pub phase: Phase,
    pub score: Score,
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub home_interchanges: u32,
    pub away_interchanges: u32,
    pub home_injury_events: u32,
    pub away_injury_events: u32,
    pub home_avg_condition: f64,
    pub away_avg_condition: f64,
}

/// Abstract telemetry/commentary consumer (spec §4.8). The engine never owns
/// a sink, only borrows one for the duration of `play_match`.
pub trait MatchSink {
    fn on_tick(&mut self, snapshot: &MatchSnapshot);
    fn on_complete(&mut self, final_snapshot: &MatchSnapshot);
}

/// A sink that does nothing; used when a host doesn't want telemetry for a
/// given match (e.g. a statistical sweep over thousands of seeds).
pub struct NullSink;

impl MatchSink for NullSink {
    fn on_tick(&mut self, _snapshot: &MatchSnapshot) {}
    fn on_complete(&mut self, _snapshot: &MatchSnapshot) {}
}
