use crate::ball::BallState;
use crate::rng::Rng;
use crate::team::TeamState;
use crate::telemetry::Telemetry;
use crate::tuning::Tuning;
use crate::types::{Ground, Phase, Score, Weather};

/// Owns everything a single match needs (spec §3 `MatchContext`). Lifetime is
/// exactly one `play_match` call; nothing here outlives the match.
pub struct MatchContext {
    pub home: TeamState,
    pub away: TeamState,
    pub ball: BallState,
    pub score: Score,
    pub phase: Phase,
    pub quarter: u8,
    pub time_remaining: u32,
    pub weather: Weather,
    pub ground: Ground,
    pub rng: Rng,
    pub tuning: Tuning,
    pub telemetry: Telemetry,
}

impl MatchContext {
    pub fn new(
        home: TeamState,
        away: TeamState,
        weather: Weather,
        ground: Ground,
        rng: Rng,
        tuning: Tuning,
    ) -> Self {
        let home_id = home.team_id;
        MatchContext {
            home,
            away,
            ball: BallState::new(home_id),
            score: Score::default(),
            phase: Phase::CenterBounce,
            quarter: 1,
            time_remaining: tuning.quarter_seconds,
            weather,
            ground,
            rng,
            tuning,
            telemetry: Telemetry::default(),
        }
    }

    pub fn team_mut(&mut self, team_id: crate::types::TeamId) -> &mut TeamState {
        if self.home.team_id == team_id {
            &mut self.home
        } else {
            &mut self.away
        }
    }

    pub fn team(&self, team_id: crate::types::TeamId) -> &TeamState {
        if self.home.team_id == team_id {
            &self.home
        } else {
            &self.away
        }
    }

    pub fn opponent_of(&self, team_id: crate::types::TeamId) -> crate::types::TeamId {
        if self.home.team_id == team_id {
            self.away.team_id
        } else {
            self.home.team_id
        }
    }
}
