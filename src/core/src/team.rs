use serde::{Deserialize, Serialize};

use crate::runtime::PlayerRuntime;
use crate::types::TeamId;

/// Integer tactics dials (spec §3), all clamped to `[0, 100]` at team-state
/// construction the way the teacher's `tactics.rs` clamps `formation_strength`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tactics {
    pub contest_bias: u8,
    pub kicking_risk: u8,
    pub rotation_aggressiveness: u8,
    pub interchange_cap: u8,
}

impl Tactics {
    pub fn clamped(self) -> Self {
        Tactics {
            contest_bias: self.contest_bias.min(100),
            kicking_risk: self.kicking_risk.min(100),
            rotation_aggressiveness: self.rotation_aggressiveness.min(100),
            interchange_cap: self.interchange_cap.min(100),
        }
    }
}

impl Default for Tactics {
    fn default() -> Self {
        Tactics {
            contest_bias: 50,
            kicking_risk: 50,
            rotation_aggressiveness: 50,
            interchange_cap: 90,
        }
    }
}

/// One side's full match state (spec §3 `TeamState`): identity, tactics, the
/// on-field/bench runtime vectors, and interchanges used so far.
#[derive(Debug, Clone)]
pub struct TeamState {
    pub team_id: TeamId,
    pub name: String,
    pub tactics: Tactics,
    pub on_field: Vec<PlayerRuntime>,
    pub bench: Vec<PlayerRuntime>,
    pub interchanges_used: u32,
    /// On-field headcount at selection time. Injuries can drop the live
    /// on-field count below this; `rotation::fill_vacancies` tops it back up
    /// from the bench without touching `interchanges_used`.
    pub target_on_field: usize,
}

impl TeamState {
    pub fn new(
        team_id: TeamId,
        name: impl Into<String>,
        tactics: Tactics,
        on_field: Vec<PlayerRuntime>,
        bench: Vec<PlayerRuntime>,
    ) -> Self {
        let target_on_field = on_field.len();
        TeamState {
            team_id,
            name: name.into(),
            tactics: tactics.clamped(),
            on_field,
            bench,
            interchanges_used: 0,
            target_on_field,
        }
    }

    pub fn roster_len(&self) -> usize {
        self.on_field.len() + self.bench.len()
    }

    pub fn on_field_refs(&self) -> Vec<&PlayerRuntime> {
        self.on_field.iter().filter(|r| !r.is_out()).collect()
    }

    pub fn average_condition(&self) -> f64 {
        let all: Vec<&PlayerRuntime> = self.on_field.iter().chain(self.bench.iter()).collect();
        if all.is_empty() {
            return 100.0;
        }
        all.iter().map(|r| r.condition).sum::<f64>() / all.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tactics_clamp_to_valid_range() {
        let tactics = Tactics {
            contest_bias: 200,
            kicking_risk: 50,
            rotation_aggressiveness: 0,
            interchange_cap: 255,
        }
        .clamped();
        assert_eq!(tactics.contest_bias, 100);
        assert_eq!(tactics.interchange_cap, 100);
    }

    #[test]
    fn empty_team_has_full_average_condition() {
        let team = TeamState::new(TeamId(1), "Empty", Tactics::default(), vec![], vec![]);
        assert_eq!(team.average_condition(), 100.0);
        assert_eq!(team.roster_len(), 0);
    }
}
