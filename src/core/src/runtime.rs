use crate::player::Player;
use crate::types::{PlayerId, TeamId};

/// Per-match mutable state paired with a static [`Player`] (spec §3
/// `PlayerRuntime`). Owned by the match context; created at match start from
/// the selected 22 + bench and dropped when `play_match` returns.
#[derive(Debug, Clone)]
pub struct PlayerRuntime {
    pub player: Player,
    pub team_id: TeamId,
    pub on_field: bool,
    pub seconds_played: u32,
    pub seconds_since_rotation: u32,
    pub condition: f64,
    pub injured_out: bool,
    /// Seconds remaining before a temporarily-off player can be rotated back
    /// on. Zero once the countdown elapses or the player was never injured.
    pub return_in_seconds: u32,
    pub fatigue_mult: f64,
    pub injury_mult: f64,
}

impl PlayerRuntime {
    pub fn new(player: Player, team_id: TeamId, on_field: bool) -> Self {
        PlayerRuntime {
            player,
            team_id,
            on_field,
            seconds_played: 0,
            seconds_since_rotation: 0,
            condition: 100.0,
            injured_out: false,
            return_in_seconds: 0,
            fatigue_mult: 1.0,
            injury_mult: 1.0,
        }
    }

    /// True once a player is fully unavailable for the rest of the match
    /// (moderate/major/severe injury, or concussion — spec §4.5).
    pub fn is_out(&self) -> bool {
        self.injured_out
    }

    /// True while a niggle/minor injury countdown is still running; such a
    /// player is off-field but may return once `return_in_seconds` elapses.
    pub fn is_temporarily_off(&self) -> bool {
        !self.injured_out && self.return_in_seconds > 0
    }

    pub fn player_id(&self) -> PlayerId {
        self.player.id
    }
}
