use serde::{Deserialize, Serialize};

/// Opaque team identifier. Newtype over `u32` so a `TeamId` can never be
/// passed where a `PlayerId` is expected by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

/// Opaque player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

/// Coarse on-field role group, used by the auto-selector's bucketing pass
/// and by rating functions that weight contributions differently per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleGroup {
    Defender,
    Midfielder,
    Forward,
    Ruck,
}

/// Abstract player position with AFL-flavoured sub-roles (spec GLOSSARY: Role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    KeyDefender,
    SmallDefender,
    Wing,
    Center,
    RuckRover,
    Rover,
    KeyForward,
    SmallForward,
    Ruck,
}

impl Role {
    pub fn group(&self) -> RoleGroup {
        match self {
            Role::KeyDefender | Role::SmallDefender => RoleGroup::Defender,
            Role::Wing | Role::Center | Role::RuckRover | Role::Rover => RoleGroup::Midfielder,
            Role::KeyForward | Role::SmallForward => RoleGroup::Forward,
            Role::Ruck => RoleGroup::Ruck,
        }
    }
}

/// Weather at the ground. Affects open-play progress and shot accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    Clear,
    Windy,
    LightRain,
    HeavyRain,
}

/// Current kind of play; drives which phase-resolution function runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    CenterBounce,
    Stoppage,
    OpenPlay,
    Inside50,
    ShotOnGoal,
    KickIn,
}

/// Four-integer score: goals and behinds for each side.
/// `home_points = home_goals * 6 + home_behinds` (likewise away).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home_goals: u16,
    pub home_behinds: u16,
    pub away_goals: u16,
    pub away_behinds: u16,
}

impl Score {
    pub fn home_points(&self) -> u32 {
        self.home_goals as u32 * 6 + self.home_behinds as u32
    }

    pub fn away_points(&self) -> u32 {
        self.away_goals as u32 * 6 + self.away_behinds as u32
    }

    pub fn add_home_goal(&mut self) {
        self.home_goals += 1;
    }

    pub fn add_home_behind(&mut self) {
        self.home_behinds += 1;
    }

    pub fn add_away_goal(&mut self) {
        self.away_goals += 1;
    }

    pub fn add_away_behind(&mut self) {
        self.away_behinds += 1;
    }
}

/// Ground identity. `hga_scale` multiplies the 3% center-bounce home-ground
/// advantage (spec §4.7); clamped at load so a single ground can't dominate it.
#[derive(Debug, Clone)]
pub struct Ground {
    pub name: String,
    pub hga_scale: f32,
}

impl Ground {
    pub fn new(name: impl Into<String>, hga_scale: f32) -> Self {
        Ground {
            name: name.into(),
            hga_scale: hga_scale.clamp(0.0, 3.0),
        }
    }
}

impl Default for Ground {
    fn default() -> Self {
        Ground {
            name: "Neutral Venue".to_string(),
            hga_scale: 1.0,
        }
    }
}
