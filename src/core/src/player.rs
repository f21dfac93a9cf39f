use serde::{Deserialize, Serialize};

use crate::types::{PlayerId, Role};

/// Physical attribute group, all integers in `[1, 99]` (spec §3).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Physical {
    pub speed: u8,
    pub acceleration: u8,
    pub strength: u8,
    pub agility: u8,
    pub jump: u8,
}

/// Skill attribute group, all integers in `[1, 99]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Skill {
    pub kicking: u8,
    pub marking: u8,
    pub handball: u8,
    pub tackling: u8,
    pub clearance: u8,
    pub ruck_work: u8,
    pub spoiling: u8,
}

/// Mental attribute group, all integers in `[1, 99]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mental {
    pub decision_making: u8,
    pub composure: u8,
    pub work_rate: u8,
    pub positioning: u8,
    pub leadership: u8,
}

/// The one canonical player value type at the core boundary (spec §9
/// "heterogeneous roster types" redesign flag — no UI/core converters here,
/// since this crate has no UI layer at all). Hosts convert into this shape
/// before calling `play_match`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: u8,
    pub role: Role,
    pub physical: Physical,
    pub skill: Skill,
    pub mental: Mental,
    /// `[1, 99]`, governs injury susceptibility (higher = tougher).
    pub durability: u8,
}

impl Player {
    /// A coarse overall rating used by the auto-selector's greedy fill —
    /// not one of the three match-rating functions in `rating.rs`.
    pub fn overall_rating(&self) -> f64 {
        let physical = (self.physical.speed as f64
            + self.physical.acceleration as f64
            + self.physical.strength as f64
            + self.physical.agility as f64
            + self.physical.jump as f64)
            / 5.0;
        let skill = (self.skill.kicking as f64
            + self.skill.marking as f64
            + self.skill.handball as f64
            + self.skill.tackling as f64
            + self.skill.clearance as f64
            + self.skill.ruck_work as f64
            + self.skill.spoiling as f64)
            / 7.0;
        let mental = (self.mental.decision_making as f64
            + self.mental.composure as f64
            + self.mental.work_rate as f64
            + self.mental.positioning as f64
            + self.mental.leadership as f64)
            / 5.0;
        0.35 * physical + 0.45 * skill + 0.20 * mental
    }
}
