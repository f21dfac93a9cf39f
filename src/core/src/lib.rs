//! Headless, deterministic AFL match simulation core (spec §1-§2).
//!
//! The crate's single entry point for simulating a match is
//! [`engine::play_match`]; [`schedule::build_round_robin`] and
//! [`ladder::build_ladder`] are the season-level collaborators named in spec
//! §6. Everything else — scene managers, UI, persistence, training/career
//! meta-systems — is a host concern and lives outside this crate entirely.

pub mod ball;
pub mod commentary;
pub mod context;
pub mod engine;
pub mod error;
pub mod fatigue;
pub mod injury;
pub mod ladder;
pub mod player;
pub mod rating;
pub mod rng;
pub mod rotation;
pub mod runtime;
pub mod schedule;
pub mod selector;
pub mod team;
pub mod telemetry;
pub mod tuning;
pub mod types;

pub use engine::{play_match, MatchResult, PlayerMatchStats};
pub use error::{EngineError, EngineResult};
pub use ladder::{build_ladder, LadderRow};
pub use schedule::{build_round_robin, Fixture, Schedule};
pub use tuning::{tuning_default, tuning_from_config, Tuning};
