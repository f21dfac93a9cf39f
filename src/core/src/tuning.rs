use serde::{Deserialize, Serialize};

use crate::types::Weather;

/// Per-phase injury multiplier table (spec §6). Indexed via [`Tuning::injury_phase_mult`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhaseMult {
    pub center_bounce: f64,
    pub stoppage: f64,
    pub open_play: f64,
    pub inside50: f64,
    pub shot_on_goal: f64,
    pub kick_in: f64,
}

/// Per-weather penalty table shared by `weather_progress_penalty` and
/// `weather_accuracy_penalty` (spec §6).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherPenalty {
    pub clear: f64,
    pub windy: f64,
    pub light_rain: f64,
    pub heavy_rain: f64,
}

impl WeatherPenalty {
    pub fn for_weather(&self, weather: Weather) -> f64 {
        match weather {
            Weather::Clear => self.clear,
            Weather::Windy => self.windy,
            Weather::LightRain => self.light_rain,
            Weather::HeavyRain => self.heavy_rain,
        }
    }
}

/// Named numeric parameters passed into the engine (spec §6). All fields are
/// clamped into their documented valid range by [`tuning_from_config`];
/// `tuning_default()` already satisfies every clamp so it round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub injury_base_per_minute_risk: f64,
    pub injury_phase_mult: PhaseMult,
    pub injury_fatigue_scale: f64,
    pub injury_durability_scale: f64,
    pub injury_max_per_team: u32,
    pub weather_progress_penalty: WeatherPenalty,
    pub weather_accuracy_penalty: WeatherPenalty,
    pub progress_base: f64,
    pub progress_scale: f64,
    pub shot_base_goal: f64,
    pub shot_scale_with_qual: f64,
    pub tick_seconds: u32,
    pub quarter_seconds: u32,
    pub home_ground_advantage: f64,
}

pub fn tuning_default() -> Tuning {
    Tuning {
        injury_base_per_minute_risk: 6e-4,
        injury_phase_mult: PhaseMult {
            center_bounce: 1.10,
            stoppage: 0.80,
            open_play: 1.00,
            inside50: 1.15,
            shot_on_goal: 0.70,
            kick_in: 0.60,
        },
        injury_fatigue_scale: 0.6,
        injury_durability_scale: 0.5,
        injury_max_per_team: 2,
        weather_progress_penalty: WeatherPenalty {
            clear: 0.0,
            windy: 10.0,
            light_rain: 20.0,
            heavy_rain: 35.0,
        },
        weather_accuracy_penalty: WeatherPenalty {
            clear: 0.0,
            windy: 0.12,
            light_rain: 0.20,
            heavy_rain: 0.35,
        },
        progress_base: 0.45,
        progress_scale: 1.0 / 260.0,
        shot_base_goal: 0.25,
        shot_scale_with_qual: 0.25,
        tick_seconds: 5,
        quarter_seconds: 1200,
        home_ground_advantage: 0.03,
    }
}

fn clamp_field(name: &str, value: f64, lo: f64, hi: f64) -> f64 {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        log::warn!("tuning: clamped {name} from {value} to {clamped}");
    }
    clamped
}

/// Validates and clamps a host-supplied `Tuning` into documented ranges,
/// mirroring the teacher's `formation_strength: strength.clamp(0.0, 1.0)`
/// load-time clamping idiom. Never fails — out-of-range tuning is
/// `ClampedInput` (spec §7), not `InvalidInput`.
pub fn tuning_from_config(mut config: Tuning) -> Tuning {
    config.injury_base_per_minute_risk =
        clamp_field("injury_base_per_minute_risk", config.injury_base_per_minute_risk, 0.0, 0.1);
    config.injury_fatigue_scale = clamp_field("injury_fatigue_scale", config.injury_fatigue_scale, 0.0, 5.0);
    config.injury_durability_scale =
        clamp_field("injury_durability_scale", config.injury_durability_scale, 0.0, 5.0);
    config.injury_max_per_team = config.injury_max_per_team.min(22);
    config.progress_base = clamp_field("progress_base", config.progress_base, 0.0, 1.0);
    config.progress_scale = clamp_field("progress_scale", config.progress_scale, 0.0, 1.0);
    config.shot_base_goal = clamp_field("shot_base_goal", config.shot_base_goal, 0.0, 1.0);
    config.shot_scale_with_qual =
        clamp_field("shot_scale_with_qual", config.shot_scale_with_qual, 0.0, 1.0);
    config.home_ground_advantage =
        clamp_field("home_ground_advantage", config.home_ground_advantage, 0.0, 0.5);

    if config.tick_seconds == 0 {
        log::warn!("tuning: clamped tick_seconds from 0 to 1");
        config.tick_seconds = 1;
    }
    if config.quarter_seconds < config.tick_seconds {
        log::warn!(
            "tuning: clamped quarter_seconds from {} to {}",
            config.quarter_seconds,
            config.tick_seconds
        );
        config.quarter_seconds = config.tick_seconds;
    }

    config
}
