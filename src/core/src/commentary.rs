//! Commentary sink (spec §4.8): a concrete [`MatchSink`] that diffs
//! consecutive snapshots to detect goals, behinds, quarter transitions,
//! injuries, and substitutions, plus ambient phase-weighted filler events.
//! Grounded on the diffing style of `league/schedule/models.rs`'s
//! `update_match_result` (compare stored vs. incoming state before acting).
//!
//! Per spec §9 Open Question #3, the sink owns whatever history it needs —
//! here just the previous tick's [`MatchSnapshot`] — driven entirely by
//! `on_tick`; the engine itself never accumulates a snapshot list.
//!
//! Ambient-event occurrence and template/actor selection are drawn from a
//! `Rng` the sink owns privately (seeded independently of the match RNG), so
//! attaching or detaching commentary never perturbs the simulated result —
//! commentary is a pure observer.

use crate::player::Player;
use crate::rng::Rng;
use crate::telemetry::{MatchSink, MatchSnapshot};
use crate::types::{Phase, RoleGroup, Weather};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Goal,
    Behind,
    QuarterTransition,
    Injury,
    Substitution,
    Mark,
    Tackle,
    Clearance,
}

fn ambient_probability(phase: Phase) -> f64 {
    match phase {
        Phase::ShotOnGoal => 0.8,
        Phase::CenterBounce => 0.5,
        Phase::Inside50 => 0.3,
        Phase::OpenPlay => 0.1,
        Phase::Stoppage | Phase::KickIn => 0.05,
    }
}

fn preferred_group_for(kind: EventKind, phase: Phase) -> Option<RoleGroup> {
    match kind {
        EventKind::Goal | EventKind::Behind => Some(RoleGroup::Forward),
        EventKind::Clearance => Some(RoleGroup::Ruck),
        EventKind::Mark if phase == Phase::Inside50 => Some(RoleGroup::Forward),
        EventKind::Tackle => Some(RoleGroup::Midfielder),
        _ => None,
    }
}

fn templates_for(kind: EventKind) -> &'static [&'static str] {
    match kind {
        EventKind::Goal => &[
            "{time} in Q{quarter}: {player} slots it through for a goal!",
            "{player} finds the big sticks — goal, {zone}.",
        ],
        EventKind::Behind => &[
            "{player} drags it wide, only a behind.",
            "{time}: {player}'s shot sneaks through for a behind.",
        ],
        EventKind::QuarterTransition => &[
            "End of quarter {quarter}.",
            "The siren sounds to end Q{quarter}.",
        ],
        EventKind::Injury => &[
            "{player} goes down awkwardly and needs attention.",
            "Concern for {player}, who is down in {zone}.",
        ],
        EventKind::Substitution => &[
            "{player} comes off for a fresh legs swap.",
            "Interchange: {player} makes way for a teammate.",
        ],
        EventKind::Mark => &[
            "Strong grab from {player} in {zone}.",
            "{player} marks it cleanly.",
        ],
        EventKind::Tackle => &[
            "{player} lays a crunching tackle.",
            "Good pressure from {player} forces the turnover.",
        ],
        EventKind::Clearance => &[
            "{player} wins the clearance at {zone}.",
            "{player} taps it cleanly out of the ruck contest.",
        ],
    }
}

fn zone_for(phase: Phase) -> &'static str {
    match phase {
        Phase::CenterBounce => "the center circle",
        Phase::Inside50 => "attacking 50",
        Phase::ShotOnGoal => "in front of goal",
        Phase::OpenPlay => "midfield",
        Phase::Stoppage => "a boundary throw-in",
        Phase::KickIn => "defensive 50",
    }
}

pub struct CommentarySink {
    home_roster: Vec<Player>,
    away_roster: Vec<Player>,
    home_name: String,
    away_name: String,
    weather: Weather,
    rng: Rng,
    previous: Option<MatchSnapshot>,
    pub events: Vec<String>,
}

impl CommentarySink {
    pub fn new(
        home_roster: Vec<Player>,
        away_roster: Vec<Player>,
        home_name: impl Into<String>,
        away_name: impl Into<String>,
        weather: Weather,
        commentary_seed: u64,
    ) -> Self {
        CommentarySink {
            home_roster,
            away_roster,
            home_name: home_name.into(),
            away_name: away_name.into(),
            weather,
            rng: Rng::new(commentary_seed),
            previous: None,
            events: Vec::new(),
        }
    }

    fn pick_actor(&mut self, home_side: bool, preferred: Option<RoleGroup>) -> Option<String> {
        let roster = if home_side { &self.home_roster } else { &self.away_roster };
        if roster.is_empty() {
            return None;
        }
        let pool: Vec<&Player> = match preferred {
            Some(group) => {
                let filtered: Vec<&Player> = roster.iter().filter(|p| p.role.group() == group).collect();
                if filtered.is_empty() { roster.iter().collect() } else { filtered }
            }
            None => roster.iter().collect(),
        };
        let idx = self.rng.next_int(0, pool.len() as i64) as usize;
        Some(pool[idx].name.clone())
    }

    fn render(&mut self, kind: EventKind, home_side: bool, phase: Phase, quarter: u8, time_remaining: u32) {
        let preferred = preferred_group_for(kind, phase);
        let actor = self.pick_actor(home_side, preferred).unwrap_or_else(|| {
            if home_side { self.home_name.clone() } else { self.away_name.clone() }
        });
        let templates = templates_for(kind);
        let template_idx = self.rng.next_int(0, templates.len() as i64) as usize;
        let mut text = templates[template_idx]
            .replace("{player}", &actor)
            .replace("{zone}", zone_for(phase))
            .replace("{quarter}", &quarter.to_string())
            .replace("{time}", &format!("{}s left", time_remaining));

        let gets_weather_suffix = matches!(kind, EventKind::Goal | EventKind::Mark | EventKind::Clearance)
            && self.weather != Weather::Clear
            && self.rng.next_float() < 0.3;
        if gets_weather_suffix {
            text.push_str(match self.weather {
                Weather::Windy => " despite the swirling wind",
                Weather::LightRain => " on a slick, rain-affected surface",
                Weather::HeavyRain => " through driving rain",
                Weather::Clear => "",
            });
        }
        self.events.push(text);
    }

    fn diff(&mut self, snapshot: &MatchSnapshot) {
        let Some(prev) = self.previous else {
            return;
        };

        if snapshot.score.home_goals > prev.score.home_goals {
            self.render(EventKind::Goal, true, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.score.away_goals > prev.score.away_goals {
            self.render(EventKind::Goal, false, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.score.home_behinds > prev.score.home_behinds {
            self.render(EventKind::Behind, true, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.score.away_behinds > prev.score.away_behinds {
            self.render(EventKind::Behind, false, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.quarter != prev.quarter {
            self.render(EventKind::QuarterTransition, true, snapshot.phase, prev.quarter, 0);
        }
        if snapshot.home_injury_events > prev.home_injury_events {
            self.render(EventKind::Injury, true, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.away_injury_events > prev.away_injury_events {
            self.render(EventKind::Injury, false, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.home_interchanges > prev.home_interchanges {
            self.render(EventKind::Substitution, true, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
        if snapshot.away_interchanges > prev.away_interchanges {
            self.render(EventKind::Substitution, false, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
        }
    }

    fn maybe_ambient(&mut self, snapshot: &MatchSnapshot) {
        let probability = ambient_probability(snapshot.phase);
        if self.rng.next_float() >= probability {
            return;
        }
        let kind = match snapshot.phase {
            Phase::CenterBounce | Phase::Stoppage => EventKind::Clearance,
            Phase::Inside50 | Phase::ShotOnGoal => EventKind::Mark,
            Phase::OpenPlay | Phase::KickIn => EventKind::Tackle,
        };
        let home_side = self.rng.next_float() < 0.5;
        self.render(kind, home_side, snapshot.phase, snapshot.quarter, snapshot.time_remaining);
    }
}

impl MatchSink for CommentarySink {
    fn on_tick(&mut self, snapshot: &MatchSnapshot) {
        self.diff(snapshot);
        self.maybe_ambient(snapshot);
        self.previous = Some(*snapshot);
    }

    fn on_complete(&mut self, final_snapshot: &MatchSnapshot) {
        self.diff(final_snapshot);
        self.events.push(format!(
            "Full time: {} {} defeats {} {}",
            self.home_name, final_snapshot.score.home_points(), self.away_name, final_snapshot.score.away_points()
        ));
    }
}
