use core::commentary::CommentarySink;
use core::engine::{play_match, MatchResult};
use core::ladder::build_ladder;
use core::player::{Mental, Physical, Player, Skill};
use core::schedule::build_round_robin;
use core::team::Tactics;
use core::tuning::tuning_default;
use core::types::{Ground, PlayerId, Role, TeamId, Weather};
use env_logger::Env;
use log::info;
use rayon::prelude::*;

const TEAM_COUNT: u32 = 8;
const ROSTER_SIZE: u32 = 26;

fn roster_for(team: u32) -> Vec<Player> {
    (0..ROSTER_SIZE)
        .map(|i| {
            let value = 55 + ((team * 7 + i * 3) % 35) as u8;
            Player {
                id: PlayerId(team * 1000 + i),
                name: format!("Team {team} Player {i}"),
                age: 20 + (i % 15) as u8,
                role: match i % 9 {
                    0 | 1 => Role::KeyDefender,
                    2 => Role::SmallDefender,
                    3 => Role::Wing,
                    4 => Role::Center,
                    5 => Role::RuckRover,
                    6 => Role::Rover,
                    7 => Role::KeyForward,
                    _ => Role::Ruck,
                },
                physical: Physical {
                    speed: value,
                    acceleration: value,
                    strength: value,
                    agility: value,
                    jump: value,
                },
                skill: Skill {
                    kicking: value,
                    marking: value,
                    handball: value,
                    tackling: value,
                    clearance: value,
                    ruck_work: value,
                    spoiling: value,
                },
                mental: Mental {
                    decision_making: value,
                    composure: value,
                    work_rate: value,
                    positioning: value,
                    leadership: value,
                },
                durability: value,
            }
        })
        .collect()
}

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let rosters: Vec<Vec<Player>> = (1..=TEAM_COUNT).map(roster_for).collect();
    let schedule = build_round_robin(&(1..=TEAM_COUNT).map(TeamId).collect::<Vec<_>>(), true);
    info!(
        "season schedule: {} fixtures across {} rounds, {} byes",
        schedule.fixtures.len(),
        schedule.fixtures.iter().map(|f| f.round).max().map(|r| r + 1).unwrap_or(0),
        schedule.byes.len()
    );

    let tuning = tuning_default();
    let results: Vec<MatchResult> = schedule
        .fixtures
        .par_iter()
        .map(|fixture| {
            let home_roster = &rosters[(fixture.home.0 - 1) as usize];
            let away_roster = &rosters[(fixture.away.0 - 1) as usize];
            let seed = (fixture.round as u64) << 32 | (fixture.home.0 as u64) << 16 | fixture.away.0 as u64;
            play_match(
                fixture.round,
                fixture.home,
                fixture.away,
                &format!("Team {}", fixture.home.0),
                &format!("Team {}", fixture.away.0),
                home_roster,
                away_roster,
                Tactics::default(),
                Tactics::default(),
                Weather::Clear,
                Ground::default(),
                seed,
                &tuning,
                None,
            )
            .expect("fixtures always carry distinct, valid team ids")
        })
        .collect();

    info!("simulated {} matches", results.len());

    let ladder = build_ladder(&results);
    info!("final ladder:");
    for (rank, row) in ladder.iter().enumerate() {
        info!(
            "{:>2}. Team {:<3} pts={:<3} {:>2}-{:>2}-{:>2} pct={:>6.1} diff={:+}",
            rank + 1,
            row.team_id.0,
            row.competition_points,
            row.wins,
            row.draws,
            row.losses,
            row.percentage(),
            row.points_diff,
        );
    }

    info!("re-running round 1's first fixture with commentary attached:");
    if let Some(fixture) = schedule.fixtures.first() {
        let home_roster = rosters[(fixture.home.0 - 1) as usize].clone();
        let away_roster = rosters[(fixture.away.0 - 1) as usize].clone();
        let mut sink = CommentarySink::new(
            home_roster.clone(),
            away_roster.clone(),
            format!("Team {}", fixture.home.0),
            format!("Team {}", fixture.away.0),
            Weather::LightRain,
            99,
        );
        let result = play_match(
            fixture.round,
            fixture.home,
            fixture.away,
            &format!("Team {}", fixture.home.0),
            &format!("Team {}", fixture.away.0),
            &home_roster,
            &away_roster,
            Tactics::default(),
            Tactics::default(),
            Weather::LightRain,
            Ground::default(),
            99,
            &tuning,
            Some(&mut sink),
        )
        .expect("fixtures always carry distinct, valid team ids");

        info!(
            "final score: Team {} {} - {} Team {}",
            fixture.home.0,
            result.score.home_points(),
            result.score.away_points(),
            fixture.away.0
        );
        for event in sink.events.iter().take(20) {
            info!("  {event}");
        }
    }
}
