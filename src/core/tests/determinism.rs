//! End-to-end scenario 1 (spec §8): identical seed and inputs produce a
//! byte-identical `MatchResult` and commentary stream across runs.

use afl_sim_core::commentary::CommentarySink;
use afl_sim_core::engine::play_match;
use afl_sim_core::player::{Mental, Physical, Player, Skill};
use afl_sim_core::team::Tactics;
use afl_sim_core::tuning::tuning_default;
use afl_sim_core::types::{Ground, PlayerId, Role, TeamId, Weather};

fn uniform_roster(team: u32, value: u8) -> Vec<Player> {
    (0..22)
        .map(|i| Player {
            id: PlayerId(team * 100 + i),
            name: format!("Team {team} Player {i}"),
            age: 24,
            role: match i % 4 {
                0 => Role::KeyDefender,
                1 => Role::Wing,
                2 => Role::KeyForward,
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
        })
        .collect()
}

#[test]
fn same_seed_yields_identical_result_and_commentary() {
    let home = uniform_roster(1, 70);
    let away = uniform_roster(2, 70);
    let tuning = tuning_default();

    let run = || {
        let mut sink = CommentarySink::new(home.clone(), away.clone(), "Home", "Away", Weather::Clear, 42);
        let result = play_match(
            1,
            TeamId(1),
            TeamId(2),
            "Home",
            "Away",
            &home,
            &away,
            Tactics::default(),
            Tactics::default(),
            Weather::Clear,
            Ground::default(),
            42,
            &tuning,
            Some(&mut sink),
        )
        .unwrap();
        (result, sink.events)
    };

    let (result_a, events_a) = run();
    let (result_b, events_b) = run();

    assert_eq!(result_a.score, result_b.score);
    assert_eq!(result_a.total_ticks, 960);
    assert_eq!(result_a.total_ticks, result_b.total_ticks);
    assert_eq!(result_a.home_interchanges, result_b.home_interchanges);
    assert_eq!(result_a.away_interchanges, result_b.away_interchanges);
    assert_eq!(result_a.home_injury_events, result_b.home_injury_events);
    assert_eq!(events_a.len(), events_b.len());
    assert_eq!(events_a, events_b);
}
