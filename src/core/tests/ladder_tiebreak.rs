//! End-to-end scenario 6 (spec §8): a three-way win cycle (A beats B,
//! B beats C, C beats A, all by the same margin) leaves all three teams on
//! equal competition points, broken by percentage descending then team id
//! ascending.

use afl_sim_core::build_ladder;
use afl_sim_core::engine::MatchResult;
use afl_sim_core::types::{Score, TeamId};

fn result(round: u32, home: u32, away: u32, home_goals: u16, away_goals: u16) -> MatchResult {
    MatchResult {
        round,
        home_id: TeamId(home),
        away_id: TeamId(away),
        score: Score {
            home_goals,
            home_behinds: 0,
            away_goals,
            away_behinds: 0,
        },
        total_ticks: 960,
        inside50_entries: 0,
        shots: 0,
        goals: 0,
        behinds: 0,
        home_interchanges: 0,
        away_interchanges: 0,
        home_injury_events: 0,
        away_injury_events: 0,
        home_avg_condition_end: 100.0,
        away_avg_condition_end: 100.0,
        player_stats: Vec::new(),
    }
}

#[test]
fn three_way_win_cycle_is_ordered_by_percentage_then_team_id() {
    // A(1) beats B(2) by 10, B(2) beats C(3) by 10, C(3) beats A(1) by 10.
    let results = vec![
        result(1, 1, 2, 11, 1),
        result(2, 2, 3, 11, 1),
        result(3, 3, 1, 11, 1),
    ];

    let ladder = build_ladder(&results);
    assert_eq!(ladder.len(), 3);

    for row in &ladder {
        assert_eq!(row.competition_points, 4);
        assert_eq!(row.wins, 1);
        assert_eq!(row.losses, 1);
    }

    // Every team scored 11 for, conceded once as winner (1) and once as
    // loser (11): percentage is identical for all three, so the final
    // tie-break is team id ascending.
    assert_eq!(ladder[0].team_id, TeamId(1));
    assert_eq!(ladder[1].team_id, TeamId(2));
    assert_eq!(ladder[2].team_id, TeamId(3));

    for pair in ladder.windows(2) {
        assert!(pair[0].percentage() >= pair[1].percentage() - 1e-9);
    }
}
