//! Ladder aggregation (spec §4.10). Grounded directly on
//! `league/table/table.rs`'s `LeagueTable`: same winner/loser/draw
//! aggregation shape and `sort_by` chain, re-pointed at AFL's point values
//! (4 per win, 2 per draw, rather than the teacher's soccer 3/1/0) and the
//! spec's own sort key order (competition points, percentage, points-for,
//! team id — not the teacher's goal-difference tie-break).

use crate::engine::MatchResult;
use crate::types::TeamId;

const POINTS_PER_WIN: u32 = 4;
const POINTS_PER_DRAW: u32 = 2;

/// One team's standing (spec §4.10), plus `points_diff` as a convenience
/// read (SPEC_FULL supplement #3 — not a sort key, §8's order is unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderRow {
    pub team_id: TeamId,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub points_diff: i64,
    pub competition_points: u32,
}

impl LadderRow {
    fn new(team_id: TeamId) -> Self {
        LadderRow {
            team_id,
            played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            points_for: 0,
            points_against: 0,
            points_diff: 0,
            competition_points: 0,
        }
    }

    /// `100 * PF / max(PA, 1)` (spec §4.10) — the classic AFL percentage stat.
    pub fn percentage(&self) -> f64 {
        100.0 * self.points_for as f64 / self.points_against.max(1) as f64
    }

    fn record_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.points_for += scored;
        self.points_against += conceded;
        self.points_diff = self.points_for as i64 - self.points_against as i64;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.competition_points += POINTS_PER_WIN;
            }
            std::cmp::Ordering::Less => {
                self.losses += 1;
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.competition_points += POINTS_PER_DRAW;
            }
        }
    }
}

fn get_or_insert(rows: &mut Vec<LadderRow>, team_id: TeamId) -> usize {
    match rows.iter().position(|r| r.team_id == team_id) {
        Some(idx) => idx,
        None => {
            rows.push(LadderRow::new(team_id));
            rows.len() - 1
        }
    }
}

/// Aggregates a season's match results into a sorted ladder (spec §4.10).
/// Sort order: competition points desc, percentage desc, points-for desc,
/// team id asc — the exact chain spec §8's "Ladder ordering" property tests.
pub fn build_ladder(results: &[MatchResult]) -> Vec<LadderRow> {
    let mut rows: Vec<LadderRow> = Vec::new();

    for result in results {
        let home_idx = get_or_insert(&mut rows, result.home_id);
        rows[home_idx].record_result(result.score.home_points(), result.score.away_points());

        let away_idx = get_or_insert(&mut rows, result.away_id);
        rows[away_idx].record_result(result.score.away_points(), result.score.home_points());
    }

    rows.sort_by(|a, b| {
        b.competition_points
            .cmp(&a.competition_points)
            .then_with(|| b.percentage().partial_cmp(&a.percentage()).unwrap())
            .then_with(|| b.points_for.cmp(&a.points_for))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    rows
}
