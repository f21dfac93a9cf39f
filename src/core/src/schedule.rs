//! Round-robin fixture generation (spec §4.9). Grounded directly on
//! `league/schedule/round.rs`'s circle-method `generate_game_pairs`/`rotate`:
//! same algorithm, generalized to accept a `double_round_robin` flag (the
//! teacher's version is single round-robin only).

use crate::types::TeamId;

const BYE_SENTINEL: TeamId = TeamId(u32::MAX);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub round: u32,
    pub home: TeamId,
    pub away: TeamId,
}

fn rotate(teams: &mut [TeamId]) {
    if teams.len() <= 1 {
        return;
    }
    // Fix the first slot, rotate everyone else by one position — the
    // teacher's `round.rs::rotate` shape.
    let last = teams[teams.len() - 1];
    for i in (2..teams.len()).rev() {
        teams[i] = teams[i - 1];
    }
    teams[1] = last;
}

/// Result of [`build_round_robin`]: the fixture list plus, per SPEC_FULL
/// supplement #4, the bye each odd-team-count round drops so a host doesn't
/// have to re-derive "who sits out this round" from the fixture list alone.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
    pub byes: Vec<(u32, TeamId)>,
}

fn generate_game_pairs(teams: &[TeamId], round_number: u32) -> (Vec<Fixture>, Option<TeamId>) {
    let half = teams.len() / 2;
    let mut fixtures = Vec::with_capacity(half);
    let mut bye = None;
    for i in 0..half {
        let (home, away) = if round_number % 2 == 0 {
            (teams[i], teams[teams.len() - 1 - i])
        } else {
            (teams[teams.len() - 1 - i], teams[i])
        };
        if home == BYE_SENTINEL {
            bye = Some(away);
            continue;
        }
        if away == BYE_SENTINEL {
            bye = Some(home);
            continue;
        }
        fixtures.push(Fixture { round: round_number, home, away });
    }
    (fixtures, bye)
}

fn generate_tours(team_ids: &[TeamId]) -> Schedule {
    if team_ids.len() < 2 {
        log::warn!("schedule: team_ids is too small ({}) to build fixtures", team_ids.len());
        return Schedule::default();
    }

    let mut teams = team_ids.to_vec();
    if teams.len() % 2 != 0 {
        teams.push(BYE_SENTINEL);
    }

    let rounds = teams.len() - 1;
    let mut schedule = Schedule::default();
    for round_number in 0..rounds {
        let (fixtures, bye) = generate_game_pairs(&teams, round_number as u32);
        schedule.fixtures.extend(fixtures);
        if let Some(team) = bye {
            schedule.byes.push((round_number as u32, team));
        }
        rotate(&mut teams);
    }
    schedule
}

/// Builds the fixture list for `team_ids`. For double round-robin, appends a
/// second half with every fixture's home/away reversed and its round number
/// offset past the first half (spec §4.9).
pub fn build_round_robin(team_ids: &[TeamId], double_round_robin: bool) -> Schedule {
    let first_half = generate_tours(team_ids);
    if !double_round_robin {
        return first_half;
    }

    let rounds_in_first_half = first_half.fixtures.iter().map(|f| f.round).max().map(|r| r + 1).unwrap_or(0);
    let mut schedule = first_half.clone();
    schedule.fixtures.extend(first_half.fixtures.into_iter().map(|f| Fixture {
        round: f.round + rounds_in_first_half,
        home: f.away,
        away: f.home,
    }));
    schedule.byes.extend(
        first_half.byes.into_iter().map(|(round, team)| (round + rounds_in_first_half, team)),
    );
    schedule
}
