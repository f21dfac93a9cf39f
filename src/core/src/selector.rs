//! Auto-selector (spec §4.6). Grounded on `match/squad/selector.rs`'s
//! `SquadSelector`: bucket-by-role, greedy-fill-by-score, deterministic
//! tie-break. AFL has no goalkeeper special case, so the teacher's
//! "always fill GK first" step becomes "fill the ruck/utility bucket first" —
//! ruck contests gate every center bounce, the closest AFL analogue to a
//! position that must never go unfilled.

use crate::player::Player;
use crate::types::{PlayerId, RoleGroup};

const DEFENDER_TARGET: usize = 6;
const MIDFIELDER_TARGET: usize = 6;
const FORWARD_TARGET: usize = 6;
const RUCK_TARGET: usize = 4;
const BENCH_TARGET: usize = 4;

pub struct Selection {
    pub on_field: Vec<PlayerId>,
    pub bench: Vec<PlayerId>,
}

fn target_for(group: RoleGroup) -> usize {
    match group {
        RoleGroup::Defender => DEFENDER_TARGET,
        RoleGroup::Midfielder => MIDFIELDER_TARGET,
        RoleGroup::Forward => FORWARD_TARGET,
        RoleGroup::Ruck => RUCK_TARGET,
    }
}

/// Compatible overflow bucket for a surplus player, per spec §4.6 step 2:
/// "ruck surplus → midfield; defender surplus → forward or midfield as needed".
fn overflow_targets(group: RoleGroup) -> &'static [RoleGroup] {
    match group {
        RoleGroup::Defender => &[RoleGroup::Forward, RoleGroup::Midfielder],
        RoleGroup::Midfielder => &[RoleGroup::Forward, RoleGroup::Defender],
        RoleGroup::Forward => &[RoleGroup::Midfielder, RoleGroup::Defender],
        RoleGroup::Ruck => &[RoleGroup::Midfielder],
    }
}

fn sort_desc_rating(players: &mut [&Player]) {
    players.sort_by(|a, b| {
        b.overall_rating()
            .partial_cmp(&a.overall_rating())
            .unwrap()
            .then_with(|| a.id.0.cmp(&b.id.0))
    });
}

/// Picks up to 22 on-field + 4 bench from `roster` for `team_id`'s selection
/// (the team identity itself is the caller's concern — this function only
/// needs the roster). Deterministic given the same roster contents.
pub fn select_squad(roster: &[Player]) -> Selection {
    if roster.is_empty() {
        return Selection {
            on_field: Vec::new(),
            bench: Vec::new(),
        };
    }

    let mut buckets: [Vec<&Player>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    let bucket_index = |g: RoleGroup| -> usize {
        match g {
            RoleGroup::Defender => 0,
            RoleGroup::Midfielder => 1,
            RoleGroup::Forward => 2,
            RoleGroup::Ruck => 3,
        }
    };

    for player in roster {
        buckets[bucket_index(player.role.group())].push(player);
    }
    for bucket in buckets.iter_mut() {
        sort_desc_rating(bucket);
    }

    // Step 2: re-label surplus beyond each bucket's target into the most
    // underfilled compatible bucket.
    let groups = [
        RoleGroup::Defender,
        RoleGroup::Midfielder,
        RoleGroup::Forward,
        RoleGroup::Ruck,
    ];
    // Repeated passes: an earlier group's overflow can push a later group
    // back over its own target, so keep sweeping until every bucket settles
    // or every compatible destination is itself full (remaining surplus then
    // simply falls through to the bench/leftover pool in step 3).
    loop {
        let mut moved = false;
        for group in groups {
            let idx = bucket_index(group);
            let target = target_for(group);
            while buckets[idx].len() > target {
                let destinations = overflow_targets(group);
                let most_underfilled = destinations.iter().copied().min_by_key(|g| {
                    let i = bucket_index(*g);
                    buckets[i].len() as i64 - target_for(*g) as i64
                });
                let Some(most_underfilled) = most_underfilled else {
                    break;
                };
                let dest_idx = bucket_index(most_underfilled);
                if buckets[dest_idx].len() >= target_for(most_underfilled) {
                    break;
                }
                let surplus = buckets[idx].pop().unwrap();
                buckets[dest_idx].push(surplus);
                sort_desc_rating(&mut buckets[dest_idx]);
                moved = true;
            }
        }
        if !moved {
            break;
        }
    }

    // Step 3: fill on-field by position priority (ruck first), descending rating.
    let fill_order = [
        RoleGroup::Ruck,
        RoleGroup::Defender,
        RoleGroup::Midfielder,
        RoleGroup::Forward,
    ];
    let mut on_field = Vec::with_capacity(22);
    let mut leftovers: Vec<&Player> = Vec::new();
    for group in fill_order {
        let idx = bucket_index(group);
        let target = target_for(group);
        let take = buckets[idx].len().min(target);
        for player in buckets[idx].drain(..take) {
            on_field.push(player.id);
        }
        leftovers.extend(buckets[idx].drain(..));
    }

    sort_desc_rating(&mut leftovers);
    let bench_take = leftovers.len().min(BENCH_TARGET);
    let bench: Vec<PlayerId> = leftovers[..bench_take].iter().map(|p| p.id).collect();

    Selection { on_field, bench }
}
