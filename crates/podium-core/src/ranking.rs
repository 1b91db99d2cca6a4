//! # Ranking
//!
//! A total order over teams at any point in the competition. Teams are
//! compared stage by stage from the current stage backwards: having a
//! score at a stage outranks not having one, a higher stage score
//! outranks a lower one, and exact ties fall through to the previous
//! stage. Team number settles whatever survives, so the order is total
//! and identical across runs.
//!
//! The extraction ladder below is the single authority on which value
//! stands for a stage; nothing else in the crate re-derives it. Round 1
//! stands on the best attempt, the final on the final total with the
//! better single attempt as fallback, and every other stage on its one
//! recorded result.
//!
//! The cascade order is the house reading of how past events ranked
//! their fields. If a published standing from a previous season
//! disagrees with this ladder, raise it as a bug rather than bending
//! the comparator around one scoreboard.

use std::cmp::Ordering;

use crate::roster::{Scorecard, Team};
use crate::stage::Stage;
use crate::types::Points;

type StageScore = fn(&Scorecard) -> Option<Points>;

/// Stage-score extractors, latest stage first. Comparison walks this
/// list, skipping rungs later than the stage being ranked.
const LADDER: &[(Stage, StageScore)] = &[
    (Stage::Final, Scorecard::final_score),
    (Stage::SemiFinal, Scorecard::semi_final),
    (Stage::QuarterFinal, Scorecard::quarter_final),
    (Stage::Round2, Scorecard::round_two),
    (Stage::Round1, Scorecard::best_round_one),
];

/// The value that represents `stage` on a card, if the team has one.
#[must_use]
pub fn stage_score(card: &Scorecard, stage: Stage) -> Option<Points> {
    LADDER
        .iter()
        .find(|(rung, _)| *rung == stage)
        .and_then(|(_, score_of)| score_of(card))
}

/// Compare two teams at `stage`. `Ordering::Less` means `a` ranks first.
///
/// Only rungs at or before `stage` are consulted; a stray later-stage
/// score (say, after an admin reset went wrong) cannot influence an
/// earlier ranking.
#[must_use]
pub fn compare(a: &Team, b: &Team, stage: Stage) -> Ordering {
    for (rung, score_of) in LADDER {
        if *rung > stage {
            continue;
        }
        match (score_of(&a.scores), score_of(&b.scores)) {
            (Some(left), Some(right)) => match right.cmp(&left) {
                Ordering::Equal => {}
                decided => return decided,
            },
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => {}
        }
    }
    a.number.cmp(&b.number)
}

/// Sort teams into rank order at `stage`.
///
/// The sort is stable, though [`compare`] never actually declares two
/// teams equal: the team-number tail makes the order strict.
#[must_use]
pub fn rank(mut teams: Vec<Team>, stage: Stage) -> Vec<Team> {
    teams.sort_by(|a, b| compare(a, b, stage));
    teams
}

// =============================================================================
// TESTS
// =============================================================================
