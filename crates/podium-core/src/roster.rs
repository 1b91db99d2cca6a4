//! # Team Records and the Roster
//!
//! Per-team state: identity, activation, practice status, and the
//! scorecard of per-stage results. `TeamStore` is the seam a surrounding
//! application implements against its own persistence; the in-memory
//! [`Roster`] is the reference implementation used by tests and
//! single-event embedders.
//!
//! Slot selection is deliberately part of the scorecard, not of any
//! store: every backend records a round-1 score into the same attempt
//! slot because they all go through [`Scorecard::record`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::stage::Stage;
use crate::types::{PodiumError, Points, TeamNumber};

// =============================================================================
// SCORE SLOTS
// =============================================================================

/// One addressable cell of a team's scorecard.
///
/// `BestAttempt` and `FinalTotal` are derived from their stage's attempt
/// slots on every write; the rest hold submitted results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreSlot {
    /// First round-1 attempt.
    Attempt1,
    /// Second round-1 attempt.
    Attempt2,
    /// Third round-1 attempt.
    Attempt3,
    /// Best of the round-1 attempts (derived).
    BestAttempt,
    /// The round-2 result.
    RoundTwo,
    /// The quarter-final result.
    QuarterFinal,
    /// The semi-final result.
    SemiFinal,
    /// First final attempt.
    Final1,
    /// Second final attempt.
    Final2,
    /// Sum of both final attempts (derived).
    FinalTotal,
}

impl ScoreSlot {
    /// Get the slot name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ScoreSlot::Attempt1 => "attempt 1",
            ScoreSlot::Attempt2 => "attempt 2",
            ScoreSlot::Attempt3 => "attempt 3",
            ScoreSlot::BestAttempt => "best attempt",
            ScoreSlot::RoundTwo => "round 2",
            ScoreSlot::QuarterFinal => "quarter final",
            ScoreSlot::SemiFinal => "semi final",
            ScoreSlot::Final1 => "final 1",
            ScoreSlot::Final2 => "final 2",
            ScoreSlot::FinalTotal => "final total",
        }
    }

    /// The stage this slot belongs to.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            ScoreSlot::Attempt1
            | ScoreSlot::Attempt2
            | ScoreSlot::Attempt3
            | ScoreSlot::BestAttempt => Stage::Round1,
            ScoreSlot::RoundTwo => Stage::Round2,
            ScoreSlot::QuarterFinal => Stage::QuarterFinal,
            ScoreSlot::SemiFinal => Stage::SemiFinal,
            ScoreSlot::Final1 | ScoreSlot::Final2 | ScoreSlot::FinalTotal => Stage::Final,
        }
    }

    /// Slots a submission during `stage` may fill, in fill order.
    #[must_use]
    pub fn submission_order(stage: Stage) -> &'static [ScoreSlot] {
        match stage {
            Stage::Round1 => &[ScoreSlot::Attempt1, ScoreSlot::Attempt2, ScoreSlot::Attempt3],
            Stage::Round2 => &[ScoreSlot::RoundTwo],
            Stage::QuarterFinal => &[ScoreSlot::QuarterFinal],
            Stage::SemiFinal => &[ScoreSlot::SemiFinal],
            Stage::Final => &[ScoreSlot::Final1, ScoreSlot::Final2],
        }
    }

    /// Every slot attached to `stage`, derived slots included.
    #[must_use]
    pub fn stage_slots(stage: Stage) -> &'static [ScoreSlot] {
        match stage {
            Stage::Round1 => &[
                ScoreSlot::Attempt1,
                ScoreSlot::Attempt2,
                ScoreSlot::Attempt3,
                ScoreSlot::BestAttempt,
            ],
            Stage::Round2 => &[ScoreSlot::RoundTwo],
            Stage::QuarterFinal => &[ScoreSlot::QuarterFinal],
            Stage::SemiFinal => &[ScoreSlot::SemiFinal],
            Stage::Final => &[ScoreSlot::Final1, ScoreSlot::Final2, ScoreSlot::FinalTotal],
        }
    }
}

impl std::fmt::Display for ScoreSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// SCORECARD
// =============================================================================

/// One team's recorded results across every stage.
///
/// Unset slots mean "not yet competed", which ranking treats differently
/// from a recorded zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    attempt_1: Option<Points>,
    attempt_2: Option<Points>,
    attempt_3: Option<Points>,
    best_attempt: Option<Points>,
    round_2: Option<Points>,
    quarter_final: Option<Points>,
    semi_final: Option<Points>,
    final_1: Option<Points>,
    final_2: Option<Points>,
    final_total: Option<Points>,
}

impl Scorecard {
    /// Create an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one slot.
    #[must_use]
    pub fn get(&self, slot: ScoreSlot) -> Option<Points> {
        *self.slot(slot)
    }

    /// Record a stage result into the next open slot for that stage.
    ///
    /// Returns the slot written, or `None` when every slot the stage
    /// offers already holds a score. Derived slots refresh on success.
    pub fn record(&mut self, stage: Stage, points: Points) -> Option<ScoreSlot> {
        let open = ScoreSlot::submission_order(stage)
            .iter()
            .copied()
            .find(|slot| self.get(*slot).is_none())?;
        *self.slot_mut(open) = Some(points);
        self.refresh(stage);
        Some(open)
    }

    /// Write one slot directly, clearing it when `value` is `None`.
    ///
    /// Writing an attempt slot refreshes its stage's derived slot. A
    /// directly-written derived slot stands until the next attempt
    /// mutation for its stage recomputes it.
    pub fn override_slot(&mut self, slot: ScoreSlot, value: Option<Points>) {
        *self.slot_mut(slot) = value;
        if !matches!(slot, ScoreSlot::BestAttempt | ScoreSlot::FinalTotal) {
            self.refresh(slot.stage());
        }
    }

    /// Clear every slot of one stage, derived slots included.
    pub fn clear_stage(&mut self, stage: Stage) {
        for slot in ScoreSlot::stage_slots(stage) {
            *self.slot_mut(*slot) = None;
        }
    }

    /// The best round-1 attempt.
    ///
    /// Prefers the stored derived slot and falls back to computing it,
    /// so cards hydrated from an external store that never wrote the
    /// derived column still rank correctly.
    #[must_use]
    pub fn best_round_one(&self) -> Option<Points> {
        self.best_attempt.or_else(|| {
            [self.attempt_1, self.attempt_2, self.attempt_3]
                .into_iter()
                .flatten()
                .max()
        })
    }

    /// The round-2 result.
    #[must_use]
    pub fn round_two(&self) -> Option<Points> {
        self.round_2
    }

    /// The quarter-final result.
    #[must_use]
    pub fn quarter_final(&self) -> Option<Points> {
        self.quarter_final
    }

    /// The semi-final result.
    #[must_use]
    pub fn semi_final(&self) -> Option<Points> {
        self.semi_final
    }

    /// The final standing score: the final total when present, otherwise
    /// the better recorded final attempt.
    #[must_use]
    pub fn final_score(&self) -> Option<Points> {
        self.final_total
            .or_else(|| [self.final_1, self.final_2].into_iter().flatten().max())
    }

    fn refresh(&mut self, stage: Stage) {
        match stage {
            Stage::Round1 => {
                self.best_attempt = [self.attempt_1, self.attempt_2, self.attempt_3]
                    .into_iter()
                    .flatten()
                    .max();
            }
            Stage::Final => {
                self.final_total = match (self.final_1, self.final_2) {
                    (Some(first), Some(second)) => Some(first.saturating_add(second)),
                    _ => None,
                };
            }
            Stage::Round2 | Stage::QuarterFinal | Stage::SemiFinal => {}
        }
    }

    fn slot(&self, slot: ScoreSlot) -> &Option<Points> {
        match slot {
            ScoreSlot::Attempt1 => &self.attempt_1,
            ScoreSlot::Attempt2 => &self.attempt_2,
            ScoreSlot::Attempt3 => &self.attempt_3,
            ScoreSlot::BestAttempt => &self.best_attempt,
            ScoreSlot::RoundTwo => &self.round_2,
            ScoreSlot::QuarterFinal => &self.quarter_final,
            ScoreSlot::SemiFinal => &self.semi_final,
            ScoreSlot::Final1 => &self.final_1,
            ScoreSlot::Final2 => &self.final_2,
            ScoreSlot::FinalTotal => &self.final_total,
        }
    }

    fn slot_mut(&mut self, slot: ScoreSlot) -> &mut Option<Points> {
        match slot {
            ScoreSlot::Attempt1 => &mut self.attempt_1,
            ScoreSlot::Attempt2 => &mut self.attempt_2,
            ScoreSlot::Attempt3 => &mut self.attempt_3,
            ScoreSlot::BestAttempt => &mut self.best_attempt,
            ScoreSlot::RoundTwo => &mut self.round_2,
            ScoreSlot::QuarterFinal => &mut self.quarter_final,
            ScoreSlot::SemiFinal => &mut self.semi_final,
            ScoreSlot::Final1 => &mut self.final_1,
            ScoreSlot::Final2 => &mut self.final_2,
            ScoreSlot::FinalTotal => &mut self.final_total,
        }
    }
}

// =============================================================================
// TEAM
// =============================================================================

/// A registered team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The public team number.
    pub number: TeamNumber,
    /// The team name, unique per event.
    pub name: String,
    /// Whether the team is still in contention. Advancement cuts flip
    /// this off; it is never flipped back automatically.
    pub active: bool,
    /// Practice teams compete for the experience: their sheets are
    /// evaluated but results are never stored and they never rank.
    pub practice: bool,
    /// The team's results.
    pub scores: Scorecard,
}

impl Team {
    /// Register a competing team.
    #[must_use]
    pub fn new(number: TeamNumber, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            active: true,
            practice: false,
            scores: Scorecard::new(),
        }
    }

    /// Register a practice team.
    #[must_use]
    pub fn practice_team(number: TeamNumber, name: impl Into<String>) -> Self {
        Self {
            practice: true,
            ..Self::new(number, name)
        }
    }
}

// =============================================================================
// TEAMSTORE TRAIT
// =============================================================================

/// The team-record capability the engine consumes.
///
/// The engine never owns persistence. Implementations map these calls
/// onto whatever store the surrounding application runs; failures of
/// that store surface as `PodiumError::Persistence`.
///
/// All fallible operations return `Result<T, PodiumError>` so in-memory
/// and external backends behave uniformly.
pub trait TeamStore {
    /// Every registered team, in team-number order.
    fn all_teams(&self) -> Result<Vec<Team>, PodiumError>;

    /// Teams still in contention. Practice teams are dropped when
    /// `exclude_practice` is set.
    fn active_teams(&self, exclude_practice: bool) -> Result<Vec<Team>, PodiumError>;

    /// Look up one team.
    fn team(&self, number: TeamNumber) -> Result<Team, PodiumError>;

    /// Read one scorecard slot.
    fn get_score(&self, number: TeamNumber, slot: ScoreSlot) -> Result<Option<Points>, PodiumError>;

    /// Record a stage result into the team's next open slot for that
    /// stage. Returns the slot written; a full stage reports
    /// `AttemptsExhausted`.
    fn set_score(
        &mut self,
        number: TeamNumber,
        stage: Stage,
        points: Points,
    ) -> Result<ScoreSlot, PodiumError>;

    /// Write one slot directly (admin correction). `None` clears it.
    fn override_score(
        &mut self,
        number: TeamNumber,
        slot: ScoreSlot,
        value: Option<Points>,
    ) -> Result<(), PodiumError>;

    /// Clear every slot of one stage for the team.
    fn reset_stage(&mut self, number: TeamNumber, stage: Stage) -> Result<(), PodiumError>;

    /// Flip a team's activation flag.
    fn set_active(&mut self, number: TeamNumber, active: bool) -> Result<(), PodiumError>;
}

// =============================================================================
// IN-MEMORY ROSTER
// =============================================================================

/// In-memory `TeamStore`.
///
/// Uses `BTreeMap` for deterministic team ordering. No `HashMap` allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    teams: BTreeMap<TeamNumber, Team>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team. Team numbers and names are unique per event.
    pub fn register(&mut self, team: Team) -> Result<(), PodiumError> {
        if self.teams.contains_key(&team.number) {
            return Err(PodiumError::DuplicateTeam(format!("number {}", team.number)));
        }
        if self.teams.values().any(|t| t.name == team.name) {
            return Err(PodiumError::DuplicateTeam(format!("name {:?}", team.name)));
        }
        self.teams.insert(team.number, team);
        Ok(())
    }

    /// The number of registered teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Whether the roster has no teams.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn team_mut(&mut self, number: TeamNumber) -> Result<&mut Team, PodiumError> {
        self.teams
            .get_mut(&number)
            .ok_or(PodiumError::UnknownTeam(number))
    }
}

impl TeamStore for Roster {
    fn all_teams(&self) -> Result<Vec<Team>, PodiumError> {
        Ok(self.teams.values().cloned().collect())
    }

    fn active_teams(&self, exclude_practice: bool) -> Result<Vec<Team>, PodiumError> {
        Ok(self
            .teams
            .values()
            .filter(|t| t.active && !(exclude_practice && t.practice))
            .cloned()
            .collect())
    }

    fn team(&self, number: TeamNumber) -> Result<Team, PodiumError> {
        self.teams
            .get(&number)
            .cloned()
            .ok_or(PodiumError::UnknownTeam(number))
    }

    fn get_score(
        &self,
        number: TeamNumber,
        slot: ScoreSlot,
    ) -> Result<Option<Points>, PodiumError> {
        let team = self
            .teams
            .get(&number)
            .ok_or(PodiumError::UnknownTeam(number))?;
        Ok(team.scores.get(slot))
    }

    fn set_score(
        &mut self,
        number: TeamNumber,
        stage: Stage,
        points: Points,
    ) -> Result<ScoreSlot, PodiumError> {
        let team = self.team_mut(number)?;
        team.scores
            .record(stage, points)
            .ok_or(PodiumError::AttemptsExhausted {
                team: number,
                stage,
            })
    }

    fn override_score(
        &mut self,
        number: TeamNumber,
        slot: ScoreSlot,
        value: Option<Points>,
    ) -> Result<(), PodiumError> {
        self.team_mut(number)?.scores.override_slot(slot, value);
        Ok(())
    }

    fn reset_stage(&mut self, number: TeamNumber, stage: Stage) -> Result<(), PodiumError> {
        self.team_mut(number)?.scores.clear_stage(stage);
        Ok(())
    }

    fn set_active(&mut self, number: TeamNumber, active: bool) -> Result<(), PodiumError> {
        self.team_mut(number)?.active = active;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
