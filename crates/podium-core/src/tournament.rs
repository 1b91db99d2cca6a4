//! # Tournament Facade
//!
//! One value that owns a running competition: the rulebook, the event
//! format, the current stage, and the team store. Judge submissions,
//! admin corrections, and stage advancement all pass through here, so
//! every state change funnels past a single seam and gets logged once.
//!
//! The pure pieces ([`crate::evaluator`], [`crate::ranking`],
//! [`crate::advance`]) stay callable on their own; the facade only wires
//! them to a store and a current stage.

use serde::{Deserialize, Serialize};

use crate::advance;
use crate::evaluator::Evaluator;
use crate::ranking;
use crate::roster::{ScoreSlot, Team, TeamStore};
use crate::rules::Ruleset;
use crate::stage::{Format, Stage, validate_transition};
use crate::types::{PodiumError, Points, ScoreBreakdown, ScoreSheet, TeamNumber};

// =============================================================================
// OUTCOMES
// =============================================================================

/// What became of a judge submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Evaluated and written to the team's card.
    Recorded {
        /// The full evaluation.
        breakdown: ScoreBreakdown,
        /// The slot the total landed in.
        slot: ScoreSlot,
    },
    /// Evaluated for the judges' benefit only; practice results are
    /// never stored.
    Practice {
        /// The full evaluation.
        breakdown: ScoreBreakdown,
    },
}

impl SubmitOutcome {
    /// The evaluation, wherever the total ended up.
    #[must_use]
    pub fn breakdown(&self) -> &ScoreBreakdown {
        match self {
            SubmitOutcome::Recorded { breakdown, .. } | SubmitOutcome::Practice { breakdown } => {
                breakdown
            }
        }
    }

    /// The attempt total.
    #[must_use]
    pub fn total(&self) -> Points {
        self.breakdown().total()
    }
}

/// Report of one completed stage advancement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advancement {
    /// The stage the competition moved into.
    pub target: Stage,
    /// Teams that made the cut, in rank order.
    pub retained: Vec<TeamNumber>,
    /// Teams deactivated by the cut, in rank order.
    pub eliminated: Vec<TeamNumber>,
}

// =============================================================================
// TOURNAMENT
// =============================================================================

/// The competition state machine.
///
/// Generic over the team store so events can run on the in-memory
/// [`crate::Roster`] or on an application-owned backend.
#[derive(Debug)]
pub struct Tournament<S: TeamStore> {
    store: S,
    ruleset: Ruleset,
    format: Format,
    stage: Stage,
}

impl<S: TeamStore> Tournament<S> {
    /// Open a competition at round 1.
    #[must_use]
    pub fn new(store: S, ruleset: Ruleset, format: Format) -> Self {
        Self {
            store,
            ruleset,
            format,
            stage: Stage::Round1,
        }
    }

    /// The stage currently being played.
    #[must_use]
    pub fn current_stage(&self) -> Stage {
        self.stage
    }

    /// The event format.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The rulebook in force.
    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Read access to the team store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the team store, for store-specific operations
    /// such as registration on the in-memory roster.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Score a sheet for `team` at the current stage.
    ///
    /// Evaluation cannot fail; what can fail is the active-set check and
    /// recording the total. Unregistered and deactivated teams are both
    /// rejected as [`PodiumError::UnknownTeam`] before anything is
    /// written. Practice teams get their evaluation back without any
    /// store write.
    pub fn submit(
        &mut self,
        team: TeamNumber,
        sheet: &ScoreSheet,
    ) -> Result<SubmitOutcome, PodiumError> {
        let record = self.store.team(team)?;
        if !record.active {
            tracing::warn!("rejected submission for deactivated team {}", team);
            return Err(PodiumError::UnknownTeam(team));
        }
        let breakdown = Evaluator::evaluate(&self.ruleset, sheet);

        if record.practice {
            tracing::debug!(
                "practice submission from team {} scored {}, not recorded",
                team,
                breakdown.total().value()
            );
            return Ok(SubmitOutcome::Practice { breakdown });
        }

        let slot = self.store.set_score(team, self.stage, breakdown.total())?;
        tracing::info!(
            "team {} scored {} into {} during {}",
            team,
            breakdown.total().value(),
            slot,
            self.stage
        );
        Ok(SubmitOutcome::Recorded { breakdown, slot })
    }

    /// Active, non-practice teams in rank order at the current stage.
    pub fn standings(&self) -> Result<Vec<Team>, PodiumError> {
        Ok(ranking::rank(self.store.active_teams(true)?, self.stage))
    }

    /// Advance the competition to `target`, deactivating everyone ranked
    /// below the cut.
    ///
    /// The transition is validated before anything is touched. The
    /// deactivation sweep stops at the first store failure: teams
    /// already deactivated stay deactivated, no further teams are
    /// touched, and the current stage does not change.
    pub fn advance_to(&mut self, target: Stage) -> Result<Advancement, PodiumError> {
        if let Err(rejected) = validate_transition(self.format, self.stage, target) {
            tracing::warn!("rejected stage change: {}", rejected);
            return Err(rejected);
        }
        let retain = match self.format.retain_count(target) {
            Some(count) => count,
            None => {
                return Err(PodiumError::UnsupportedStage {
                    format: self.format,
                    stage: target,
                });
            }
        };

        let ranked = self.standings()?;
        let retained = advance::retained(&ranked, retain);
        let eliminated = advance::eliminated_beyond(&ranked, retain);

        for number in &eliminated {
            self.store.set_active(*number, false)?;
            tracing::debug!("deactivated team {}", number);
        }

        let from = self.stage;
        self.stage = target;
        tracing::info!(
            "advanced {} -> {}: {} retained, {} eliminated",
            from,
            target,
            retained.len(),
            eliminated.len()
        );
        Ok(Advancement {
            target,
            retained,
            eliminated,
        })
    }

    /// Opening-round display grouping, three-way events only.
    ///
    /// `None` once the bracket has started or under the single format.
    pub fn initial_groups(&self) -> Result<Option<[Vec<Team>; 3]>, PodiumError> {
        if self.format != Format::ThreeWayBracket || self.stage != Stage::Round1 {
            return Ok(None);
        }
        let ranked = self.standings()?;
        let groups = advance::initial_groups(&ranked);
        Ok(Some(groups.map(<[Team]>::to_vec)))
    }

    /// Admin correction: write one scorecard slot directly.
    pub fn override_score(
        &mut self,
        team: TeamNumber,
        slot: ScoreSlot,
        value: Option<Points>,
    ) -> Result<(), PodiumError> {
        tracing::info!("override for team {}: {} set to {:?}", team, slot, value);
        self.store.override_score(team, slot, value)
    }

    /// Admin correction: wipe one stage of a team's card.
    pub fn reset_stage(&mut self, team: TeamNumber, stage: Stage) -> Result<(), PodiumError> {
        tracing::info!("reset for team {}: {} cleared", team, stage);
        self.store.reset_stage(team, stage)
    }

    /// Manual activation control, for withdrawals and reinstatements.
    pub fn set_active(&mut self, team: TeamNumber, active: bool) -> Result<(), PodiumError> {
        tracing::info!(
            "team {} manually set {}",
            team,
            if active { "active" } else { "inactive" }
        );
        self.store.set_active(team, active)
    }
}

// =============================================================================
// TESTS
// =============================================================================
