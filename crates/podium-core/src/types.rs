//! # Core Type Definitions
//!
//! The shared vocabulary of the competition engine:
//! - Identifiers (`TeamNumber`, `MissionId`, `ClauseId`)
//! - Score quantities (`Points`)
//! - Judge submissions (`ObservedValue`, `ScoreSheet`)
//! - Evaluator output (`ScoreBreakdown`)
//! - Error types (`PodiumError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Use saturating arithmetic for score sums to prevent overflow

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::stage::{Format, Stage};

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Public identity of a team, unique per event.
/// This is the number printed on the table card, not a database key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamNumber(pub u32);

impl TeamNumber {
    /// Create a new team number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TeamNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one mission in the season rulebook (`"m03"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MissionId(pub String);

impl MissionId {
    /// Create a new mission id from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the mission id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of one scoreable clause within a mission (`"m03_brick_ejected"`).
/// Clause ids are flat across the whole rulebook; a score sheet is keyed by them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClauseId(pub String);

impl ClauseId {
    /// Create a new clause id from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the clause id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// POINTS
// =============================================================================

/// An integer score quantity.
/// Uses i64 with saturating arithmetic to prevent overflow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Points(pub i64);

impl Points {
    /// Zero points.
    pub const ZERO: Points = Points(0);

    /// Create a new points value.
    #[must_use]
    pub const fn new(points: i64) -> Self {
        Self(points)
    }

    /// Get the raw points value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Add two points values using saturating arithmetic.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtract a points value using saturating arithmetic.
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

// =============================================================================
// OBSERVED VALUES
// =============================================================================

/// One raw value a judge submitted for one clause.
///
/// Sheets come from outside the engine, so a value of any shape can turn
/// up against any clause. Shape mismatches are recovered during
/// evaluation by treating the clause as not achieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservedValue {
    /// A yes/no observation (model parked, switch thrown).
    Flag(bool),
    /// A counted observation (units delivered).
    Number(i64),
    /// One code out of an enumerated choice list.
    Code(String),
}

impl ObservedValue {
    /// Whether this value counts as "achieved" for a flag-shaped clause.
    ///
    /// Flags are their own truth, numbers coerce (non-zero is achieved),
    /// and codes never satisfy a flag position.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            ObservedValue::Flag(flag) => *flag,
            ObservedValue::Number(n) => *n != 0,
            ObservedValue::Code(_) => false,
        }
    }

    /// The choice code, if this value is one.
    #[must_use]
    pub fn as_code(&self) -> Option<&str> {
        match self {
            ObservedValue::Code(code) => Some(code),
            ObservedValue::Flag(_) | ObservedValue::Number(_) => None,
        }
    }
}

impl From<bool> for ObservedValue {
    fn from(flag: bool) -> Self {
        ObservedValue::Flag(flag)
    }
}

impl From<i64> for ObservedValue {
    fn from(n: i64) -> Self {
        ObservedValue::Number(n)
    }
}

impl From<&str> for ObservedValue {
    fn from(code: &str) -> Self {
        ObservedValue::Code(code.to_owned())
    }
}

impl From<String> for ObservedValue {
    fn from(code: String) -> Self {
        ObservedValue::Code(code)
    }
}

// =============================================================================
// SCORE SHEET
// =============================================================================

/// One attempt's raw submission: clause observations plus an infraction count.
///
/// A sheet is built fresh per attempt and consumed by the evaluator. It is
/// never persisted; only the evaluated total goes onto a team's card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    observations: BTreeMap<ClauseId, ObservedValue>,
    infractions: u32,
}

impl ScoreSheet {
    /// Create a new empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. A repeated clause id overwrites the earlier value.
    pub fn record(&mut self, clause: impl Into<String>, value: impl Into<ObservedValue>) {
        self.observations.insert(ClauseId::new(clause), value.into());
    }

    /// Set the number of infractions called against this attempt.
    pub fn set_infractions(&mut self, infractions: u32) {
        self.infractions = infractions;
    }

    /// Look up the observation for one clause.
    #[must_use]
    pub fn observation(&self, clause: &ClauseId) -> Option<&ObservedValue> {
        self.observations.get(clause)
    }

    /// The number of infractions called against this attempt.
    #[must_use]
    pub fn infractions(&self) -> u32 {
        self.infractions
    }

    /// The number of recorded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the sheet has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

// =============================================================================
// SCORE BREAKDOWN
// =============================================================================

/// Evaluator output for one attempt.
///
/// Holds a per-mission score for every enabled mission (zero-scored
/// missions included), the penalty deduction as a non-positive figure,
/// and the total. Construction guarantees
/// `total == max(0, sum(missions) + penalties)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    missions: BTreeMap<MissionId, Points>,
    penalties: Points,
    total: Points,
}

impl ScoreBreakdown {
    /// Build a breakdown from per-mission scores and a non-negative deduction.
    ///
    /// The deduction is stored negated; the total is the floored sum.
    #[must_use]
    pub fn new(missions: BTreeMap<MissionId, Points>, deduction: Points) -> Self {
        let penalties = Points::ZERO.saturating_sub(deduction);
        let raw = missions
            .values()
            .fold(penalties, |acc, score| acc.saturating_add(*score));
        let total = if raw.value() < 0 { Points::ZERO } else { raw };
        Self {
            missions,
            penalties,
            total,
        }
    }

    /// Per-mission scores, in mission id order.
    #[must_use]
    pub fn missions(&self) -> &BTreeMap<MissionId, Points> {
        &self.missions
    }

    /// The score of one mission, if it was part of the evaluated rulebook.
    #[must_use]
    pub fn mission(&self, id: &MissionId) -> Option<Points> {
        self.missions.get(id).copied()
    }

    /// The penalty deduction, zero or negative.
    #[must_use]
    pub fn penalties(&self) -> Points {
        self.penalties
    }

    /// The attempt total, floored at zero.
    #[must_use]
    pub fn total(&self) -> Points {
        self.total
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the competition engine.
///
/// - No silent failures
/// - Use `Result<T, PodiumError>` for fallible operations
/// - The engine never panics; all errors must be recoverable
///
/// Malformed clause observations are deliberately not represented here:
/// the evaluator recovers them locally (the clause scores zero) so a
/// judge submission can never hard-fail on a bad value.
#[derive(Debug, Error)]
pub enum PodiumError {
    /// The rulebook is structurally invalid and cannot be used for scoring.
    #[error("Invalid ruleset: {0}")]
    InvalidRuleset(String),

    /// The referenced team is not registered, or is inactive where the
    /// operation only accepts teams from the active set.
    #[error("Unknown team: {0}")]
    UnknownTeam(TeamNumber),

    /// A registration collides with an existing team number or name.
    #[error("Duplicate team: {0}")]
    DuplicateTeam(String),

    /// Every slot the stage offers already holds a score.
    #[error("No open slot for team {team} in {stage}")]
    AttemptsExhausted { team: TeamNumber, stage: Stage },

    /// The requested stage is not strictly later than the current one.
    #[error("Illegal stage transition: {from} -> {to}")]
    IllegalStageTransition { from: Stage, to: Stage },

    /// The requested stage is not played under the event's format.
    #[error("{stage} is not played under the {format} format")]
    UnsupportedStage { format: Format, stage: Stage },

    /// The team store failed to apply or answer a request.
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================
