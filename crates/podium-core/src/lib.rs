//! # podium-core
//!
//! The deterministic competition engine for Podium - THE LOGIC.
//!
//! This crate implements the tournament CORE for bracketed robotics
//! competitions: judges submit raw mission observations, and the core
//! turns them into point breakdowns, live standings, and knockout
//! elimination decisions that any two machines reproduce exactly.
//!
//! ## Pipeline
//!
//! - `rules` / `season` / `config` - the rulebook as data
//! - `evaluator` - observations in, a [`ScoreBreakdown`] out
//! - `roster` - team records and their per-stage scorecards
//! - `ranking` - the stage-aware comparator behind every scoreboard
//! - `stage` / `advance` - bracket formats and knockout cuts
//! - `tournament` - the facade gluing the above to a [`TeamStore`]
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Scores with integer arithmetic only; floats are denied by lint
//! - Holds no hidden state: every decision is a function of the rulebook,
//!   the stored scorecards, and the current stage
//! - Never deletes a team; elimination only clears the active flag
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod advance;
pub mod config;
pub mod evaluator;
pub mod ranking;
pub mod roster;
pub mod rules;
pub mod season;
pub mod stage;
pub mod tournament;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    ClauseId, MissionId, ObservedValue, PodiumError, Points, ScoreBreakdown, ScoreSheet,
    TeamNumber,
};

// =============================================================================
// RE-EXPORTS: Rulebook
// =============================================================================

pub use config::{load_ruleset, ruleset_from_toml};
pub use rules::{Choice, Clause, MissionRule, PenaltyRule, RuleKind, Ruleset};

// =============================================================================
// RE-EXPORTS: Competition Engine
// =============================================================================

pub use advance::{eliminated_beyond, initial_groups, retained};
pub use evaluator::Evaluator;
pub use ranking::{compare, rank, stage_score};
pub use roster::{Roster, ScoreSlot, Scorecard, Team, TeamStore};
pub use tournament::{Advancement, SubmitOutcome, Tournament};

// =============================================================================
// RE-EXPORTS: Stages and Formats
// =============================================================================

pub use stage::{
    Format, SINGLE_FINAL, SINGLE_QUARTER, SINGLE_ROUND_TWO, SINGLE_SEMI, Stage, THREE_WAY_FINAL,
    THREE_WAY_GROUPS, THREE_WAY_QUARTER, THREE_WAY_SEMI, validate_transition,
};
