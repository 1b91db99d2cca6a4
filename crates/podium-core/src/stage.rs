//! # Competition Stages
//!
//! The knockout ladder of a bracketed tournament: an ordered progression
//! from the open round to the final. Competitions only ever move forward
//! through it; there is no path back to an earlier stage.
//!
//! ## Stage ladder
//!
//! | Stage | Index | Three-way bracket | Single bracket |
//! |-------|-------|-------------------|----------------|
//! | Round 1 | 0 | all teams | all teams |
//! | Round 2 | 1 | not played | 12 teams |
//! | Quarter Final | 2 | 6 teams | 8 teams |
//! | Semi Final | 3 | 4 teams | 4 teams |
//! | Final | 4 | 2 teams | 2 teams |
//!
//! The retain counts above are fixed properties of each format, not
//! event configuration.

use serde::{Deserialize, Serialize};

use crate::types::PodiumError;

// =============================================================================
// RETAIN COUNTS (Fixed Per Format)
// =============================================================================

/// Teams kept when a three-way bracket advances to the quarter final.
pub const THREE_WAY_QUARTER: usize = 6;

/// Teams kept when a three-way bracket advances to the semi final.
pub const THREE_WAY_SEMI: usize = 4;

/// Teams kept when a three-way bracket advances to the final.
pub const THREE_WAY_FINAL: usize = 2;

/// Teams kept when a single bracket advances to round 2.
pub const SINGLE_ROUND_TWO: usize = 12;

/// Teams kept when a single bracket advances to the quarter final.
pub const SINGLE_QUARTER: usize = 8;

/// Teams kept when a single bracket advances to the semi final.
pub const SINGLE_SEMI: usize = 4;

/// Teams kept when a single bracket advances to the final.
pub const SINGLE_FINAL: usize = 2;

/// Display groups the opening scoreboard splits into under the three-way format.
pub const THREE_WAY_GROUPS: usize = 3;

// =============================================================================
// STAGE ENUM
// =============================================================================

/// One rung of the knockout ladder, ordered from earliest to latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// The open qualification round, up to three attempts per team.
    Round1,
    /// The twelve-team second round (single bracket only).
    Round2,
    /// The quarter final.
    QuarterFinal,
    /// The semi final.
    SemiFinal,
    /// The final, two attempts per team.
    Final,
}

impl Stage {
    /// Get the stage name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Round1 => "Round 1",
            Stage::Round2 => "Round 2",
            Stage::QuarterFinal => "Quarter Final",
            Stage::SemiFinal => "Semi Final",
            Stage::Final => "Final",
        }
    }

    /// Get the ladder index of this stage (0 for round 1 through 4 for the final).
    #[must_use]
    pub fn index(&self) -> u8 {
        match self {
            Stage::Round1 => 0,
            Stage::Round2 => 1,
            Stage::QuarterFinal => 2,
            Stage::SemiFinal => 3,
            Stage::Final => 4,
        }
    }

    /// Get the stage for a ladder index, if the index is on the ladder.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Stage> {
        match index {
            0 => Some(Stage::Round1),
            1 => Some(Stage::Round2),
            2 => Some(Stage::QuarterFinal),
            3 => Some(Stage::SemiFinal),
            4 => Some(Stage::Final),
            _ => None,
        }
    }

    /// Get the next stage, if any.
    #[must_use]
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Round1 => Some(Stage::Round2),
            Stage::Round2 => Some(Stage::QuarterFinal),
            Stage::QuarterFinal => Some(Stage::SemiFinal),
            Stage::SemiFinal => Some(Stage::Final),
            Stage::Final => None,
        }
    }

    /// Get the previous stage, if any.
    #[must_use]
    pub fn previous(&self) -> Option<Stage> {
        match self {
            Stage::Round1 => None,
            Stage::Round2 => Some(Stage::Round1),
            Stage::QuarterFinal => Some(Stage::Round2),
            Stage::SemiFinal => Some(Stage::QuarterFinal),
            Stage::Final => Some(Stage::SemiFinal),
        }
    }

    /// Check if this stage is terminal (the final).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Final)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// FORMAT ENUM
// =============================================================================

/// Event formats, differing in bracket depth and scoreboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Regional three-way bracket: no second round, six quarter-finalists,
    /// and an opening scoreboard split into three display groups.
    ThreeWayBracket,
    /// National single bracket: twelve seeds into a second round, then a
    /// conventional eight-team knockout.
    SingleBracket,
}

impl Format {
    /// Get the format name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Format::ThreeWayBracket => "three-way bracket",
            Format::SingleBracket => "single bracket",
        }
    }

    /// Whether this format plays a second round.
    #[must_use]
    pub fn has_round_two(&self) -> bool {
        matches!(self, Format::SingleBracket)
    }

    /// Whether `stage` is played at all under this format.
    #[must_use]
    pub fn supports(&self, stage: Stage) -> bool {
        stage != Stage::Round2 || self.has_round_two()
    }

    /// How many teams stay in contention when advancing into `target`.
    ///
    /// `None` for the open round (everyone plays) and for stages the
    /// format does not play.
    #[must_use]
    pub fn retain_count(&self, target: Stage) -> Option<usize> {
        match (self, target) {
            (_, Stage::Round1) | (Format::ThreeWayBracket, Stage::Round2) => None,
            (Format::ThreeWayBracket, Stage::QuarterFinal) => Some(THREE_WAY_QUARTER),
            (Format::ThreeWayBracket, Stage::SemiFinal) => Some(THREE_WAY_SEMI),
            (Format::ThreeWayBracket, Stage::Final) => Some(THREE_WAY_FINAL),
            (Format::SingleBracket, Stage::Round2) => Some(SINGLE_ROUND_TWO),
            (Format::SingleBracket, Stage::QuarterFinal) => Some(SINGLE_QUARTER),
            (Format::SingleBracket, Stage::SemiFinal) => Some(SINGLE_SEMI),
            (Format::SingleBracket, Stage::Final) => Some(SINGLE_FINAL),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// TRANSITION VALIDATION
// =============================================================================

/// Check that moving from `current` to `target` is legal under `format`.
///
/// A target at or before the current stage is rejected, as is a stage the
/// format never plays. Skipping over a stage is legal; a three-way
/// bracket always jumps straight from round 1 to the quarter final.
pub fn validate_transition(
    format: Format,
    current: Stage,
    target: Stage,
) -> Result<(), PodiumError> {
    if target <= current {
        return Err(PodiumError::IllegalStageTransition {
            from: current,
            to: target,
        });
    }
    if !format.supports(target) {
        return Err(PodiumError::UnsupportedStage {
            format,
            stage: target,
        });
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_ordering() {
        assert!(Stage::Round1 < Stage::Round2);
        assert!(Stage::Round2 < Stage::QuarterFinal);
        assert!(Stage::QuarterFinal < Stage::SemiFinal);
        assert!(Stage::SemiFinal < Stage::Final);
    }

    #[test]
    fn stage_index_round_trips() {
        for index in 0..=4 {
            let stage = Stage::from_index(index).expect("ladder index");
            assert_eq!(stage.index(), index);
        }
        assert_eq!(Stage::from_index(5), None);
    }

    #[test]
    fn next_and_previous_are_inverse() {
        let mut stage = Stage::Round1;
        while let Some(next) = stage.next() {
            assert_eq!(next.previous(), Some(stage));
            stage = next;
        }
        assert!(stage.is_terminal());
    }

    #[test]
    fn three_way_retain_counts() {
        let format = Format::ThreeWayBracket;
        assert_eq!(format.retain_count(Stage::QuarterFinal), Some(6));
        assert_eq!(format.retain_count(Stage::SemiFinal), Some(4));
        assert_eq!(format.retain_count(Stage::Final), Some(2));
        assert_eq!(format.retain_count(Stage::Round2), None);
        assert_eq!(format.retain_count(Stage::Round1), None);
    }

    #[test]
    fn single_bracket_retain_counts() {
        let format = Format::SingleBracket;
        assert_eq!(format.retain_count(Stage::Round2), Some(12));
        assert_eq!(format.retain_count(Stage::QuarterFinal), Some(8));
        assert_eq!(format.retain_count(Stage::SemiFinal), Some(4));
        assert_eq!(format.retain_count(Stage::Final), Some(2));
    }

    #[test]
    fn round_two_only_played_in_single_bracket() {
        assert!(!Format::ThreeWayBracket.supports(Stage::Round2));
        assert!(Format::SingleBracket.supports(Stage::Round2));
        assert!(Format::ThreeWayBracket.supports(Stage::QuarterFinal));
    }

    #[test]
    fn backwards_transition_rejected() {
        let result = validate_transition(Format::SingleBracket, Stage::SemiFinal, Stage::Round2);
        assert!(matches!(
            result,
            Err(PodiumError::IllegalStageTransition { .. })
        ));
    }

    #[test]
    fn transition_to_same_stage_rejected() {
        let result =
            validate_transition(Format::SingleBracket, Stage::QuarterFinal, Stage::QuarterFinal);
        assert!(matches!(
            result,
            Err(PodiumError::IllegalStageTransition { .. })
        ));
    }

    #[test]
    fn three_way_cannot_enter_round_two() {
        let result = validate_transition(Format::ThreeWayBracket, Stage::Round1, Stage::Round2);
        assert!(matches!(result, Err(PodiumError::UnsupportedStage { .. })));
    }

    #[test]
    fn skipping_a_stage_is_legal() {
        assert!(
            validate_transition(Format::ThreeWayBracket, Stage::Round1, Stage::QuarterFinal)
                .is_ok()
        );
        assert!(validate_transition(Format::SingleBracket, Stage::Round1, Stage::Final).is_ok());
    }

    #[test]
    fn stage_display_uses_names() {
        assert_eq!(format!("{}", Stage::Round1), "Round 1");
        assert_eq!(format!("{}", Stage::QuarterFinal), "Quarter Final");
        assert_eq!(format!("{}", Format::ThreeWayBracket), "three-way bracket");
    }
}
