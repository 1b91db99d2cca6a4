//! # Mission Score Evaluator
//!
//! Turns one raw score sheet into a per-mission breakdown and a floored
//! total. Evaluation is pure and total: any sheet evaluates against any
//! rulebook, malformed observations degrade to zero for the clause they
//! cover, and observation keys no enabled mission consults are ignored.
//!
//! The same sheet against the same rulebook always produces the same
//! breakdown; nothing here reads state or clocks.

use std::collections::BTreeMap;

use crate::rules::{Choice, MissionRule, RuleKind, Ruleset};
use crate::types::{ClauseId, ObservedValue, Points, ScoreBreakdown, ScoreSheet};

/// Stateless scoring engine.
pub struct Evaluator;

impl Evaluator {
    /// Score one sheet against a rulebook.
    ///
    /// Every enabled mission appears in the returned breakdown, scored
    /// and zero-scored alike, so a scoreboard can render the full
    /// mission column without consulting the book again. Disabled
    /// missions are absent even when the sheet carries observations for
    /// them.
    #[must_use]
    pub fn evaluate(ruleset: &Ruleset, sheet: &ScoreSheet) -> ScoreBreakdown {
        let mut missions = BTreeMap::new();
        for mission in ruleset.enabled_missions() {
            missions.insert(mission.id.clone(), Self::mission_score(mission, sheet));
        }

        let deduction = ruleset.penalty.deduction(sheet.infractions());
        ScoreBreakdown::new(missions, deduction)
    }

    /// Score a single mission. Disabled missions always score zero.
    #[must_use]
    pub fn mission_score(mission: &MissionRule, sheet: &ScoreSheet) -> Points {
        if !mission.enabled {
            return Points::ZERO;
        }

        match &mission.rule {
            RuleKind::Exclusive { clause, choices } => {
                Self::exclusive_score(sheet, clause, choices)
            }
            RuleKind::Additive { clauses } => clauses
                .iter()
                .filter(|c| Self::achieved(sheet, &c.id))
                .fold(Points::ZERO, |acc, c| acc.saturating_add(c.points)),
            RuleKind::Gated {
                prerequisites,
                components,
            } => {
                // The gate is checked first; a missed prerequisite zeroes
                // the mission with no partial credit for components.
                if prerequisites.iter().all(|p| Self::achieved(sheet, p)) {
                    components
                        .iter()
                        .filter(|c| Self::achieved(sheet, &c.id))
                        .fold(Points::ZERO, |acc, c| acc.saturating_add(c.points))
                } else {
                    Points::ZERO
                }
            }
            RuleKind::Product { conditions, points } => {
                if conditions.iter().all(|c| Self::achieved(sheet, c)) {
                    *points
                } else {
                    Points::ZERO
                }
            }
        }
    }

    fn exclusive_score(sheet: &ScoreSheet, clause: &ClauseId, choices: &[Choice]) -> Points {
        let Some(observed) = sheet.observation(clause) else {
            return Points::ZERO;
        };
        let Some(code) = observed.as_code() else {
            tracing::debug!(
                "clause {} got a non-code value, scoring zero",
                clause.as_str()
            );
            return Points::ZERO;
        };
        match choices.iter().find(|c| c.code == code) {
            Some(choice) => choice.points,
            None => {
                tracing::debug!(
                    "clause {} got unlisted code {:?}, scoring zero",
                    clause.as_str(),
                    code
                );
                Points::ZERO
            }
        }
    }

    fn achieved(sheet: &ScoreSheet, clause: &ClauseId) -> bool {
        match sheet.observation(clause) {
            Some(value) => {
                if matches!(value, ObservedValue::Code(_)) {
                    tracing::debug!(
                        "clause {} got a code where a flag was expected, treating as not achieved",
                        clause.as_str()
                    );
                }
                value.is_truthy()
            }
            None => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
