//! # Mission Rules
//!
//! The season rulebook as data. Each mission carries a tagged rule
//! describing how raw observations become points; the evaluator walks
//! these rules and nothing else, so a new season is a new rulebook, not
//! new code.
//!
//! Four rule shapes cover every mission seen so far:
//! - `Exclusive`: one code from an enumerated list scores
//! - `Additive`: independent clauses, achieved ones sum
//! - `Gated`: prerequisite clauses that zero the mission when missed
//! - `Product`: fixed points only when every condition holds

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::{ClauseId, MissionId, PodiumError, Points};

// =============================================================================
// CLAUSES AND CHOICES
// =============================================================================

/// One scoreable clause: a submission key and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// The submission key judges fill in for this clause.
    pub id: ClauseId,
    /// Points awarded when the clause is achieved.
    pub points: Points,
}

impl Clause {
    /// Create a new clause.
    #[must_use]
    pub fn new(id: impl Into<String>, points: i64) -> Self {
        Self {
            id: ClauseId::new(id),
            points: Points::new(points),
        }
    }
}

/// One selectable outcome of an exclusive-choice mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The code a judge submits to select this outcome.
    pub code: String,
    /// Points awarded for this outcome.
    pub points: Points,
}

impl Choice {
    /// Create a new choice.
    #[must_use]
    pub fn new(code: impl Into<String>, points: i64) -> Self {
        Self {
            code: code.into(),
            points: Points::new(points),
        }
    }
}

// =============================================================================
// RULE KINDS
// =============================================================================

/// How one mission turns observations into points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Exactly one outcome from an enumerated list scores. The submitted
    /// code selects it; an unlisted or missing code scores zero.
    Exclusive {
        /// The single submission key carrying the chosen code.
        clause: ClauseId,
        /// The outcomes on offer.
        choices: Vec<Choice>,
    },
    /// Independent clauses; every achieved one adds its points.
    Additive {
        /// The scoreable clauses.
        clauses: Vec<Clause>,
    },
    /// Prerequisite clauses gate the whole mission: if any of them is
    /// not achieved the mission scores zero, no matter which components
    /// were. Otherwise achieved components sum.
    Gated {
        /// Clauses that must all hold before anything counts.
        prerequisites: Vec<ClauseId>,
        /// The scoreable clauses behind the gate.
        components: Vec<Clause>,
    },
    /// Fixed points awarded only when every condition holds.
    Product {
        /// Clauses that must all hold.
        conditions: Vec<ClauseId>,
        /// Points awarded when they do.
        points: Points,
    },
}

impl RuleKind {
    /// Every submission key this rule consults.
    #[must_use]
    pub fn clause_ids(&self) -> Vec<&ClauseId> {
        match self {
            RuleKind::Exclusive { clause, .. } => vec![clause],
            RuleKind::Additive { clauses } => clauses.iter().map(|c| &c.id).collect(),
            RuleKind::Gated {
                prerequisites,
                components,
            } => prerequisites
                .iter()
                .chain(components.iter().map(|c| &c.id))
                .collect(),
            RuleKind::Product { conditions, .. } => conditions.iter().collect(),
        }
    }
}

// =============================================================================
// MISSIONS
// =============================================================================

/// A single mission of the rulebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRule {
    /// The mission id, unique within a rulebook.
    pub id: MissionId,
    /// How the mission scores.
    pub rule: RuleKind,
    /// Disabled missions stay in the book but never score and never
    /// appear in a breakdown.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl MissionRule {
    /// Create an enabled mission.
    #[must_use]
    pub fn new(id: impl Into<String>, rule: RuleKind) -> Self {
        Self {
            id: MissionId::new(id),
            rule,
            enabled: true,
        }
    }

    /// Create a mission that ships disabled.
    #[must_use]
    pub fn disabled(id: impl Into<String>, rule: RuleKind) -> Self {
        Self {
            id: MissionId::new(id),
            rule,
            enabled: false,
        }
    }
}

// =============================================================================
// PENALTIES
// =============================================================================

/// The penalty schedule: a fixed deduction per infraction up to a cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyRule {
    /// Deduction per counted infraction, as a non-negative figure.
    pub points: Points,
    /// Infractions beyond this count are not deducted.
    pub max_infractions: u32,
}

impl PenaltyRule {
    /// Create a new penalty schedule.
    #[must_use]
    pub fn new(points: i64, max_infractions: u32) -> Self {
        Self {
            points: Points::new(points),
            max_infractions,
        }
    }

    /// Total non-negative deduction for a submitted infraction count.
    #[must_use]
    pub fn deduction(&self, infractions: u32) -> Points {
        let counted = i64::from(infractions.min(self.max_infractions));
        Points::new(counted.saturating_mul(self.points.value()))
    }
}

// =============================================================================
// RULESET
// =============================================================================

/// A complete season rulebook: the missions in rulebook order plus the
/// penalty schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// The missions, in the order the rulebook lists them.
    pub missions: Vec<MissionRule>,
    /// The penalty schedule.
    pub penalty: PenaltyRule,
}

impl Ruleset {
    /// Create a new rulebook. Call [`Ruleset::validate`] before scoring
    /// with a book from an untrusted source.
    #[must_use]
    pub fn new(missions: Vec<MissionRule>, penalty: PenaltyRule) -> Self {
        Self { missions, penalty }
    }

    /// The missions that score this season, in rulebook order.
    pub fn enabled_missions(&self) -> impl Iterator<Item = &MissionRule> {
        self.missions.iter().filter(|m| m.enabled)
    }

    /// Look up one mission by id.
    #[must_use]
    pub fn mission(&self, id: &MissionId) -> Option<&MissionRule> {
        self.missions.iter().find(|m| &m.id == id)
    }

    /// The number of missions in the book, disabled ones included.
    #[must_use]
    pub fn mission_count(&self) -> usize {
        self.missions.len()
    }

    /// Check the book for structural defects.
    ///
    /// Mission ids must be unique; clause ids must be unique across the
    /// whole book because score sheets are keyed flat; choice and clause
    /// lists must not be empty; the penalty deduction must not be
    /// negative.
    pub fn validate(&self) -> Result<(), PodiumError> {
        if self.missions.is_empty() {
            return Err(PodiumError::InvalidRuleset("rulebook has no missions".into()));
        }

        let mut mission_ids = BTreeSet::new();
        let mut clause_ids = BTreeSet::new();
        for mission in &self.missions {
            let id = mission.id.as_str();
            if !mission_ids.insert(&mission.id) {
                return Err(PodiumError::InvalidRuleset(format!(
                    "duplicate mission id {id:?}"
                )));
            }

            match &mission.rule {
                RuleKind::Exclusive { choices, .. } => {
                    if choices.is_empty() {
                        return Err(PodiumError::InvalidRuleset(format!(
                            "mission {id:?} offers no choices"
                        )));
                    }
                    let mut codes = BTreeSet::new();
                    for choice in choices {
                        if !codes.insert(choice.code.as_str()) {
                            return Err(PodiumError::InvalidRuleset(format!(
                                "mission {id:?} repeats choice code {:?}",
                                choice.code
                            )));
                        }
                    }
                }
                RuleKind::Additive { clauses } => {
                    if clauses.is_empty() {
                        return Err(PodiumError::InvalidRuleset(format!(
                            "mission {id:?} has no clauses"
                        )));
                    }
                }
                RuleKind::Gated {
                    prerequisites,
                    components,
                } => {
                    if prerequisites.is_empty() {
                        return Err(PodiumError::InvalidRuleset(format!(
                            "mission {id:?} has no prerequisites"
                        )));
                    }
                    if components.is_empty() {
                        return Err(PodiumError::InvalidRuleset(format!(
                            "mission {id:?} has no components"
                        )));
                    }
                }
                RuleKind::Product { conditions, .. } => {
                    if conditions.is_empty() {
                        return Err(PodiumError::InvalidRuleset(format!(
                            "mission {id:?} has no conditions"
                        )));
                    }
                }
            }

            for clause in mission.rule.clause_ids() {
                if !clause_ids.insert(clause.clone()) {
                    return Err(PodiumError::InvalidRuleset(format!(
                        "duplicate clause id {:?}",
                        clause.as_str()
                    )));
                }
            }
        }

        if self.penalty.points.value() < 0 {
            return Err(PodiumError::InvalidRuleset(
                "penalty deduction must not be negative".into(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
