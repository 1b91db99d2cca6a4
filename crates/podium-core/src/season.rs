//! # Built-in Season Rulebook
//!
//! The compiled-in rulebook for the current season. This is the one file
//! that changes between seasons; everything else in the crate is
//! season-agnostic. Events running a different book load it from TOML
//! instead (see [`crate::config`]).

use crate::rules::{Choice, Clause, MissionRule, PenaltyRule, RuleKind, Ruleset};
use crate::types::{ClauseId, Points};

/// Deduction per infraction.
pub const PENALTY_POINTS: i64 = 3;

/// Infractions counted before the deduction stops growing.
pub const PENALTY_MAX_INFRACTIONS: u32 = 6;

fn exclusive(id: &str, clause: &str, choices: &[(&str, i64)]) -> MissionRule {
    MissionRule::new(
        id,
        RuleKind::Exclusive {
            clause: ClauseId::new(clause),
            choices: choices
                .iter()
                .map(|(code, points)| Choice::new(*code, *points))
                .collect(),
        },
    )
}

fn additive(id: &str, clauses: &[(&str, i64)]) -> MissionRule {
    MissionRule::new(
        id,
        RuleKind::Additive {
            clauses: clauses
                .iter()
                .map(|(clause, points)| Clause::new(*clause, *points))
                .collect(),
        },
    )
}

/// Build the current season's rulebook.
///
/// Fifteen missions plus the penalty schedule. Mission 14 ships disabled:
/// its rule was pulled mid-season and submissions against it must not
/// score until a corrected wording lands.
#[must_use]
pub fn rulebook() -> Ruleset {
    let missions = vec![
        // Payload run: nothing counts unless the cart rolled unassisted.
        MissionRule::new(
            "m01",
            RuleKind::Gated {
                prerequisites: vec![ClauseId::new("m01_unassisted")],
                components: vec![
                    Clause::new("m01_crew_payload", 10),
                    Clause::new("m01_supply_payload", 14),
                    Clause::new("m01_vehicle_payload", 22),
                ],
            },
        ),
        exclusive(
            "m02",
            "m02_panel",
            &[("own_field", 18), ("shared_field", 22)],
        ),
        additive(
            "m03",
            &[("m03_brick_ejected", 18), ("m03_brick_delivered", 4)],
        ),
        // Crossing scores as one bundle: both conditions or nothing.
        MissionRule::new(
            "m04",
            RuleKind::Product {
                conditions: vec![
                    ClauseId::new("m04_crossing_complete"),
                    ClauseId::new("m04_gate_flattened"),
                ],
                points: Points::new(20),
            },
        ),
        additive(
            "m05",
            &[
                ("m05_all_samples_freed", 16),
                ("m05_gas_sample_in_circle", 12),
                ("m05_gas_sample_in_base", 12),
                ("m05_water_sample_supported", 12),
            ],
        ),
        additive(
            "m06",
            &[
                ("m06_cone_in_base", 16),
                ("m06_tube_docked_west", 16),
                ("m06_module_docked_east", 14),
            ],
        ),
        exclusive(
            "m07",
            "m07_rescue",
            &[("outside", 0), ("partial", 18), ("complete", 22)],
        ),
        exclusive(
            "m08",
            "m08_pointer",
            &[("none", 0), ("grey", 18), ("white", 20), ("orange", 22)],
        ),
        exclusive("m09", "m09_bar_lifted", &[("no", 0), ("yes", 16)]),
        exclusive("m10", "m10_weight_dropped", &[("no", 0), ("yes", 16)]),
        exclusive("m11", "m11_craft_held", &[("no", 0), ("yes", 24)]),
        exclusive(
            "m12",
            "m12_satellites",
            &[("none", 0), ("one", 8), ("two", 16), ("three", 24)],
        ),
        exclusive(
            "m13",
            "m13_dial",
            &[("none", 0), ("grey", 16), ("white", 18), ("orange", 20)],
        ),
        MissionRule::disabled(
            "m14",
            RuleKind::Exclusive {
                clause: ClauseId::new("m14_deflection"),
                choices: vec![
                    Choice::new("none", 0),
                    Choice::new("side_one", 8),
                    Choice::new("centre_one", 12),
                    Choice::new("side_both", 16),
                    Choice::new("split", 20),
                    Choice::new("centre_both", 24),
                ],
            },
        ),
        exclusive(
            "m15",
            "m15_lander",
            &[
                ("missed", 0),
                ("in_base", 16),
                ("on_target_area", 20),
                ("in_target_circle", 22),
            ],
        ),
    ];

    Ruleset::new(missions, PenaltyRule::new(PENALTY_POINTS, PENALTY_MAX_INFRACTIONS))
}

// =============================================================================
// TESTS
// =============================================================================
