//! # Rulebook Configuration
//!
//! Loading season rulebooks from TOML. The compiled-in season
//! ([`crate::season`]) covers the common case; events running a trial
//! book, or next season's book before a release ships, load the same
//! structure from a file instead.
//!
//! A loaded book passes [`Ruleset::validate`] before it is returned, so
//! a scoring engine never sees a structurally broken book no matter
//! where it came from.
//!
//! ## File format
//!
//! ```toml
//! [penalty]
//! points = 3
//! max_infractions = 6
//!
//! [[missions]]
//! id = "m03"
//!
//! [missions.rule]
//! kind = "additive"
//! clauses = [
//!     { id = "m03_brick_ejected", points = 18 },
//!     { id = "m03_brick_delivered", points = 4 },
//! ]
//! ```
//!
//! The `kind` key selects the rule shape (`exclusive`, `additive`,
//! `gated`, `product`); the remaining keys are that shape's fields.
//! Missions default to enabled; `enabled = false` keeps a pulled
//! mission in the book without letting it score.

use std::path::Path;

use crate::rules::Ruleset;
use crate::types::PodiumError;

/// Parse a rulebook from TOML text and validate it.
///
/// Parse failures and structural defects both surface as
/// `PodiumError::InvalidRuleset`; the message names the offending key
/// or mission.
pub fn ruleset_from_toml(text: &str) -> Result<Ruleset, PodiumError> {
    let ruleset: Ruleset =
        toml::from_str(text).map_err(|e| PodiumError::InvalidRuleset(e.to_string()))?;
    ruleset.validate()?;
    Ok(ruleset)
}

/// Load and validate a rulebook from a TOML file.
pub fn load_ruleset(path: impl AsRef<Path>) -> Result<Ruleset, PodiumError> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| PodiumError::Io(e.to_string()))?;
    ruleset_from_toml(&text)
}

// =============================================================================
// TESTS
// =============================================================================
