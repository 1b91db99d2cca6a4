//! # Stage Advancement
//!
//! Pure bracket arithmetic: who survives a cut, and how the opening
//! scoreboard is grouped for display. Applying a cut to stored records
//! is the tournament facade's job; nothing in this module mutates.
//!
//! All functions take an already-ranked field and trust its order; see
//! [`crate::ranking::rank`].

use crate::roster::Team;
use crate::stage::THREE_WAY_GROUPS;
use crate::types::TeamNumber;

/// The teams that survive a cut: the first `retain` of the ranked field.
#[must_use]
pub fn retained(ranked: &[Team], retain: usize) -> Vec<TeamNumber> {
    ranked.iter().take(retain).map(|t| t.number).collect()
}

/// The teams ranked beyond the cut, in rank order.
///
/// A field no larger than the retain count eliminates nobody.
#[must_use]
pub fn eliminated_beyond(ranked: &[Team], retain: usize) -> Vec<TeamNumber> {
    ranked.iter().skip(retain).map(|t| t.number).collect()
}

/// Split the ranked opening scoreboard into three display groups.
///
/// Groups follow rank order and are as even as possible; when the field
/// does not divide evenly, the earlier groups take the extra teams.
/// Grouping is presentation only and never touches activation.
#[must_use]
pub fn initial_groups(ranked: &[Team]) -> [&[Team]; 3] {
    let quotient = ranked.len() / THREE_WAY_GROUPS;
    let remainder = ranked.len() % THREE_WAY_GROUPS;
    let first = quotient + usize::from(remainder >= 1);
    let second = quotient + usize::from(remainder >= 2);

    let (head, rest) = ranked.split_at(first);
    let (middle, tail) = rest.split_at(second);
    [head, middle, tail]
}

// =============================================================================
// TESTS
// =============================================================================
