//! Ordering of retained matches.
//!
//! Provides the three-level comparator used by the match engine: tier
//! strength (strongest first), score (descending), then original index
//! (ascending) as the final tie-break, making the output a total,
//! deterministic order.

use std::cmp::Ordering;

use crate::ranking::ScoredMatch;

/// Three-level comparator for retained matches.
///
/// 1. **Stronger tier first** -- tier dominance is absolute: a stronger tier
///    sorts earlier regardless of numeric score.
/// 2. **Higher score first** -- within the fuzzy tier this orders by
///    similarity; fixed tiers all share one score, so it never reorders them.
/// 3. **Lower original index first** -- candidates that tie on both sort in
///    input order, keeping the result deterministic.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fuzzymatch::{MatchTier, ScoredMatch, sort_scored_matches};
///
/// let initials = ScoredMatch { index: 1, text: "Big Lucky Umbrella", tier: MatchTier::Initials };
/// let substring = ScoredMatch { index: 0, text: "blue", tier: MatchTier::Substring };
///
/// // Initials outranks Substring even though "blue" comes first in the input.
/// assert_eq!(sort_scored_matches(&initials, &substring), Ordering::Less);
/// ```
pub fn sort_scored_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.tier
        .strength()
        .cmp(&a.tier.strength())
        // Scores are in [0, 1], never NaN; indeterminate comparison would
        // only mean equality here anyway.
        .then_with(|| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal))
        .then_with(|| a.index.cmp(&b.index))
}
