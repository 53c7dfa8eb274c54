#![warn(missing_docs)]

//! Tiered fuzzy string matching and ranking for search-as-you-type.
//!
//! `fuzzymatch` ranks candidate strings against a partial, possibly
//! misspelled query using a 5-tier classification -- exact match,
//! case-insensitive match, word initials, substring, and edit-distance
//! similarity -- filters by a score threshold, and returns the survivors in
//! a deterministic strongest-first order.

/// Match tiers, tier classification, and comparison normalization.
pub mod ranking;

/// Word segmentation and initials derivation.
pub mod segment;

/// Case-insensitive edit distance and normalized similarity.
pub mod distance;

/// Ordering of retained matches.
pub mod sort;

/// The match engine entry points.
pub mod matcher;

/// Configuration options for match evaluation.
pub mod options;

// Re-export primary public API types and functions at the crate root.
pub use distance::{distance, similarity};
pub use matcher::{AsCandidateStr, fuzzy_match, fuzzy_match_with};
pub use options::MatchOptions;
pub use ranking::{MatchTier, ScoredMatch, classify, fold_diacritics};
pub use segment::{Segments, initials, segment};
pub use sort::sort_scored_matches;
