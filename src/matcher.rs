//! The match engine entry points.
//!
//! [`fuzzy_match`] ranks a list of candidate strings against a query and
//! returns the retained `(index, text)` pairs, strongest first.
//! [`AsCandidateStr`] lets the candidate list hold any string-like type.

use std::borrow::Cow;

use memchr::memmem;

use crate::options::MatchOptions;
use crate::ranking::{MatchTier, PreparedQuery, ScoredMatch, clamp_threshold, classify_prepared};
use crate::sort::sort_scored_matches;

/// Trait for types usable as match candidates.
///
/// Implementors expose their text via [`as_candidate_str`](AsCandidateStr::as_candidate_str),
/// so a candidate list can be `&[&str]`, `&[String]`, or `&[Cow<'_, str>]`
/// without conversion.
///
/// # Examples
///
/// ```
/// use fuzzymatch::AsCandidateStr;
///
/// let owned = String::from("hello");
/// assert_eq!(owned.as_candidate_str(), "hello");
///
/// let borrowed: &str = "world";
/// assert_eq!(borrowed.as_candidate_str(), "world");
/// ```
pub trait AsCandidateStr {
    /// Returns the candidate's text.
    fn as_candidate_str(&self) -> &str;
}

impl AsCandidateStr for String {
    fn as_candidate_str(&self) -> &str {
        self.as_str()
    }
}

impl AsCandidateStr for str {
    fn as_candidate_str(&self) -> &str {
        self
    }
}

// Explicit impl so `T = &str` satisfies the bound without the caller
// double-referencing.
impl AsCandidateStr for &str {
    fn as_candidate_str(&self) -> &str {
        self
    }
}

impl AsCandidateStr for Cow<'_, str> {
    fn as_candidate_str(&self) -> &str {
        self.as_ref()
    }
}

/// Rank candidates against a query and return the plausible matches,
/// strongest first.
///
/// Each candidate is classified into the strongest applicable tier
/// ([`MatchTier`]); its tier score must be at least `threshold` to be
/// retained. Retained matches are ordered by tier strength, then score
/// (descending), then original index, and projected to
/// `(original_index, text)` pairs. The result is always a list, possibly of
/// length one or empty.
///
/// The call is a pure function of its inputs: no state is held across
/// calls, the candidate list is never mutated, and identical inputs always
/// produce the identical sequence.
///
/// An exact, case-sensitive match is returned on its own: the first
/// candidate equal to the query suppresses every weaker match, so typing a
/// title verbatim yields exactly that title.
///
/// A threshold outside `[0, 1]` is clamped into range (NaN counts as 0.0).
/// There is no error channel: the signatures leave no room for a missing
/// candidate list, a missing query, or a non-string element, so the
/// function is total and infallible.
///
/// # Examples
///
/// ```
/// use fuzzymatch::fuzzy_match;
///
/// let words = ["foo", "bar", "abc"];
/// assert_eq!(fuzzy_match(&words, "foo", 0.7), vec![(0, "foo")]);
///
/// // Misspelled queries fall back to edit-distance similarity.
/// let words = ["candyjake", "candyjane", "abc"];
/// assert_eq!(
///     fuzzy_match(&words, "candycane", 0.7),
///     vec![(1, "candyjane"), (0, "candyjake")],
/// );
///
/// // Empty inputs yield empty results.
/// assert_eq!(fuzzy_match(&words, "", 0.7), vec![]);
/// ```
pub fn fuzzy_match<'a, T: AsCandidateStr>(
    candidates: &'a [T],
    query: &str,
    threshold: f64,
) -> Vec<(usize, &'a str)> {
    fuzzy_match_with(candidates, query, threshold, &MatchOptions::default())
}

/// [`fuzzy_match`] with explicit normalization options.
///
/// # Examples
///
/// ```
/// use fuzzymatch::{MatchOptions, fuzzy_match_with};
///
/// let words = ["caf\u{00e9}", "cafeteria"];
///
/// // Default options fold diacritics: "cafe" finds the accented entry.
/// let opts = MatchOptions::default();
/// let results = fuzzy_match_with(&words, "cafe", 0.7, &opts);
/// assert_eq!(results[0], (0, "caf\u{00e9}"));
///
/// // Keeping diacritics makes the accented entry a weaker match.
/// let opts = MatchOptions { keep_diacritics: true, ..Default::default() };
/// let results = fuzzy_match_with(&words, "cafe", 0.7, &opts);
/// assert_eq!(results[0], (1, "cafeteria"));
/// ```
pub fn fuzzy_match_with<'a, T: AsCandidateStr>(
    candidates: &'a [T],
    query: &str,
    threshold: f64,
    options: &MatchOptions,
) -> Vec<(usize, &'a str)> {
    if candidates.is_empty() || query.is_empty() {
        return Vec::new();
    }

    let threshold = clamp_threshold(threshold);
    let pq = PreparedQuery::new(query, options.keep_diacritics);
    // A query of nothing but combining marks folds to nothing; treat it
    // like the empty query it has become.
    if pq.lower.is_empty() {
        return Vec::new();
    }
    let finder = memmem::Finder::new(pq.lower.as_bytes());
    let mut candidate_buf = String::new();

    let mut matches: Vec<ScoredMatch<'a>> = Vec::new();
    for (index, item) in candidates.iter().enumerate() {
        let text = item.as_candidate_str();
        let Some(tier) = classify_prepared(
            text,
            &pq,
            options.keep_diacritics,
            threshold,
            &mut candidate_buf,
            &finder,
        ) else {
            continue;
        };

        // The threshold applies to every tier, not only the fuzzy one; a
        // threshold near 1.0 can exclude a Substring or Initials match.
        if tier.score() < threshold {
            continue;
        }

        // An exact match stands alone: return it and drop everything weaker.
        if let MatchTier::ExactCase = tier {
            return vec![(index, text)];
        }

        matches.push(ScoredMatch { index, text, tier });
    }

    matches.sort_by(sort_scored_matches);
    matches.into_iter().map(|m| (m.index, m.text)).collect()
}
