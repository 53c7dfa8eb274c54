//! Match tiers and the tier-classification cascade.
//!
//! This module implements the five-tier classification that determines how
//! well a candidate string matches a query, from exact case-sensitive
//! equality down to edit-distance similarity, together with the
//! prepared-query fast path used when ranking many candidates against the
//! same query.

use std::borrow::Cow;

use memchr::memmem;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::distance::similarity_normalized;
use crate::segment::initials;

/// The quality tier of a match between a candidate string and a query.
///
/// Tiers are ordered from strongest to weakest:
///
/// | Tier                   | Score | Description                                   |
/// |------------------------|-------|-----------------------------------------------|
/// | `ExactCase`            | 1.0   | Candidate equals the query exactly            |
/// | `ExactCaseInsensitive` | 0.95  | Equal when case is ignored                    |
/// | `Initials`             | 0.9   | Query equals the candidate's word initials    |
/// | `Substring`            | 0.8   | Candidate contains the query, case-insensitive|
/// | `FuzzyDistance(f64)`   | 0..=1 | Normalized edit-distance similarity           |
///
/// Tier order is part of the ranking invariant: a candidate in a stronger
/// tier always outranks one in a weaker tier regardless of numeric score.
/// The four strong tiers carry fixed scores; `FuzzyDistance` carries the
/// continuous similarity it was classified with.
///
/// # Ordering
///
/// `MatchTier` implements [`PartialOrd`] such that stronger matches compare
/// as greater. Two `FuzzyDistance` values compare by their similarity.
#[derive(Debug, Clone, Copy)]
pub enum MatchTier {
    /// Candidate text equals the query character-for-character.
    ExactCase,
    /// Candidate text equals the query once both are case-normalized.
    ExactCaseInsensitive,
    /// The candidate's word initials equal the case-normalized query.
    Initials,
    /// The case-normalized candidate contains the case-normalized query as
    /// a contiguous substring.
    Substring,
    /// Edit-distance similarity in `[0, 1]`; only assigned when the
    /// similarity met the caller's threshold.
    FuzzyDistance(f64),
}

impl MatchTier {
    /// The normalized score for this tier.
    ///
    /// Fixed tiers return their constant; `FuzzyDistance` returns the
    /// similarity it carries. All scores are in `[0, 1]` and the caller's
    /// threshold applies to every one of them.
    pub fn score(&self) -> f64 {
        match self {
            MatchTier::ExactCase => 1.0,
            MatchTier::ExactCaseInsensitive => 0.95,
            MatchTier::Initials => 0.9,
            MatchTier::Substring => 0.8,
            MatchTier::FuzzyDistance(s) => *s,
        }
    }

    /// Integer strength used for tier-dominance comparisons. Higher is
    /// stronger; `FuzzyDistance` is the weakest tier regardless of its
    /// similarity.
    pub(crate) fn strength(&self) -> u8 {
        match self {
            MatchTier::ExactCase => 5,
            MatchTier::ExactCaseInsensitive => 4,
            MatchTier::Initials => 3,
            MatchTier::Substring => 2,
            MatchTier::FuzzyDistance(_) => 1,
        }
    }
}

// Manual `PartialEq` because `f64` does not implement `Eq`; two
// `FuzzyDistance` values are equal iff their similarities are.
impl PartialEq for MatchTier {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MatchTier::FuzzyDistance(a), MatchTier::FuzzyDistance(b)) => a == b,
            _ => self.strength() == other.strength(),
        }
    }
}

// Stronger tiers compare as greater. Within the fuzzy tier, similarity
// decides; a fixed tier always beats `FuzzyDistance`, even at similarity 1.0.
impl PartialOrd for MatchTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (MatchTier::FuzzyDistance(a), MatchTier::FuzzyDistance(b)) => a.partial_cmp(b),
            _ => self.strength().partial_cmp(&other.strength()),
        }
    }
}

/// A candidate retained by the match engine, tagged with its tier.
///
/// `index` is the candidate's position in the input list; `text` borrows the
/// candidate's string as given. The numeric score is derived from the tier
/// via [`MatchTier::score`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch<'a> {
    /// Zero-based position of the candidate in the input list.
    pub index: usize,
    /// The candidate text, case preserved.
    pub text: &'a str,
    /// The strongest tier that applied to this candidate.
    pub tier: MatchTier,
}

impl ScoredMatch<'_> {
    /// The normalized score of this match (see [`MatchTier::score`]).
    pub fn score(&self) -> f64 {
        self.tier.score()
    }
}

/// Strip combining marks from a string unless the caller opted out.
///
/// When `keep_diacritics` is `false`, applies Unicode NFD decomposition and
/// drops combining marks, so `"caf\u{00e9}"` compares as `"cafe"`. Returns
/// [`Cow::Borrowed`] whenever nothing needed to change (ASCII input, or
/// `keep_diacritics` set) and only allocates when marks were removed.
pub fn fold_diacritics(s: &str, keep_diacritics: bool) -> Cow<'_, str> {
    if keep_diacritics || s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Bring a threshold back into the contract range `[0, 1]`.
///
/// Out-of-range values are clamped rather than rejected; the API has no
/// error channel and a keystroke-driven caller must never be interrupted.
/// NaN clamps to 0.0, the permissive end.
pub(crate) fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Lowercase `s` into `buf`, reusing the buffer's allocation.
///
/// ASCII input takes a byte-level path that skips the Unicode case-mapping
/// tables.
fn lowercase_into(s: &str, buf: &mut String) {
    buf.clear();
    buf.reserve(s.len());
    if s.is_ascii() {
        buf.extend(s.as_bytes().iter().map(|&b| b.to_ascii_lowercase() as char));
    } else {
        for c in s.chars() {
            buf.extend(c.to_lowercase());
        }
    }
}

/// Pre-computed query data, built once per match call and shared across all
/// candidate classifications.
///
/// Caches the diacritics-folded query together with its lowercased form (as
/// both a string and a char vector for the distance rows) and its uppercased
/// form for the initials comparison.
pub(crate) struct PreparedQuery {
    /// The query after optional diacritics folding, case preserved.
    prepared: String,
    /// Lowercased form; needle for the substring tier.
    pub(crate) lower: String,
    /// Lowercased form as chars, for the edit-distance rows.
    lower_chars: Vec<char>,
    /// Uppercased form, compared against candidate initials.
    upper: String,
}

impl PreparedQuery {
    pub(crate) fn new(query: &str, keep_diacritics: bool) -> Self {
        let prepared = fold_diacritics(query, keep_diacritics).into_owned();
        let lower = prepared.to_lowercase();
        let lower_chars = lower.chars().collect();
        let upper = prepared.to_uppercase();
        Self {
            prepared,
            lower,
            lower_chars,
            upper,
        }
    }
}

/// Classification hot path: evaluate the tier cascade for one candidate
/// against a prepared query.
///
/// `candidate_buf` is a caller-owned scratch buffer for the lowercased
/// candidate, reused across the ranking loop. `finder` is the substring
/// searcher built from the lowercased query; callers guarantee the query is
/// non-empty. `threshold` has already been clamped and gates only the fuzzy
/// tier here; the fixed-tier retention check belongs to the engine.
pub(crate) fn classify_prepared(
    candidate: &str,
    pq: &PreparedQuery,
    keep_diacritics: bool,
    threshold: f64,
    candidate_buf: &mut String,
    finder: &memmem::Finder<'_>,
) -> Option<MatchTier> {
    let candidate = fold_diacritics(candidate, keep_diacritics);

    // Tier 1: exact, character-for-character.
    if *candidate == *pq.prepared {
        return Some(MatchTier::ExactCase);
    }

    lowercase_into(&candidate, candidate_buf);

    // Tier 2: equal once case is ignored.
    if *candidate_buf == pq.lower {
        return Some(MatchTier::ExactCaseInsensitive);
    }

    // Tier 3: word initials equal the query. Full equality only; a query
    // shorter than the fragment count does not match.
    if initials(&candidate) == pq.upper {
        return Some(MatchTier::Initials);
    }

    // Tier 4: contiguous substring of the lowercased candidate.
    if finder.find(candidate_buf.as_bytes()).is_some() {
        return Some(MatchTier::Substring);
    }

    // Tier 5: edit-distance similarity, gated by the threshold.
    let candidate_chars: Vec<char> = candidate_buf.chars().collect();
    let sim = similarity_normalized(&candidate_chars, &pq.lower_chars);
    if sim >= threshold {
        return Some(MatchTier::FuzzyDistance(sim));
    }

    None
}

/// Classify a single candidate against a query.
///
/// Evaluates the five tiers in order (strongest first) and returns the first
/// that applies, or `None` when the candidate matches no tier. The threshold
/// gates the fuzzy tier: a similarity below it means no classification.
/// An empty query classifies nothing.
///
/// This is the single-candidate entry point; [`fuzzy_match`](crate::fuzzy_match)
/// runs the same cascade over a whole candidate list with the per-query work
/// amortized.
///
/// # Examples
///
/// ```
/// use fuzzymatch::{MatchTier, classify};
///
/// assert_eq!(classify("blue", "blue", 0.7), Some(MatchTier::ExactCase));
/// assert_eq!(classify("BLu", "BLU", 0.7), Some(MatchTier::ExactCaseInsensitive));
/// assert_eq!(classify("Big Lucky Umbrella", "BLU", 0.7), Some(MatchTier::Initials));
/// assert_eq!(classify("blueprint", "BLU", 0.7), Some(MatchTier::Substring));
/// assert!(matches!(classify("candyjane", "candycane", 0.7), Some(MatchTier::FuzzyDistance(_))));
/// assert_eq!(classify("abc", "xyz", 0.7), None);
/// ```
pub fn classify(candidate: &str, query: &str, threshold: f64) -> Option<MatchTier> {
    if query.is_empty() {
        return None;
    }
    let threshold = clamp_threshold(threshold);
    let pq = PreparedQuery::new(query, false);
    if pq.lower.is_empty() {
        return None;
    }
    let finder = memmem::Finder::new(pq.lower.as_bytes());
    let mut buf = String::new();
    classify_prepared(candidate, &pq, false, threshold, &mut buf, &finder)
}
