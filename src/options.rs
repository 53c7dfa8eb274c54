//! Configuration options for match evaluation.
//!
//! [`MatchOptions`] controls comparison normalization applied before any
//! tier is evaluated.

/// Options that control how candidate and query text are normalized before
/// comparison.
///
/// # Defaults
///
/// - `keep_diacritics`: `false` (combining marks are stripped, so "cafe"
///   matches "caf\u{00e9}")
///
/// # Examples
///
/// ```
/// use fuzzymatch::MatchOptions;
///
/// let opts = MatchOptions::default();
/// assert!(!opts.keep_diacritics);
///
/// let opts = MatchOptions { keep_diacritics: true, ..Default::default() };
/// assert!(opts.keep_diacritics);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOptions {
    /// When `true`, diacritics (accents, combining marks) are preserved
    /// during comparison. When `false` (default), they are stripped from
    /// both candidate and query before any tier is evaluated, including
    /// segmentation for the initials tier.
    pub keep_diacritics: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strips_diacritics() {
        assert!(!MatchOptions::default().keep_diacritics);
    }

    #[test]
    fn clone_produces_equal_value() {
        let opts = MatchOptions {
            keep_diacritics: true,
        };
        assert_eq!(opts.clone(), opts);
    }
}
