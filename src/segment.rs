//! Word segmentation for identifier-like and delimiter-separated strings.
//!
//! [`segment`] splits a string into word fragments at delimiter characters
//! and camelCase transitions; [`initials`] derives the uppercased
//! first-character-of-each-fragment string used by the initials match tier.

/// Returns whether `c` separates words rather than belonging to one.
///
/// Hyphen, underscore, and whitespace are the canonical delimiters; every
/// other non-alphanumeric character behaves the same way, so fragments are
/// always purely alphanumeric.
fn is_delimiter(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Iterator over the word fragments of a string.
///
/// Produced by [`segment`]. Yields non-empty `&str` slices of the input in
/// left-to-right order. The iterator is lazy and borrows the input; clone it
/// to restart from the beginning.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // Skip the delimiter run (if any) preceding the next fragment.
        let start = self
            .rest
            .char_indices()
            .find(|&(_, c)| !is_delimiter(c))
            .map(|(i, _)| i)?;
        self.rest = &self.rest[start..];

        // Walk the fragment until a delimiter or a lowercase-to-uppercase
        // transition. Consecutive uppercase (or lowercase) letters stay in
        // the same fragment.
        let mut prev: Option<char> = None;
        let mut end = self.rest.len();
        for (i, c) in self.rest.char_indices() {
            if is_delimiter(c) {
                end = i;
                break;
            }
            if let Some(p) = prev
                && p.is_lowercase()
                && c.is_uppercase()
            {
                end = i;
                break;
            }
            prev = Some(c);
        }

        let (fragment, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(fragment)
    }
}

/// Split a string into word fragments.
///
/// Boundaries are delimiter characters (hyphen, underscore, whitespace, and
/// other non-alphanumerics -- consumed and discarded) and
/// lowercase-to-uppercase transitions (both sides retained). Concatenating
/// the fragments reconstructs the alphanumeric content of the input in
/// order.
///
/// # Examples
///
/// ```
/// use fuzzymatch::segment;
///
/// let frags: Vec<&str> = segment("candyDay").collect();
/// assert_eq!(frags, ["candy", "Day"]);
///
/// let frags: Vec<&str> = segment("jungle-adventure").collect();
/// assert_eq!(frags, ["jungle", "adventure"]);
///
/// assert_eq!(segment("").count(), 0);
/// ```
pub fn segment(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Derive the initials of a string: the first character of each word
/// fragment, concatenated and uppercased.
///
/// # Examples
///
/// ```
/// use fuzzymatch::initials;
///
/// assert_eq!(initials("Big Lucky Umbrella"), "BLU");
/// assert_eq!(initials("fuzzy_match"), "FM");
/// assert_eq!(initials("FuzzyMatch"), "FM");
/// assert_eq!(initials(""), "");
/// ```
pub fn initials(text: &str) -> String {
    segment(text)
        .filter_map(|fragment| fragment.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
