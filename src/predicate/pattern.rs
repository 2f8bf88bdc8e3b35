//! Regular-expression predicates.

use regex::Regex;

use super::traits::Predicate;

/// Checks that the entire input matches a regular expression.
///
/// The pattern is anchored at both ends, so `[0-9]+` rejects `"12a"`.
/// Returns an error if the pattern is invalid.
///
/// # Example
///
/// ```rust
/// use precept::predicate::{Predicate, RegexPredicate};
///
/// let zip = RegexPredicate::new(r"[0-9]{5}").unwrap();
/// assert!(zip.evaluate("90210"));
/// assert!(!zip.evaluate("90210-1234"));
/// ```
#[derive(Clone, Debug)]
pub struct RegexPredicate {
    regex: Regex,
    pattern: String,
}

impl RegexPredicate {
    /// Compiles `pattern` into a whole-input matcher.
    ///
    /// The pattern is checked on its own first, so an input such as
    /// `a)|(b` is rejected instead of being balanced by the anchors.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern)?;
        let regex = match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(regex) => regex,
            // A trailing verbose-mode comment swallowed the anchors; a newline
            // ends the comment and is ignored as whitespace in that mode.
            Err(_) => Regex::new(&format!("^(?:{}\n)$", pattern))?,
        };
        Ok(Self {
            regex,
            pattern: pattern.to_string(),
        })
    }

    /// Returns the pattern as written by the caller, without anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Predicate<str> for RegexPredicate {
    #[inline]
    fn evaluate(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl Predicate<String> for RegexPredicate {
    #[inline]
    fn evaluate(&self, input: &String) -> bool {
        self.regex.is_match(input)
    }
}
