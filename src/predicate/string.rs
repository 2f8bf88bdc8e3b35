//! String predicates: length bounds and character-set membership.

use std::collections::BTreeSet;

use super::traits::Predicate;

/// Checks that a string's length, in characters, lies within bounds.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Example
///
/// ```rust
/// use precept::predicate::{LengthPredicate, Predicate};
///
/// let p = LengthPredicate::between(3, 5);
/// assert!(!p.evaluate("ab"));
/// assert!(p.evaluate("abc"));
/// assert!(p.evaluate("héllo"));
/// assert!(!p.evaluate("abcdef"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthPredicate {
    min: usize,
    max: usize,
}

impl LengthPredicate {
    /// At least `min` characters.
    pub fn min(min: usize) -> Self {
        Self {
            min,
            max: usize::MAX,
        }
    }

    /// At most `max` characters.
    pub fn max(max: usize) -> Self {
        Self { min: 0, max }
    }

    /// Between `min` and `max` characters, inclusive.
    ///
    /// If `min` is greater than `max` the predicate rejects every input.
    pub fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Exactly `len` characters.
    pub fn exactly(len: usize) -> Self {
        Self { min: len, max: len }
    }

    fn accepts(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

impl Predicate<str> for LengthPredicate {
    #[inline]
    fn evaluate(&self, input: &str) -> bool {
        self.accepts(input)
    }
}

impl Predicate<String> for LengthPredicate {
    #[inline]
    fn evaluate(&self, input: &String) -> bool {
        self.accepts(input)
    }
}

/// A named or custom set of characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharacterSet {
    /// ASCII digits `0-9`.
    Digits,
    /// Alphabetic characters.
    Letters,
    /// Alphabetic or numeric characters.
    Alphanumerics,
    /// Uppercase characters.
    Uppercase,
    /// Lowercase characters.
    Lowercase,
    /// Whitespace characters.
    Whitespace,
    /// ASCII punctuation.
    Punctuation,
    /// An explicit set of characters.
    Custom(BTreeSet<char>),
}

impl CharacterSet {
    /// Builds a custom set from the characters of `chars`.
    pub fn custom(chars: &str) -> Self {
        CharacterSet::Custom(chars.chars().collect())
    }

    /// Returns true if `c` belongs to this set.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterSet::Digits => c.is_ascii_digit(),
            CharacterSet::Letters => c.is_alphabetic(),
            CharacterSet::Alphanumerics => c.is_alphanumeric(),
            CharacterSet::Uppercase => c.is_uppercase(),
            CharacterSet::Lowercase => c.is_lowercase(),
            CharacterSet::Whitespace => c.is_whitespace(),
            CharacterSet::Punctuation => c.is_ascii_punctuation(),
            CharacterSet::Custom(set) => set.contains(&c),
        }
    }
}

/// How a [`CharacterSetPredicate`] relates the input to its set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Membership {
    /// At least one character must be in the set.
    Any,
    /// Every character must be in the set.
    Only,
}

/// Checks a string's characters against a [`CharacterSet`].
///
/// # Example
///
/// ```rust
/// use precept::predicate::{CharacterSet, CharacterSetPredicate, Predicate};
///
/// let has_digit = CharacterSetPredicate::any(CharacterSet::Digits);
/// assert!(has_digit.evaluate("abc1"));
/// assert!(!has_digit.evaluate("abc"));
///
/// let pin = CharacterSetPredicate::only(CharacterSet::Digits);
/// assert!(pin.evaluate("0420"));
/// assert!(!pin.evaluate("04a0"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSetPredicate {
    set: CharacterSet,
    membership: Membership,
}

impl CharacterSetPredicate {
    /// Satisfied when the input contains at least one character from `set`.
    pub fn any(set: CharacterSet) -> Self {
        Self {
            set,
            membership: Membership::Any,
        }
    }

    /// Satisfied when every character of the input belongs to `set`.
    ///
    /// The empty string is vacuously accepted.
    pub fn only(set: CharacterSet) -> Self {
        Self {
            set,
            membership: Membership::Only,
        }
    }

    fn accepts(&self, value: &str) -> bool {
        match self.membership {
            Membership::Any => value.chars().any(|c| self.set.contains(c)),
            Membership::Only => value.chars().all(|c| self.set.contains(c)),
        }
    }
}

impl Predicate<str> for CharacterSetPredicate {
    #[inline]
    fn evaluate(&self, input: &str) -> bool {
        self.accepts(input)
    }
}

impl Predicate<String> for CharacterSetPredicate {
    #[inline]
    fn evaluate(&self, input: &String) -> bool {
        self.accepts(input)
    }
}
