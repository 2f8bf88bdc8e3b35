//! Failure aggregation.
//!
//! A [`Summary`] is what every failed constraint evaluation hands back. It is
//! generic over the caller's error type and never interprets the errors it
//! carries.

use std::fmt::{self, Display};

use stillwater::prelude::*;

/// Errors raised when a [`Summary`] is built from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    /// A summary was requested for an empty error sequence.
    #[error("a summary requires at least one error")]
    Empty,
}

/// A non-empty, ordered collection of validation errors.
///
/// `Summary` wraps a `NonEmptyVec<E>` so a failure can never report zero
/// reasons. Errors keep the order in which the failing constraints ran, so
/// consumers may rely on [`Summary::first`] being the earliest failure.
///
/// # Combining Summaries
///
/// `Summary` implements `Semigroup`; combining concatenates left then right:
///
/// ```rust
/// use precept::Summary;
/// use stillwater::prelude::*;
///
/// let first = Summary::single("too short");
/// let second = Summary::single("missing digit");
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first(), &"too short");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<E>(NonEmptyVec<E>);

impl<E> Summary<E> {
    /// Creates a summary from an ordered sequence of errors.
    ///
    /// Returns [`SummaryError::Empty`] if `errors` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use precept::{Summary, SummaryError};
    ///
    /// let summary = Summary::new(vec![1, 2]).unwrap();
    /// assert_eq!(summary.into_vec(), vec![1, 2]);
    ///
    /// assert_eq!(Summary::<i32>::new(vec![]), Err(SummaryError::Empty));
    /// ```
    pub fn new(errors: Vec<E>) -> Result<Self, SummaryError> {
        NonEmptyVec::from_vec(errors)
            .map(Self)
            .ok_or(SummaryError::Empty)
    }

    /// Creates a summary containing a single error.
    pub fn single(error: E) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a summary from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<E>) -> Self {
        Self(errors)
    }

    /// Returns the number of errors in this summary.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a summary holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first error that was recorded.
    pub fn first(&self) -> &E {
        self.0.head()
    }

    /// Returns the error at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.0.iter().nth(index)
    }

    /// Returns an iterator over the errors in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.0.iter()
    }

    /// Converts this summary into a `Vec<E>`.
    pub fn into_vec(self) -> Vec<E> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<E> {
        &self.0
    }

    /// Returns true if any recorded error equals `error`.
    pub fn contains(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        self.0.iter().any(|e| e == error)
    }
}

impl<E> Semigroup for Summary<E> {
    fn combine(self, other: Self) -> Self {
        Summary(self.0.combine(other.0))
    }
}

impl<E> TryFrom<Vec<E>> for Summary<E> {
    type Error = SummaryError;

    fn try_from(errors: Vec<E>) -> Result<Self, Self::Error> {
        Self::new(errors)
    }
}

impl<E> From<NonEmptyVec<E>> for Summary<E> {
    fn from(errors: NonEmptyVec<E>) -> Self {
        Self(errors)
    }
}

impl<E: Display> Display for Summary<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl<E: Display + fmt::Debug> std::error::Error for Summary<E> {}

impl<E> IntoIterator for Summary<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Summary<E> {
    type Item = &'a E;
    type IntoIter = Box<dyn Iterator<Item = &'a E> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// Summary is Send + Sync whenever its errors are.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Summary<String>>();
    assert_sync::<Summary<String>>();
};
