//! Ordered lists of erased constraints.

use std::fmt;

use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::Summary;
use crate::ValidationResult;

use super::traits::{Constraint, ErasedConstraint};

/// An ordered, immutable list of erased constraints.
///
/// The order of the list is the order of evaluation and of the errors in any
/// resulting [`Summary`]. A list may be evaluated any number of times; an
/// empty list accepts every input.
///
/// `ConstraintList` is itself a [`Constraint`]: evaluating it runs every
/// member and concatenates the Summaries of those that fail. Adding a list to
/// a [`ConstraintBuilder`](crate::ConstraintBuilder) splices its members in
/// rather than nesting it.
///
/// # Example
///
/// ```rust
/// use precept::predicate::{CharacterSet, CharacterSetPredicate, LengthPredicate};
/// use precept::{constraints, ConstraintList, PredicateConstraint};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Error {
///     TooShort,
///     NoDigit,
/// }
///
/// let list: ConstraintList<str, Error> = constraints! {
///     PredicateConstraint::new(LengthPredicate::min(8), Error::TooShort);
///     PredicateConstraint::new(CharacterSetPredicate::any(CharacterSet::Digits), Error::NoDigit);
/// };
///
/// let summary = list.evaluate("abc").into_result().unwrap_err();
/// assert_eq!(summary.into_vec(), vec![Error::TooShort, Error::NoDigit]);
///
/// // Stop at the first failure instead.
/// let summary = list.evaluate_fail_fast("abc").into_result().unwrap_err();
/// assert_eq!(summary.into_vec(), vec![Error::TooShort]);
/// ```
pub struct ConstraintList<T: ?Sized, E> {
    constraints: Vec<ErasedConstraint<T, E>>,
}

impl<T: ?Sized, E> ConstraintList<T, E> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Returns the number of constraints in this list.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if the list holds no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns an iterator over the constraints in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErasedConstraint<T, E>> {
        self.constraints.iter()
    }

    /// Returns the constraints as a slice.
    pub fn as_slice(&self) -> &[ErasedConstraint<T, E>] {
        &self.constraints
    }

    /// Converts this list into the underlying `Vec`.
    pub fn into_vec(self) -> Vec<ErasedConstraint<T, E>> {
        self.constraints
    }

    /// Concatenates several lists, preserving the order of lists and members.
    pub fn concat<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = ConstraintList<T, E>>,
    {
        lists.into_iter().flatten().collect()
    }

    /// Evaluates every constraint in order, accumulating all failures.
    ///
    /// Succeeds only if every member succeeds. On failure the Summary holds
    /// each failing member's errors, in list order.
    pub fn evaluate(&self, input: &T) -> ValidationResult<E> {
        let mut summary: Option<Summary<E>> = None;

        for (_index, constraint) in self.constraints.iter().enumerate() {
            if let Validation::Failure(errors) = constraint.evaluate(input) {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = _index, errors = errors.len(), "constraint failed");

                summary = Some(match summary {
                    Some(acc) => acc.combine(errors),
                    None => errors,
                });
            }
        }

        match summary {
            Some(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    constraints = self.constraints.len(),
                    errors = errors.len(),
                    "validation failed"
                );
                Validation::Failure(errors)
            }
            None => Validation::Success(()),
        }
    }

    /// Evaluates constraints in order, stopping at the first failure.
    pub fn evaluate_fail_fast(&self, input: &T) -> ValidationResult<E> {
        for (_index, constraint) in self.constraints.iter().enumerate() {
            if let Validation::Failure(errors) = constraint.evaluate(input) {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = _index, errors = errors.len(), "constraint failed, stopping");
                return Validation::Failure(errors);
            }
        }
        Validation::Success(())
    }
}

impl<T: ?Sized, E> Constraint<T, E> for ConstraintList<T, E> {
    fn evaluate(&self, input: &T) -> ValidationResult<E> {
        ConstraintList::evaluate(self, input)
    }

    fn compose_into(self, constraints: &mut Vec<ErasedConstraint<T, E>>) {
        constraints.extend(self.constraints);
    }
}

impl<T: ?Sized, E> Default for ConstraintList<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> Clone for ConstraintList<T, E> {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for ConstraintList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintList")
            .field("len", &self.constraints.len())
            .finish()
    }
}

impl<T: ?Sized, E> From<Vec<ErasedConstraint<T, E>>> for ConstraintList<T, E> {
    fn from(constraints: Vec<ErasedConstraint<T, E>>) -> Self {
        Self { constraints }
    }
}

impl<T: ?Sized, E> FromIterator<ErasedConstraint<T, E>> for ConstraintList<T, E> {
    fn from_iter<I: IntoIterator<Item = ErasedConstraint<T, E>>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized, E> IntoIterator for ConstraintList<T, E> {
    type Item = ErasedConstraint<T, E>;
    type IntoIter = std::vec::IntoIter<ErasedConstraint<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.into_iter()
    }
}

impl<'a, T: ?Sized, E> IntoIterator for &'a ConstraintList<T, E> {
    type Item = &'a ErasedConstraint<T, E>;
    type IntoIter = std::slice::Iter<'a, ErasedConstraint<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
