//! The standard bridge from boolean predicates to structured errors.

use std::fmt;
use std::sync::Arc;

use stillwater::Validation;

use crate::error::Summary;
use crate::predicate::{BlockPredicate, ErasedPredicate, LazyPredicate, Predicate};
use crate::ValidationResult;

use super::traits::Constraint;

/// Produces the error for a failed input.
type ErrorFn<T, E> = Arc<dyn Fn(&T) -> E + Send + Sync>;

/// A constraint backed by a single predicate.
///
/// Every construction form reduces to the same two parts: an erased
/// predicate and a function from the failing input to an error. Evaluation
/// runs the predicate; on `false` it calls the error function with that same
/// input and fails with a one-element [`Summary`].
///
/// # Construction forms
///
/// | Predicate            | Error                      | Constructor                       |
/// |----------------------|----------------------------|-----------------------------------|
/// | value                | fixed value                | [`new`](Self::new)                |
/// | value                | `Fn(&T) -> E`              | [`with_error`](Self::with_error)  |
/// | value                | `Fn() -> E`                | [`with_error_factory`](Self::with_error_factory) |
/// | `Fn() -> P` producer | `Fn(&T) -> E`              | [`deferred`](Self::deferred)      |
/// | `Fn() -> P` producer | `Fn() -> E`                | [`deferred_with_error_factory`](Self::deferred_with_error_factory) |
/// | `Fn(&T) -> bool`     | fixed value                | [`block`](Self::block)            |
/// | `Fn(&T) -> bool`     | `Fn(&T) -> E`              | [`block_with_error`](Self::block_with_error) |
///
/// # Example
///
/// ```rust
/// use precept::predicate::CharacterSet;
/// use precept::predicate::CharacterSetPredicate;
/// use precept::{Constraint, PredicateConstraint};
///
/// let constraint = PredicateConstraint::with_error(
///     CharacterSetPredicate::any(CharacterSet::Digits),
///     |input: &str| format!("'{}' has no digit", input),
/// );
///
/// let summary = constraint.evaluate("secret").into_result().unwrap_err();
/// assert_eq!(summary.first(), "'secret' has no digit");
/// ```
pub struct PredicateConstraint<T: ?Sized, E> {
    predicate: ErasedPredicate<T>,
    error: ErrorFn<T, E>,
}

impl<T, E> PredicateConstraint<T, E>
where
    T: ?Sized + 'static,
    E: 'static,
{
    fn from_parts(predicate: ErasedPredicate<T>, error: ErrorFn<T, E>) -> Self {
        Self { predicate, error }
    }

    /// Fails with a clone of `error` whenever `predicate` rejects the input.
    pub fn new<P>(predicate: P, error: E) -> Self
    where
        P: Predicate<T> + 'static,
        E: Clone + Send + Sync,
    {
        Self::from_parts(predicate.erase(), Arc::new(move |_: &T| error.clone()))
    }

    /// Fails with `error(input)` whenever `predicate` rejects the input.
    pub fn with_error<P, F>(predicate: P, error: F) -> Self
    where
        P: Predicate<T> + 'static,
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        Self::from_parts(predicate.erase(), Arc::new(error))
    }

    /// Fails with `error()` whenever `predicate` rejects the input.
    pub fn with_error_factory<P, F>(predicate: P, error: F) -> Self
    where
        P: Predicate<T> + 'static,
        F: Fn() -> E + Send + Sync + 'static,
    {
        Self::from_parts(predicate.erase(), Arc::new(move |_: &T| error()))
    }

    /// Like [`with_error`](Self::with_error), but the predicate is produced
    /// by `producer` on first evaluation.
    pub fn deferred<D, P, F>(producer: D, error: F) -> Self
    where
        D: Fn() -> P + Send + Sync + 'static,
        P: Predicate<T> + 'static,
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        Self::with_error(LazyPredicate::new(producer), error)
    }

    /// Like [`with_error_factory`](Self::with_error_factory), but the
    /// predicate is produced by `producer` on first evaluation.
    pub fn deferred_with_error_factory<D, P, F>(producer: D, error: F) -> Self
    where
        D: Fn() -> P + Send + Sync + 'static,
        P: Predicate<T> + 'static,
        F: Fn() -> E + Send + Sync + 'static,
    {
        Self::with_error_factory(LazyPredicate::new(producer), error)
    }

    /// Fails with a clone of `error` whenever `block` returns false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use precept::{Constraint, PredicateConstraint};
    ///
    /// let adult = PredicateConstraint::block(|age: &u32| *age >= 18, "must be an adult");
    /// assert!(adult.evaluate(&21).is_success());
    /// assert!(adult.evaluate(&12).is_failure());
    /// ```
    pub fn block<B>(block: B, error: E) -> Self
    where
        B: Fn(&T) -> bool + Send + Sync + 'static,
        E: Clone + Send + Sync,
    {
        Self::new(BlockPredicate::new(block), error)
    }

    /// Fails with `error(input)` whenever `block` returns false.
    pub fn block_with_error<B, F>(block: B, error: F) -> Self
    where
        B: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        Self::with_error(BlockPredicate::new(block), error)
    }

    /// Returns the predicate this constraint evaluates.
    pub fn predicate(&self) -> &ErasedPredicate<T> {
        &self.predicate
    }
}

impl<T: ?Sized, E> Constraint<T, E> for PredicateConstraint<T, E> {
    fn evaluate(&self, input: &T) -> ValidationResult<E> {
        if self.predicate.evaluate(input) {
            Validation::Success(())
        } else {
            Validation::Failure(Summary::single((self.error)(input)))
        }
    }
}

impl<T: ?Sized, E> Clone for PredicateConstraint<T, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            error: Arc::clone(&self.error),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for PredicateConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}
