//! Constraint combinators.
//!
//! - [`CompoundConstraint`]: evaluates a list of constraints under an
//!   all-of, first-failure, or any-of strategy
//! - [`OptionalConstraint`]: lifts a constraint over `T` to `Option<T>`
//!
//! # Example
//!
//! ```rust
//! use precept::{constraints, CompoundConstraint, Constraint, PredicateConstraint};
//!
//! // An identifier is either a short code or a positive number written out.
//! let id = CompoundConstraint::any_of(constraints! {
//!     PredicateConstraint::block(|s: &str| s.len() == 3, "not a code");
//!     PredicateConstraint::block(|s: &str| s.parse::<u32>().is_ok(), "not a number");
//! });
//!
//! assert!(id.evaluate("abc").is_success());
//! assert!(id.evaluate("12345").is_success());
//!
//! let summary = id.evaluate("nope!").into_result().unwrap_err();
//! assert_eq!(summary.into_vec(), vec!["not a code", "not a number"]);
//! ```

use std::fmt;
use std::sync::Arc;

use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::Summary;
use crate::ValidationResult;

use super::list::ConstraintList;
use super::traits::Constraint;

/// Evaluates a [`ConstraintList`] under a fixed strategy.
pub enum CompoundConstraint<T: ?Sized, E> {
    /// Every member must succeed.
    ///
    /// All members are evaluated and every failing Summary is concatenated in
    /// list order.
    AllOf(ConstraintList<T, E>),

    /// Every member must succeed, stopping at the first failure.
    FirstFailure(ConstraintList<T, E>),

    /// At least one member must succeed.
    ///
    /// Members are evaluated in order, short-circuiting on the first success.
    /// If none succeeds, the Summaries of all members are concatenated. An
    /// empty list succeeds.
    AnyOf(ConstraintList<T, E>),
}

impl<T: ?Sized, E> CompoundConstraint<T, E> {
    /// Requires every constraint in `constraints`, reporting all failures.
    pub fn all_of(constraints: impl Into<ConstraintList<T, E>>) -> Self {
        CompoundConstraint::AllOf(constraints.into())
    }

    /// Requires every constraint in `constraints`, reporting the first failure.
    pub fn first_failure(constraints: impl Into<ConstraintList<T, E>>) -> Self {
        CompoundConstraint::FirstFailure(constraints.into())
    }

    /// Requires at least one constraint in `constraints`.
    pub fn any_of(constraints: impl Into<ConstraintList<T, E>>) -> Self {
        CompoundConstraint::AnyOf(constraints.into())
    }

    /// Returns the member constraints.
    pub fn constraints(&self) -> &ConstraintList<T, E> {
        match self {
            CompoundConstraint::AllOf(list)
            | CompoundConstraint::FirstFailure(list)
            | CompoundConstraint::AnyOf(list) => list,
        }
    }

    fn evaluate_any_of(list: &ConstraintList<T, E>, input: &T) -> ValidationResult<E> {
        let mut summary: Option<Summary<E>> = None;

        for constraint in list {
            match constraint.evaluate(input) {
                Validation::Success(()) => return Validation::Success(()),
                Validation::Failure(errors) => {
                    summary = Some(match summary {
                        Some(acc) => acc.combine(errors),
                        None => errors,
                    });
                }
            }
        }

        match summary {
            Some(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    constraints = list.len(),
                    errors = errors.len(),
                    "no alternative matched"
                );
                Validation::Failure(errors)
            }
            None => Validation::Success(()),
        }
    }
}

impl<T: ?Sized, E> Constraint<T, E> for CompoundConstraint<T, E> {
    fn evaluate(&self, input: &T) -> ValidationResult<E> {
        match self {
            CompoundConstraint::AllOf(list) => list.evaluate(input),
            CompoundConstraint::FirstFailure(list) => list.evaluate_fail_fast(input),
            CompoundConstraint::AnyOf(list) => Self::evaluate_any_of(list, input),
        }
    }
}

impl<T: ?Sized, E> Clone for CompoundConstraint<T, E> {
    fn clone(&self) -> Self {
        match self {
            CompoundConstraint::AllOf(list) => CompoundConstraint::AllOf(list.clone()),
            CompoundConstraint::FirstFailure(list) => CompoundConstraint::FirstFailure(list.clone()),
            CompoundConstraint::AnyOf(list) => CompoundConstraint::AnyOf(list.clone()),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for CompoundConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundConstraint::AllOf(list) => f.debug_tuple("AllOf").field(list).finish(),
            CompoundConstraint::FirstFailure(list) => {
                f.debug_tuple("FirstFailure").field(list).finish()
            }
            CompoundConstraint::AnyOf(list) => f.debug_tuple("AnyOf").field(list).finish(),
        }
    }
}

/// Produces the error for a missing value.
type MissingFn<E> = Arc<dyn Fn() -> E + Send + Sync>;

/// Applies a constraint to the value inside an `Option`.
///
/// `Some(value)` is evaluated against the inner constraint. `None` succeeds,
/// unless the constraint was marked [`required`](Self::required), in which
/// case it fails with the configured error.
///
/// # Example
///
/// ```rust
/// use precept::{Constraint, OptionalConstraint, PredicateConstraint};
///
/// let nickname = OptionalConstraint::new(
///     PredicateConstraint::block(|s: &String| s.len() <= 12, "nickname too long"),
/// );
///
/// assert!(nickname.evaluate(&None).is_success());
/// assert!(nickname.evaluate(&Some("bob".to_string())).is_success());
/// assert!(nickname.evaluate(&Some("bartholomew-the-third".to_string())).is_failure());
///
/// let email = OptionalConstraint::new(
///     PredicateConstraint::block(|s: &String| s.contains('@'), "invalid email"),
/// )
/// .required("email is required");
///
/// let summary = email.evaluate(&None).into_result().unwrap_err();
/// assert_eq!(summary.into_vec(), vec!["email is required"]);
/// ```
pub struct OptionalConstraint<C, E> {
    inner: C,
    missing: Option<MissingFn<E>>,
}

impl<C, E> OptionalConstraint<C, E> {
    /// Wraps `inner`; `None` inputs succeed.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            missing: None,
        }
    }

    /// Makes `None` fail with a clone of `error`.
    pub fn required(self, error: E) -> Self
    where
        E: Clone + Send + Sync + 'static,
    {
        self.required_with(move || error.clone())
    }

    /// Makes `None` fail with `error()`.
    pub fn required_with<F>(mut self, error: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.missing = Some(Arc::new(error));
        self
    }

    /// Returns true if `None` inputs are rejected.
    pub fn is_required(&self) -> bool {
        self.missing.is_some()
    }
}

impl<T, E, C> Constraint<Option<T>, E> for OptionalConstraint<C, E>
where
    C: Constraint<T, E>,
{
    fn evaluate(&self, input: &Option<T>) -> ValidationResult<E> {
        match (input, &self.missing) {
            (Some(value), _) => self.inner.evaluate(value),
            (None, Some(missing)) => Validation::Failure(Summary::single(missing())),
            (None, None) => Validation::Success(()),
        }
    }
}

impl<C: Clone, E> Clone for OptionalConstraint<C, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            missing: self.missing.clone(),
        }
    }
}

impl<C: fmt::Debug, E> fmt::Debug for OptionalConstraint<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionalConstraint")
            .field("inner", &self.inner)
            .field("required", &self.is_required())
            .finish()
    }
}
