//! # Precept
//!
//! Composable validation rules that report every failure, in order, instead
//! of a single boolean.
//!
//! ## Overview
//!
//! A rule starts life as a [`Predicate`](predicate::Predicate), a pure test
//! over one input. Pairing a predicate with an error producer gives a
//! [`PredicateConstraint`]; constraints of any concrete type are erased into
//! [`ErasedConstraint`]s and composed, in source order, into a flat
//! [`ConstraintList`]. Evaluating a constraint yields stillwater's
//! `Validation`: `Success(())`, or `Failure` carrying a [`Summary`] of the
//! caller's own error values.
//!
//! ## Core Types
//!
//! - [`Predicate`](predicate::Predicate) / [`ErasedPredicate`](predicate::ErasedPredicate):
//!   boolean tests and their type-erased form
//! - [`Constraint`] / [`ErasedConstraint`]: error-reporting rules and their
//!   type-erased form
//! - [`PredicateConstraint`]: the bridge from predicates to errors
//! - [`Summary`]: a non-empty, ordered collection of errors
//! - [`ConstraintList`], [`ConstraintBuilder`], [`constraints!`]: composition
//!
//! ## Example
//!
//! ```rust
//! use precept::predicate::{CharacterSet, CharacterSetPredicate, LengthPredicate};
//! use precept::{constraints, ConstraintList, PredicateConstraint};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum PasswordError {
//!     TooShort,
//!     NoDigit,
//! }
//!
//! let rules: ConstraintList<str, PasswordError> = constraints! {
//!     PredicateConstraint::new(LengthPredicate::min(8), PasswordError::TooShort);
//!     PredicateConstraint::new(
//!         CharacterSetPredicate::any(CharacterSet::Digits),
//!         PasswordError::NoDigit,
//!     );
//! };
//!
//! assert!(rules.evaluate("hunter2hunter2").is_success());
//!
//! // Every failing rule is reported, in order.
//! let summary = rules.evaluate("abc").into_result().unwrap_err();
//! assert_eq!(
//!     summary.into_vec(),
//!     vec![PasswordError::TooShort, PasswordError::NoDigit]
//! );
//! ```

pub mod builder;
pub mod constraint;
pub mod error;
pub mod predicate;

pub use builder::ConstraintBuilder;
pub use constraint::{
    CompoundConstraint, Constraint, ConstraintList, ErasedConstraint, OptionalConstraint,
    PredicateConstraint,
};
pub use error::{Summary, SummaryError};

/// The outcome of evaluating a constraint: success, or a [`Summary`] of errors.
pub type ValidationResult<E> = stillwater::Validation<(), Summary<E>>;
