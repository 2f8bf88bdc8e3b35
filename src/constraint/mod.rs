//! Constraints: predicates bound to error-producing logic.
//!
//! A [`Constraint`] evaluates an input and either succeeds or fails with a
//! [`Summary`](crate::Summary) of caller-defined errors. The standard leaf
//! constraint is [`PredicateConstraint`]; constraints of different concrete
//! types are stored together as [`ErasedConstraint`]s, usually inside a
//! [`ConstraintList`] built with the [`constraints!`](crate::constraints)
//! macro or a [`ConstraintBuilder`](crate::ConstraintBuilder).
//!
//! # Example
//!
//! ```rust
//! use precept::predicate::LengthPredicate;
//! use precept::{Constraint, PredicateConstraint};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Error {
//!     TooShort,
//! }
//!
//! let constraint = PredicateConstraint::new(LengthPredicate::min(8), Error::TooShort);
//!
//! assert!(constraint.evaluate("abcdefgh").is_success());
//!
//! let summary = constraint.evaluate("abc").into_result().unwrap_err();
//! assert_eq!(summary.into_vec(), vec![Error::TooShort]);
//! ```

mod combinators;
mod list;
mod predicate_constraint;
mod traits;

pub use combinators::{CompoundConstraint, OptionalConstraint};
pub use list::ConstraintList;
pub use predicate_constraint::PredicateConstraint;
pub use traits::{Constraint, ErasedConstraint};
