//! Predicates: pure boolean tests over a single input value.
//!
//! A [`Predicate`] answers one yes/no question about its input. Predicates of
//! different concrete types are stored together by erasing them into an
//! [`ErasedPredicate`], and are turned into error-reporting rules by
//! [`PredicateConstraint`](crate::PredicateConstraint).
//!
//! # Example
//!
//! ```rust
//! use precept::predicate::{ErasedPredicate, LengthPredicate, Predicate};
//!
//! let predicates: Vec<ErasedPredicate<str>> = vec![
//!     LengthPredicate::min(3).erase(),
//!     (|s: &str| s.starts_with('a')).erase(),
//! ];
//!
//! assert!(predicates.iter().all(|p| p.evaluate("abc")));
//! assert!(!predicates.iter().all(|p| p.evaluate("ab")));
//! ```

mod block;
mod lazy;
mod pattern;
mod range;
mod string;
mod traits;

pub use block::BlockPredicate;
pub use lazy::LazyPredicate;
pub use pattern::RegexPredicate;
pub use range::RangePredicate;
pub use string::{CharacterSet, CharacterSetPredicate, LengthPredicate};
pub use traits::{ErasedPredicate, Predicate};
