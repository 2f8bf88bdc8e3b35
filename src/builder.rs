//! Declarative composition of constraint lists.
//!
//! Constraints are composed in source order into one flat
//! [`ConstraintList`]. Two equivalent surfaces are provided:
//!
//! - [`ConstraintBuilder`]: an explicit builder with methods for plain,
//!   conditional, optional, and repeated branches
//! - [`constraints!`](crate::constraints): a declarative block that expands
//!   to builder calls
//!
//! Composition flattens: nested blocks and nested lists splice their members
//! into the enclosing list, so the result never contains nested lists and
//! keeps the left-to-right order in which constraints were written. Inactive
//! branches and absent optionals contribute nothing. Composing nothing yields
//! an empty list, which accepts every input.
//!
//! # Example
//!
//! ```rust
//! use precept::predicate::{CharacterSet, CharacterSetPredicate, LengthPredicate};
//! use precept::{ConstraintBuilder, PredicateConstraint};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Error {
//!     TooShort,
//!     NoDigit,
//!     Forbidden(char),
//! }
//!
//! let forbidden = ['$', '%'];
//! let check_length = false;
//!
//! let list = ConstraintBuilder::<str, Error>::new()
//!     .add_if(check_length, |b| {
//!         b.add(PredicateConstraint::new(LengthPredicate::min(8), Error::TooShort))
//!     })
//!     .add(PredicateConstraint::new(
//!         CharacterSetPredicate::any(CharacterSet::Digits),
//!         Error::NoDigit,
//!     ))
//!     .add_each(forbidden, |b, c| {
//!         b.add(PredicateConstraint::block(move |s: &str| !s.contains(c), Error::Forbidden(c)))
//!     })
//!     .build();
//!
//! assert_eq!(list.len(), 3);
//!
//! let summary = list.evaluate("a$b").into_result().unwrap_err();
//! assert_eq!(summary.into_vec(), vec![Error::NoDigit, Error::Forbidden('$')]);
//! ```

use std::fmt;

use crate::constraint::{Constraint, ConstraintList, ErasedConstraint};

/// Builds a flat, ordered [`ConstraintList`].
///
/// Every branch method hands its closure a fresh, empty builder and splices
/// the result into `self`, so each branch is composed independently and then
/// concatenated in the order the methods were called.
pub struct ConstraintBuilder<T: ?Sized, E> {
    constraints: Vec<ErasedConstraint<T, E>>,
}

impl<T: ?Sized, E> ConstraintBuilder<T, E> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Appends a constraint.
    ///
    /// A [`ConstraintList`] is spliced in member by member; any other
    /// constraint is erased and appended as one element.
    pub fn add<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<T, E> + 'static,
    {
        constraint.compose_into(&mut self.constraints);
        self
    }

    /// Appends every constraint produced by `constraints`, in order.
    pub fn add_all<I, C>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Constraint<T, E> + 'static,
    {
        for constraint in constraints {
            constraint.compose_into(&mut self.constraints);
        }
        self
    }

    /// Composes a nested block and splices its constraints in.
    ///
    /// Gated blocks (for example a call wrapped in `#[cfg(...)]`) behave the
    /// same way: when present they contribute their constraints unchanged.
    pub fn add_block<F>(self, block: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let nested = block(Self::new());
        self.append(nested)
    }

    /// Composes `then` only when `condition` holds.
    pub fn add_if<F>(self, condition: bool, then: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            self.add_block(then)
        } else {
            self
        }
    }

    /// Composes `then` when `condition` holds and `otherwise` when it does not.
    pub fn add_if_else<F, G>(self, condition: bool, then: F, otherwise: G) -> Self
    where
        F: FnOnce(Self) -> Self,
        G: FnOnce(Self) -> Self,
    {
        if condition {
            self.add_block(then)
        } else {
            self.add_block(otherwise)
        }
    }

    /// Composes `present` with the contained value when `value` is `Some`.
    ///
    /// An absent value contributes no constraints.
    pub fn add_optional<V, F>(self, value: Option<V>, present: F) -> Self
    where
        F: FnOnce(Self, V) -> Self,
    {
        match value {
            Some(value) => {
                let nested = present(Self::new(), value);
                self.append(nested)
            }
            None => self,
        }
    }

    /// Composes `each` once per item, concatenating the results in order.
    pub fn add_each<I, F>(mut self, items: I, mut each: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(Self, I::Item) -> Self,
    {
        for item in items {
            let nested = each(Self::new(), item);
            self = self.append(nested);
        }
        self
    }

    /// Returns the number of constraints composed so far.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if nothing has been composed yet.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Finishes composition.
    pub fn build(self) -> ConstraintList<T, E> {
        ConstraintList::from(self.constraints)
    }

    fn append(mut self, other: Self) -> Self {
        self.constraints.extend(other.constraints);
        self
    }
}

impl<T: ?Sized, E> Default for ConstraintBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> fmt::Debug for ConstraintBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintBuilder")
            .field("len", &self.constraints.len())
            .finish()
    }
}

/// Composes constraints declaratively into a [`ConstraintList`].
///
/// The body is a sequence of items, each one of:
///
/// - `constraint;` any expression implementing [`Constraint`]; a nested
///   `ConstraintList` is spliced in
/// - `if (condition) { .. }` optionally followed by `else { .. }`
/// - `if let PATTERN = (value) { .. }` optionally followed by `else { .. }`
/// - `for PATTERN in (items) { .. }`
/// - `{ .. }` a nested block
/// - `#[attr] { .. }` a block under an attribute such as `#[cfg(..)]`
///
/// Conditions, values, and iterables are parenthesized. Braced items are not
/// followed by `;`.
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
///     TooLong,
///     NoDigit,
/// }
///
/// let use_length_check = false;
/// let max_len: Option<usize> = Some(16);
///
/// let list: ConstraintList<str, Error> = constraints! {
///     if (use_length_check) {
///         PredicateConstraint::new(LengthPredicate::min(8), Error::TooShort);
///     }
///     if let Some(max) = (max_len) {
///         PredicateConstraint::new(LengthPredicate::max(max), Error::TooLong);
///     }
///     PredicateConstraint::new(CharacterSetPredicate::any(CharacterSet::Digits), Error::NoDigit);
/// };
///
/// assert_eq!(list.len(), 2);
/// assert!(list.evaluate("abc1").is_success());
/// ```
#[macro_export]
macro_rules! constraints {
    ($($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::ConstraintBuilder::new();
        $crate::__compose!(builder; $($body)*);
        builder.build()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __compose {
    ($b:ident;) => {};

    ($b:ident; #[$meta:meta] { $($inner:tt)* } $($rest:tt)*) => {
        #[$meta]
        {
            $b = $b.add_block(|#[allow(unused_mut)] mut $b| {
                $crate::__compose!($b; $($inner)*);
                $b
            });
        }
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; if let $pat:pat = ($value:expr) { $($then:tt)* } else { $($else:tt)* } $($rest:tt)*) => {
        if let $pat = $value {
            $crate::__compose!($b; $($then)*);
        } else {
            $crate::__compose!($b; $($else)*);
        }
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; if let $pat:pat = ($value:expr) { $($then:tt)* } $($rest:tt)*) => {
        if let $pat = $value {
            $crate::__compose!($b; $($then)*);
        }
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; if ($cond:expr) { $($then:tt)* } else { $($else:tt)* } $($rest:tt)*) => {
        $b = $b.add_if_else(
            $cond,
            |#[allow(unused_mut)] mut $b| {
                $crate::__compose!($b; $($then)*);
                $b
            },
            |#[allow(unused_mut)] mut $b| {
                $crate::__compose!($b; $($else)*);
                $b
            },
        );
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; if ($cond:expr) { $($then:tt)* } $($rest:tt)*) => {
        $b = $b.add_if($cond, |#[allow(unused_mut)] mut $b| {
            $crate::__compose!($b; $($then)*);
            $b
        });
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; for $pat:pat in ($items:expr) { $($body:tt)* } $($rest:tt)*) => {
        $b = $b.add_each($items, |#[allow(unused_mut)] mut $b, $pat| {
            $crate::__compose!($b; $($body)*);
            $b
        });
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; { $($inner:tt)* } $($rest:tt)*) => {
        $b = $b.add_block(|#[allow(unused_mut)] mut $b| {
            $crate::__compose!($b; $($inner)*);
            $b
        });
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; $constraint:expr; $($rest:tt)*) => {
        $b = $b.add($constraint);
        $crate::__compose!($b; $($rest)*);
    };

    ($b:ident; $constraint:expr) => {
        $b = $b.add($constraint);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PredicateConstraint;

    /// Each constraint fails with its own tag, so a failing evaluation
    /// reveals the list's order.
    fn tagged(tag: &'static str) -> PredicateConstraint<i32, &'static str> {
        PredicateConstraint::block(|_: &i32| false, tag)
    }

    fn order(list: &ConstraintList<i32, &'static str>) -> Vec<&'static str> {
        match list.evaluate(&0).into_result() {
            Ok(()) => Vec::new(),
            Err(summary) => summary.into_vec(),
        }
    }

    #[test]
    fn test_builder_preserves_order() {
        let list = ConstraintBuilder::new()
            .add(tagged("a"))
            .add(tagged("b"))
            .add(tagged("c"))
            .build();

        assert_eq!(order(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_builder_flattens_nested_blocks() {
        let list = ConstraintBuilder::new()
            .add(tagged("a"))
            .add_block(|b| b.add(tagged("b")).add_block(|b| b.add(tagged("c"))))
            .add(tagged("d"))
            .build();

        assert_eq!(list.len(), 4);
        assert_eq!(order(&list), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_builder_flattens_nested_lists() {
        let inner = ConstraintBuilder::new().add(tagged("b")).add(tagged("c")).build();
        let list = ConstraintBuilder::new()
            .add(tagged("a"))
            .add(inner)
            .add(tagged("d"))
            .build();

        assert_eq!(list.len(), 4);
        assert_eq!(order(&list), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_builder_optional() {
        let absent = ConstraintBuilder::new()
            .add_optional(None::<&'static str>, |b, tag| b.add(tagged(tag)))
            .build();
        assert!(absent.is_empty());

        let present = ConstraintBuilder::new()
            .add_optional(Some("a"), |b, tag| b.add(tagged(tag)))
            .build();
        assert_eq!(order(&present), vec!["a"]);
    }

    #[test]
    fn test_builder_either() {
        let build = |condition| {
            ConstraintBuilder::new()
                .add_if_else(
                    condition,
                    |b| b.add(tagged("then")),
                    |b| b.add(tagged("else1")).add(tagged("else2")),
                )
                .build()
        };

        assert_eq!(order(&build(true)), vec!["then"]);
        assert_eq!(order(&build(false)), vec!["else1", "else2"]);
    }

    #[test]
    fn test_builder_each() {
        let list = ConstraintBuilder::new()
            .add(tagged("start"))
            .add_each(["x", "y"], |b, tag| b.add(tagged(tag)).add(tagged("sep")))
            .build();

        assert_eq!(order(&list), vec!["start", "x", "sep", "y", "sep"]);
    }

    #[test]
    fn test_builder_add_all() {
        let list = ConstraintBuilder::new()
            .add_all(vec![tagged("a"), tagged("b")])
            .build();

        assert_eq!(order(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_builder() {
        let builder: ConstraintBuilder<i32, &'static str> = ConstraintBuilder::default();
        assert!(builder.is_empty());

        let list = builder.build();
        assert!(list.is_empty());
        assert!(list.evaluate(&42).is_success());
    }

    #[test]
    fn test_macro_order_and_flattening() {
        let list: ConstraintList<i32, &'static str> = crate::constraints! {
            tagged("a");
            {
                tagged("b");
                tagged("c");
            }
            tagged("d");
        };

        assert_eq!(list.len(), 4);
        assert_eq!(order(&list), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_macro_branches() {
        let build = |flag: bool, extra: Option<&'static str>| -> ConstraintList<i32, &'static str> {
            crate::constraints! {
                if (flag) {
                    tagged("then");
                } else {
                    tagged("else");
                }
                if let Some(tag) = (extra) {
                    tagged(tag);
                }
                for tag in (["x", "y"]) {
                    tagged(tag);
                }
                tagged("last")
            }
        };

        assert_eq!(order(&build(true, None)), vec!["then", "x", "y", "last"]);
        assert_eq!(
            order(&build(false, Some("extra"))),
            vec!["else", "extra", "x", "y", "last"]
        );
    }

    #[test]
    fn test_macro_cfg_block() {
        let list: ConstraintList<i32, &'static str> = crate::constraints! {
            #[cfg(test)]
            {
                tagged("enabled");
            }
            #[cfg(not(test))]
            {
                tagged("disabled");
            }
        };

        assert_eq!(order(&list), vec!["enabled"]);
    }

    #[test]
    fn test_macro_empty() {
        let list: ConstraintList<i32, &'static str> = crate::constraints! {};
        assert!(list.is_empty());
        assert!(list.evaluate(&0).is_success());
    }
}
