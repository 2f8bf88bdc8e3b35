//! The core constraint trait and its type-erased wrapper.

use std::fmt;
use std::sync::Arc;

use crate::ValidationResult;

/// A rule that evaluates an input and reports failures as structured errors.
///
/// Evaluation is total and side-effect free: a failing input is reported as
/// `Validation::Failure(summary)`, never as a panic. The `Send + Sync` bounds
/// let constraints be stored behind `Arc<dyn Constraint<T, E>>` and evaluated
/// from several threads at once.
pub trait Constraint<T: ?Sized, E>: Send + Sync {
    /// Evaluates `input`, returning every error this constraint produces.
    fn evaluate(&self, input: &T) -> ValidationResult<E>;

    /// Hides the concrete constraint type behind an [`ErasedConstraint`].
    ///
    /// Erasing an `ErasedConstraint` returns it unchanged.
    fn erase(self) -> ErasedConstraint<T, E>
    where
        Self: Sized + 'static,
    {
        ErasedConstraint::new(self)
    }

    /// Appends this constraint to `constraints` in erased form.
    ///
    /// Composite constraints that are plain lists override this to append
    /// their members instead, which keeps composition flat.
    fn compose_into(self, constraints: &mut Vec<ErasedConstraint<T, E>>)
    where
        Self: Sized + 'static,
    {
        constraints.push(self.erase());
    }
}

/// A constraint whose concrete type has been erased.
///
/// Only the input type `T` and error type `E` remain visible, so constraints
/// built from different predicates and error producers can share a
/// collection. Evaluation forwards to the wrapped constraint unchanged.
pub struct ErasedConstraint<T: ?Sized, E> {
    inner: Arc<dyn Constraint<T, E>>,
}

impl<T: ?Sized, E> ErasedConstraint<T, E> {
    /// Wraps `constraint`.
    ///
    /// Prefer [`Constraint::erase`], which avoids re-wrapping values that are
    /// already erased.
    pub fn new<C>(constraint: C) -> Self
    where
        C: Constraint<T, E> + 'static,
    {
        Self {
            inner: Arc::new(constraint),
        }
    }
}

impl<T: ?Sized, E> Constraint<T, E> for ErasedConstraint<T, E> {
    #[inline]
    fn evaluate(&self, input: &T) -> ValidationResult<E> {
        self.inner.evaluate(input)
    }

    fn erase(self) -> ErasedConstraint<T, E> {
        self
    }
}

impl<T: ?Sized, E> Clone for ErasedConstraint<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for ErasedConstraint<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedConstraint").finish_non_exhaustive()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErasedConstraint<str, String>>();
    assert_sync::<ErasedConstraint<str, String>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Summary;
    use stillwater::Validation;

    struct NonZero;

    impl Constraint<i32, &'static str> for NonZero {
        fn evaluate(&self, input: &i32) -> ValidationResult<&'static str> {
            if *input == 0 {
                Validation::Failure(Summary::single("zero"))
            } else {
                Validation::Success(())
            }
        }
    }

    struct Parity;

    impl Constraint<i32, &'static str> for Parity {
        fn evaluate(&self, input: &i32) -> ValidationResult<&'static str> {
            if input % 2 == 0 {
                Validation::Success(())
            } else {
                Validation::Failure(Summary::new(vec!["odd", "not even"]).unwrap())
            }
        }
    }

    #[test]
    fn test_erase_forwards_success_and_failure() {
        let erased = NonZero.erase();

        assert_eq!(erased.evaluate(&1), NonZero.evaluate(&1));
        assert_eq!(erased.evaluate(&0), NonZero.evaluate(&0));
    }

    #[test]
    fn test_erase_keeps_multi_error_summaries() {
        let erased = Parity.erase();
        let summary = erased.evaluate(&3).into_result().unwrap_err();

        assert_eq!(summary.into_vec(), vec!["odd", "not even"]);
    }

    #[test]
    fn test_heterogeneous_collection() {
        let constraints: Vec<ErasedConstraint<i32, &'static str>> =
            vec![NonZero.erase(), Parity.erase()];

        let failures: Vec<_> = constraints
            .iter()
            .filter(|c| c.evaluate(&0).is_failure())
            .collect();
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_erase_is_idempotent() {
        let erased = NonZero.erase();
        let again = erased.clone().erase();

        assert!(Arc::ptr_eq(&erased.inner, &again.inner));
    }

    #[test]
    fn test_compose_into_appends_one_element() {
        let mut constraints = Vec::new();
        NonZero.compose_into(&mut constraints);
        Parity.compose_into(&mut constraints);

        assert_eq!(constraints.len(), 2);
    }
}
