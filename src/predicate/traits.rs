//! The core predicate trait and its type-erased wrapper.

use std::fmt;
use std::sync::Arc;

/// A pure boolean proposition about one input value.
///
/// Implementations must be total and deterministic: the same input always
/// produces the same answer and evaluation has no observable side effects.
/// The `Send + Sync` bounds let predicates be shared across threads and
/// stored behind `Arc<dyn Predicate<T>>`.
///
/// Any `Fn(&T) -> bool + Send + Sync` closure is a predicate.
///
/// # Example
///
/// ```rust
/// use precept::predicate::Predicate;
///
/// let has_digit = |s: &str| s.chars().any(|c| c.is_ascii_digit());
/// assert!(has_digit.evaluate("abc1"));
/// assert!(!has_digit.evaluate("abc"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Returns true if `input` satisfies this predicate.
    fn evaluate(&self, input: &T) -> bool;

    /// Hides the concrete predicate type behind an [`ErasedPredicate`].
    ///
    /// Erasing an `ErasedPredicate` returns it unchanged.
    fn erase(self) -> ErasedPredicate<T>
    where
        Self: Sized + 'static,
    {
        ErasedPredicate::new(self)
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self(input)
    }
}

/// A predicate whose concrete type has been erased.
///
/// `ErasedPredicate` forwards every evaluation to the predicate it wraps, so
/// `p.erase().evaluate(x) == p.evaluate(x)` for every input. Cloning is cheap
/// and shares the wrapped (immutable) predicate.
pub struct ErasedPredicate<T: ?Sized> {
    inner: Arc<dyn Predicate<T>>,
}

impl<T: ?Sized> ErasedPredicate<T> {
    /// Wraps `predicate`.
    ///
    /// Prefer [`Predicate::erase`], which avoids re-wrapping values that are
    /// already erased.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Self {
            inner: Arc::new(predicate),
        }
    }
}

impl<T: ?Sized> Predicate<T> for ErasedPredicate<T> {
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self.inner.evaluate(input)
    }

    fn erase(self) -> ErasedPredicate<T> {
        self
    }
}

impl<T: ?Sized> Clone for ErasedPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ErasedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedPredicate").finish_non_exhaustive()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErasedPredicate<str>>();
    assert_sync::<ErasedPredicate<str>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    struct MinLength(usize);

    impl Predicate<str> for MinLength {
        fn evaluate(&self, input: &str) -> bool {
            input.chars().count() >= self.0
        }
    }

    #[test]
    fn test_closure_is_predicate() {
        let positive = |n: &i32| *n > 0;
        assert!(positive.evaluate(&5));
        assert!(!positive.evaluate(&-5));
    }

    #[test]
    fn test_erase_forwards_evaluation() {
        let erased = MinLength(8).erase();

        for input in ["", "abc", "abcdefg", "abcdefgh", "abcdefghijk"] {
            assert_eq!(erased.evaluate(input), MinLength(8).evaluate(input));
        }
    }

    #[test]
    fn test_heterogeneous_collection() {
        let predicates: Vec<ErasedPredicate<str>> = vec![
            MinLength(2).erase(),
            (|s: &str| s.ends_with('!')).erase(),
        ];

        assert!(predicates.iter().all(|p| p.evaluate("hi!")));
        assert!(!predicates.iter().all(|p| p.evaluate("hi")));
    }

    #[test]
    fn test_erase_is_idempotent() {
        let erased = MinLength(1).erase();
        let again = erased.clone().erase();

        assert!(Arc::ptr_eq(&erased.inner, &again.inner));
    }

    #[test]
    fn test_clone_shares_predicate() {
        let erased = MinLength(3).erase();
        let cloned = erased.clone();

        assert!(cloned.evaluate("abc"));
        assert!(!cloned.evaluate("ab"));
    }
}
