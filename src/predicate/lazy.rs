//! Deferred predicate construction.

use std::fmt;
use std::sync::OnceLock;

use super::traits::{ErasedPredicate, Predicate};

/// A predicate built on first use.
///
/// `LazyPredicate` holds a producer instead of a predicate. The producer runs
/// at most once, the first time the predicate is evaluated, and the result is
/// cached for every later evaluation. Useful when building the predicate is
/// expensive (a large character set, a compiled pattern) and the rule may
/// never be evaluated.
///
/// # Example
///
/// ```rust
/// use precept::predicate::{LazyPredicate, LengthPredicate, Predicate};
///
/// let lazy = LazyPredicate::new(|| LengthPredicate::min(3));
/// assert!(!lazy.is_initialized());
///
/// assert!(lazy.evaluate("abc"));
/// assert!(lazy.is_initialized());
/// ```
pub struct LazyPredicate<T: ?Sized, F> {
    producer: F,
    predicate: OnceLock<ErasedPredicate<T>>,
}

impl<T: ?Sized, F> LazyPredicate<T, F> {
    /// Creates a predicate that will be produced by `producer` on first use.
    pub fn new(producer: F) -> Self {
        Self {
            producer,
            predicate: OnceLock::new(),
        }
    }

    /// Returns true once the producer has run.
    pub fn is_initialized(&self) -> bool {
        self.predicate.get().is_some()
    }
}

impl<T, F, P> Predicate<T> for LazyPredicate<T, F>
where
    T: ?Sized + 'static,
    F: Fn() -> P + Send + Sync,
    P: Predicate<T> + 'static,
{
    fn evaluate(&self, input: &T) -> bool {
        self.predicate
            .get_or_init(|| (self.producer)().erase())
            .evaluate(input)
    }
}

impl<T: ?Sized, F> fmt::Debug for LazyPredicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyPredicate")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
