//! Closure-backed predicates.

use std::fmt;
use std::marker::PhantomData;

use super::traits::Predicate;

/// A predicate defined by an evaluation block.
///
/// Closures already implement [`Predicate`]; `BlockPredicate` gives the
/// closure a nameable type and pins down the input type, which keeps type
/// inference simple when the block is stored or passed around.
///
/// # Example
///
/// ```rust
/// use precept::predicate::{BlockPredicate, Predicate};
///
/// let even = BlockPredicate::new(|n: &u32| n % 2 == 0);
/// assert!(even.evaluate(&4));
/// assert!(!even.evaluate(&7));
/// ```
pub struct BlockPredicate<T: ?Sized, F> {
    block: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> BlockPredicate<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    /// Creates a predicate from an evaluation block.
    pub fn new(block: F) -> Self {
        Self {
            block,
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Predicate<T> for BlockPredicate<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        (self.block)(input)
    }
}

impl<T: ?Sized, F: Clone> Clone for BlockPredicate<T, F> {
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for BlockPredicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockPredicate").finish_non_exhaustive()
    }
}
