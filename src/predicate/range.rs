//! Range predicates over ordered values.

use std::ops::{Bound, RangeBounds};

use super::traits::Predicate;

/// Checks that a value falls within a range.
///
/// Any standard range form works: `1..10`, `1..=10`, `..10`, `5..`.
///
/// # Example
///
/// ```rust
/// use precept::predicate::{Predicate, RangePredicate};
///
/// let age = RangePredicate::new(0..=150);
/// assert!(age.evaluate(&30));
/// assert!(!age.evaluate(&-1));
/// assert!(!age.evaluate(&151));
///
/// let ratio = RangePredicate::new(0.0..1.0);
/// assert!(ratio.evaluate(&0.5));
/// assert!(!ratio.evaluate(&1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RangePredicate<N> {
    start: Bound<N>,
    end: Bound<N>,
}

impl<N: Clone> RangePredicate<N> {
    /// Creates a predicate accepting values inside `range`.
    pub fn new<R: RangeBounds<N>>(range: R) -> Self {
        Self {
            start: range.start_bound().cloned(),
            end: range.end_bound().cloned(),
        }
    }
}

impl<N> Predicate<N> for RangePredicate<N>
where
    N: PartialOrd + Send + Sync,
{
    #[inline]
    fn evaluate(&self, input: &N) -> bool {
        (self.start.as_ref(), self.end.as_ref()).contains(input)
    }
}
