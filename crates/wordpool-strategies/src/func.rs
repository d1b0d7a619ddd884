//! Closure-backed strategies.

use std::fmt;

use wordpool_core::{HoleList, PlacementStrategy, WordCount, WordOffset};

/// A [`PlacementStrategy`] backed by a closure.
///
/// Built with [`strategy_fn`]. The closure receives the same arguments as
/// [`PlacementStrategy::place`] and must obey the same contract.
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

/// Wrap a closure as a named placement strategy.
///
/// ```
/// use wordpool_core::{HoleList, PlacementStrategy, WordCount};
/// use wordpool_strategies::strategy_fn;
///
/// // First hole that is large enough.
/// let first_fit = strategy_fn("first_fit", |needed: WordCount, holes: &HoleList| {
///     holes.iter().find(|h| h.size >= needed).map(|h| h.offset)
/// });
/// assert_eq!(first_fit.name(), "first_fit");
/// assert_eq!(first_fit.place(WordCount(1), &HoleList::new()), None);
/// ```
pub fn strategy_fn<F>(name: impl Into<String>, f: F) -> FnStrategy<F>
where
    F: Fn(WordCount, &HoleList) -> Option<WordOffset>,
{
    FnStrategy {
        name: name.into(),
        f,
    }
}

impl<F> PlacementStrategy for FnStrategy<F>
where
    F: Fn(WordCount, &HoleList) -> Option<WordOffset>,
{
    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
        (self.f)(needed, holes)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpool_core::Hole;

    #[test]
    fn closure_is_invoked_with_request() {
        let last = strategy_fn("last_hole", |_needed: WordCount, holes: &HoleList| {
            holes.iter().last().map(|h| h.offset)
        });
        let list: HoleList = [
            Hole::new(WordOffset(0), WordCount(2)),
            Hole::new(WordOffset(8), WordCount(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(last.place(WordCount(1), &list), Some(WordOffset(8)));
        assert_eq!(last.name(), "last_hole");
    }

    #[test]
    fn debug_shows_name() {
        let s = strategy_fn("nothing", |_: WordCount, _: &HoleList| None);
        assert!(format!("{s:?}").contains("nothing"));
    }
}
