//! The placement strategy trait.

use crate::hole::HoleList;
use crate::id::{WordCount, WordOffset};

/// Chooses which hole satisfies an allocation request.
///
/// Called by the engine with the number of words needed and a freshly
/// built hole descriptor. Implementations must be pure functions of their
/// inputs: no state is carried from one call to the next, which is why
/// `place` takes `&self`. The engine may swap strategies between any two
/// calls.
///
/// The returned offset must be the `offset` of one of the holes in
/// `holes`. Return `None` when no hole is acceptable (including when the
/// descriptor is empty). The engine rejects any offset that does not
/// start a hole large enough for the request.
pub trait PlacementStrategy {
    /// Pick the starting offset of the hole to allocate from.
    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset>;

    /// Human-readable name, for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<S: PlacementStrategy + ?Sized> PlacementStrategy for Box<S> {
    fn place(&self, needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
        (**self).place(needed, holes)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::Hole;

    struct FirstHole;

    impl PlacementStrategy for FirstHole {
        fn place(&self, _needed: WordCount, holes: &HoleList) -> Option<WordOffset> {
            holes.iter().next().map(|h| h.offset)
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(FirstHole.name().ends_with("FirstHole"));
    }

    #[test]
    fn boxed_strategy_delegates() {
        let boxed: Box<dyn PlacementStrategy> = Box::new(FirstHole);
        let holes: HoleList = [Hole::new(WordOffset(3), WordCount(2))].into_iter().collect();
        assert_eq!(boxed.place(WordCount(1), &holes), Some(WordOffset(3)));
        assert!(boxed.name().ends_with("FirstHole"));
        assert_eq!(boxed.place(WordCount(1), &HoleList::new()), None);
    }
}
