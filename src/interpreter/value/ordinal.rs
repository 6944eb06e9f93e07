use std::collections::BTreeSet;

use tracing::trace;

use crate::interpreter::value::set::Set;

/// Number of ordinals built eagerly, `0..ORDINAL_CACHE_SIZE`.
pub const ORDINAL_CACHE_SIZE: usize = 256;

thread_local! {
    static ORDINALS: Vec<Set> = Successors::new(Set::from_elements(BTreeSet::new()))
        .take(ORDINAL_CACHE_SIZE)
        .collect();
}

/// Returns the canonical ordinal for `n`.
///
/// Small ordinals come from a per-thread cache. Larger ones are synthesized by
/// stepping a [`Successors`] builder upward from the last cached ordinal.
///
/// # Example
/// ```
/// use mindset::interpreter::value::ordinal::ordinal;
///
/// let three = ordinal(3);
/// assert_eq!(three.len(), 3);
/// assert_eq!(three.numeral(), Some(3));
/// assert!(three.contains(&ordinal(2)));
///
/// let big = ordinal(300);
/// assert_eq!(big.numeral(), Some(300));
/// ```
#[must_use]
pub fn ordinal(n: usize) -> Set {
    if let Some(cached) = ORDINALS.with(|cache| cache.get(n).cloned()) {
        return cached;
    }

    let start = ORDINALS.with(|cache| cache[ORDINAL_CACHE_SIZE - 1].clone());
    trace!(n, "synthesizing ordinal beyond the cache");
    Successors::new(start).advance(n - (ORDINAL_CACHE_SIZE - 1))
}

/// Recognizes the ordinal a collection of elements spells out, if any.
///
/// `n` distinct elements form the ordinal `n` exactly when each of them is a
/// tagged ordinal below `n`. Because every set is tagged on construction, this
/// also recognizes ordinals that were assembled by hand.
pub(crate) fn recognize(elements: &BTreeSet<Set>) -> Option<usize> {
    let n = elements.len();
    elements.iter()
            .all(|element| element.numeral().is_some_and(|k| k < n))
            .then_some(n)
}

/// Incremental ordinal builder.
///
/// Starting from some set `x`, yields `x`, `x ∪ {x}`, `(x ∪ {x}) ∪ {x ∪ {x}}`,
/// and so on. Each step is a fresh value whose new element is the previous
/// snapshot; nothing ever refers back to itself.
#[derive(Debug, Clone)]
pub struct Successors {
    next: Set,
}

impl Successors {
    /// Creates a builder whose first item is `start`.
    #[must_use]
    pub const fn new(start: Set) -> Self {
        Self { next: start }
    }

    /// Takes `steps` successor steps and returns the set reached.
    #[must_use]
    pub fn advance(mut self, steps: usize) -> Set {
        for _ in 0..steps {
            self.next = self.next.successor();
        }
        self.next
    }
}

impl Iterator for Successors {
    type Item = Set;

    fn next(&mut self) -> Option<Set> {
        let successor = self.next.successor();
        Some(std::mem::replace(&mut self.next, successor))
    }
}
