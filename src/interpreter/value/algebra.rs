use std::collections::BTreeSet;

use tracing::warn;

/// Above this many elements, `powerset` warns before computing its result.
pub const POWERSET_ADVISORY_THRESHOLD: usize = 32;

/// Returns every element found in either collection.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
///
/// use mindset::interpreter::value::algebra::union;
///
/// let a: BTreeSet<u8> = [1, 2].into();
/// let b: BTreeSet<u8> = [2, 3].into();
///
/// assert_eq!(union(&a, &b), [1, 2, 3].into());
/// ```
#[must_use]
pub fn union<T: Ord + Clone>(left: &BTreeSet<T>, right: &BTreeSet<T>) -> BTreeSet<T> {
    left.union(right).cloned().collect()
}

/// Returns the elements shared by both collections.
#[must_use]
pub fn intersection<T: Ord + Clone>(left: &BTreeSet<T>, right: &BTreeSet<T>) -> BTreeSet<T> {
    left.intersection(right).cloned().collect()
}

/// Returns the elements of `left` that are absent from `right`.
#[must_use]
pub fn difference<T: Ord + Clone>(left: &BTreeSet<T>, right: &BTreeSet<T>) -> BTreeSet<T> {
    left.difference(right).cloned().collect()
}

/// Unions a family of collections.
///
/// An empty family yields an empty collection.
pub fn big_union<'a, T, I>(family: I) -> BTreeSet<T>
    where T: Ord + Clone + 'a,
          I: IntoIterator<Item = &'a BTreeSet<T>>
{
    family.into_iter().flatten().cloned().collect()
}

/// Intersects a family of collections.
///
/// The intersection of an empty family is taken to be the empty collection
/// rather than a universal one.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
///
/// use mindset::interpreter::value::algebra::big_intersection;
///
/// let family: Vec<BTreeSet<u8>> = vec![[1, 2, 3].into(), [2, 3].into(), [3, 4].into()];
/// assert_eq!(big_intersection(&family), [3].into());
///
/// let nothing: Vec<BTreeSet<u8>> = Vec::new();
/// assert!(big_intersection(&nothing).is_empty());
/// ```
pub fn big_intersection<'a, T, I>(family: I) -> BTreeSet<T>
    where T: Ord + Clone + 'a,
          I: IntoIterator<Item = &'a BTreeSet<T>>
{
    let mut members = family.into_iter();
    let Some(first) = members.next() else {
        return BTreeSet::new();
    };

    members.fold(first.clone(), |acc, next| intersection(&acc, next))
}

/// Rolling symmetric difference over a family of collections.
///
/// Produces the elements that occur in an odd number of the operands. The
/// accumulator holds the elements seen an odd number of times so far and
/// toggles membership on every sighting, so the visiting order of the operands
/// does not affect the result.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
///
/// use mindset::interpreter::value::algebra::symmetric_multi_difference;
///
/// let family: Vec<BTreeSet<u8>> = vec![[1, 2].into(), [2, 3].into(), [2].into()];
///
/// // `2` occurs three times, `1` and `3` once each.
/// assert_eq!(symmetric_multi_difference(&family), [1, 2, 3].into());
/// ```
pub fn symmetric_multi_difference<'a, T, I>(family: I) -> BTreeSet<T>
    where T: Ord + Clone + 'a,
          I: IntoIterator<Item = &'a BTreeSet<T>>
{
    let mut odd = BTreeSet::new();

    for operand in family {
        for element in operand {
            if !odd.remove(element) {
                odd.insert(element.clone());
            }
        }
    }

    odd
}

/// Returns every subset of `set`.
///
/// The result always holds `2^|set|` subsets. Past
/// [`POWERSET_ADVISORY_THRESHOLD`] elements a warning is logged first, but the
/// result is still computed in full.
pub fn powerset<T: Ord + Clone>(set: &BTreeSet<T>) -> BTreeSet<BTreeSet<T>> {
    if set.len() > POWERSET_ADVISORY_THRESHOLD {
        warn!(elements = set.len(),
              "computing the powerset of a large set; this will take a very long time");
    }

    let mut subsets = vec![BTreeSet::new()];

    for element in set {
        let extended: Vec<BTreeSet<T>> = subsets.iter()
                                                .map(|subset| {
                                                    let mut subset = subset.clone();
                                                    subset.insert(element.clone());
                                                    subset
                                                })
                                                .collect();
        subsets.extend(extended);
    }

    subsets.into_iter().collect()
}
