use std::{
    cmp::Ordering,
    collections::{BTreeSet, btree_set},
    fmt::{self, Debug, Display},
    rc::Rc,
};

use crate::interpreter::value::{
    algebra,
    ordinal::{self, recognize},
};

/// An immutable, finite set of sets.
///
/// Sets are reference counted, so cloning one is cheap and never copies its
/// elements. Elements are kept in the canonical order defined by [`Ord`], so
/// enumeration, display, and every algebra result are independent of the
/// order elements were supplied in.
///
/// A set that is structurally an ordinal (`0 = {}`, `n = {0, ..., n - 1}`)
/// carries its numeral, which makes comparing and printing ordinals O(1).
///
/// # Example
/// ```
/// use mindset::interpreter::value::set::Set;
///
/// let two = Set::from_iter([Set::empty(), Set::singleton(Set::empty())]);
///
/// assert_eq!(two.numeral(), Some(2));
/// assert_eq!(two, Set::ordinal(2));
/// assert_eq!(two.to_string(), "2");
/// ```
#[derive(Clone)]
pub struct Set(Rc<SetNode>);

struct SetNode {
    elements: BTreeSet<Set>,
    numeral:  Option<usize>,
}

impl Set {
    /// Builds a set from its elements, tagging it if it is an ordinal.
    #[must_use]
    pub fn from_elements(elements: BTreeSet<Self>) -> Self {
        let numeral = recognize(&elements);
        Self(Rc::new(SetNode { elements, numeral }))
    }

    /// The empty set, `0`.
    #[must_use]
    pub fn empty() -> Self {
        ordinal::ordinal(0)
    }

    /// The canonical ordinal for `n`.
    #[must_use]
    pub fn ordinal(n: usize) -> Self {
        ordinal::ordinal(n)
    }

    /// The set `{element}`.
    #[must_use]
    pub fn singleton(element: Self) -> Self {
        Self::from_elements(BTreeSet::from([element]))
    }

    /// The Kuratowski pair `{{first}, {first, second}}`.
    ///
    /// When both components are equal this collapses to `{{first}}`.
    #[must_use]
    pub fn pair(first: Self, second: Self) -> Self {
        let both = Self::from_iter([first.clone(), second]);
        Self::from_iter([Self::singleton(first), both])
    }

    /// Returns `self ∪ {self}`.
    ///
    /// The successor of an ordinal `n` is the ordinal `n + 1`; it is tagged
    /// directly instead of being re-recognized.
    #[must_use]
    pub fn successor(&self) -> Self {
        let mut elements = self.0.elements.clone();
        elements.insert(self.clone());
        let numeral = self.0.numeral.map(|n| n + 1);
        Self(Rc::new(SetNode { elements, numeral }))
    }

    /// The numeral of this set, if it is an ordinal.
    #[must_use]
    pub fn numeral(&self) -> Option<usize> {
        self.0.numeral
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.elements.len()
    }

    /// Whether this is the empty set, `0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.elements.is_empty()
    }

    /// Iterates over the elements in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Self> {
        self.0.elements.iter()
    }

    /// The underlying element collection.
    #[must_use]
    pub fn elements(&self) -> &BTreeSet<Self> {
        &self.0.elements
    }

    /// Whether `element` is an element of `self`.
    #[must_use]
    pub fn contains(&self, element: &Self) -> bool {
        self.0.elements.contains(element)
    }

    /// Whether every element of `self` is an element of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.elements.is_subset(&other.0.elements)
    }

    /// Elements of either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_elements(algebra::union(self.elements(), other.elements()))
    }

    /// Elements of both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_elements(algebra::intersection(self.elements(), other.elements()))
    }

    /// Elements of `self` absent from `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_elements(algebra::difference(self.elements(), other.elements()))
    }

    /// The union of all elements of `self` (`+S`).
    #[must_use]
    pub fn big_union(&self) -> Self {
        Self::from_elements(algebra::big_union(self.iter().map(Self::elements)))
    }

    /// The intersection of all elements of `self` (`*S`); empty when `self`
    /// is.
    #[must_use]
    pub fn big_intersection(&self) -> Self {
        Self::from_elements(algebra::big_intersection(self.iter().map(Self::elements)))
    }

    /// Elements occurring in an odd number of the elements of `self` (`-S`).
    ///
    /// # Example
    /// ```
    /// use mindset::interpreter::value::set::Set;
    ///
    /// // The second component of a Kuratowski pair survives a single peel.
    /// let pair = Set::pair(Set::ordinal(0), Set::ordinal(5));
    /// assert_eq!(pair.symmetric_multi_difference(), Set::singleton(Set::ordinal(5)));
    /// ```
    #[must_use]
    pub fn symmetric_multi_difference(&self) -> Self {
        Self::from_elements(algebra::symmetric_multi_difference(self.iter().map(Self::elements)))
    }

    /// The ordinal equal to the number of elements (`$S`).
    #[must_use]
    pub fn cardinality(&self) -> Self {
        Self::ordinal(self.len())
    }

    /// The set of all subsets (`^S`).
    #[must_use]
    pub fn powerset(&self) -> Self {
        algebra::powerset(self.elements()).into_iter()
                                          .map(Self::from_elements)
                                          .collect()
    }
}

impl Default for Set {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Self> for Set {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Set {
    type IntoIter = btree_set::Iter<'a, Set>;
    type Item = &'a Set;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Ord for Set {
    /// Numerals compare directly; everything else compares by cardinality and
    /// then element by element. For two ordinals both orders agree, so the
    /// shortcut never changes an answer.
    fn cmp(&self, other: &Self) -> Ordering {
        if Rc::ptr_eq(&self.0, &other.0) {
            return Ordering::Equal;
        }

        match (self.numeral(), other.numeral()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => self.len()
                     .cmp(&other.len())
                     .then_with(|| self.iter().cmp(other.iter())),
        }
    }
}

impl PartialOrd for Set {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Set {}

impl Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.numeral() {
            return write!(f, "{n}");
        }

        write!(f, "{{")?;

        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{element}")?;
        }

        write!(f, "}}")
    }
}

impl Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({self})")
    }
}
