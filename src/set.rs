use crate::map::{ChainedMultimap, IntoKeys, Keys};
use std::fmt::{self, Debug};
use std::iter::FusedIterator;

/// Set of string keys stored as a separately chained hash table.
///
/// A restriction of [`ChainedMultimap`] to key presence: the same buckets,
/// hash, and resize machinery carry a unit payload, and inserting a value
/// that is already present is rejected instead of appended. Built for fast
/// membership tests over small fixed domains such as allow-lists.
///
/// # Examples
///
/// ```
/// use chained_multimap::ChainedSet;
///
/// let mut set = ChainedSet::new();
/// assert!(set.insert("Texas"));
/// assert!(!set.insert("Texas"));
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains("Texas"));
/// assert!(!set.contains("Ontario"));
/// ```
#[derive(Clone)]
pub struct ChainedSet {
    map: ChainedMultimap<()>,
}

impl ChainedSet {
    /// Creates an empty `ChainedSet` with the default capacity and load
    /// factor threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: ChainedMultimap::new(),
        }
    }

    /// Creates an empty `ChainedSet` with the specified number of buckets
    /// and the default load factor threshold.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: ChainedMultimap::with_capacity(capacity),
        }
    }

    /// Creates an empty `ChainedSet` with the specified number of buckets
    /// and load factor threshold.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, or if `load_factor` is not a positive
    /// finite number.
    #[must_use]
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        Self {
            map: ChainedMultimap::with_capacity_and_load_factor(capacity, load_factor),
        }
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was newly added, `false` if it was
    /// already present (in which case the set is unchanged).
    pub fn insert(&mut self, value: &str) -> bool {
        self.map.insert_distinct(value, ())
    }

    /// Returns `true` if the set contains the value.
    pub fn contains(&self, value: &str) -> bool {
        self.map.contains_key(value)
    }

    /// Clears the set, removing all values. The bucket count is kept.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// An iterator visiting every value exactly once, in bucket order and
    /// then per-bucket insertion order. The iterator element type is
    /// `&'a str`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.map.keys(),
        }
    }
}

impl Default for ChainedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ChainedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> Extend<&'a str> for ChainedSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl Extend<String> for ChainedSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for value in iter {
            self.insert(&value);
        }
    }
}

impl<'a> FromIterator<&'a str> for ChainedSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl FromIterator<String> for ChainedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for ChainedSet {
    fn from(arr: [&'a str; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ChainedSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for ChainedSet {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            iter: self.map.into_keys(),
        }
    }
}

/// An iterator over the values of a `ChainedSet`.
pub struct Iter<'a> {
    iter: Keys<'a, ()>,
}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl FusedIterator for Iter<'_> {}

impl Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the values of a `ChainedSet`.
pub struct IntoIter {
    iter: IntoKeys<()>,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl FusedIterator for IntoIter {}

impl Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.iter.len();
        f.debug_struct("IntoIter").field("remaining", &entries).finish()
    }
}
