use crate::hash::bucket_index;
use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// Initial capacity used by [`ChainedMultimap::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Load factor threshold used when none is given.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.7;

/// One chain slot: a key together with every value inserted under it,
/// in arrival order.
#[derive(Clone)]
struct Entry<V> {
    key: String,
    values: Vec<V>,
}

/// Multimap from string keys to ordered value sequences, stored as a
/// separately chained hash table.
///
/// Each distinct key owns exactly one entry; inserting under an existing key
/// appends to that entry's value sequence rather than creating a second one.
/// Buckets are plain vectors, so the map owns all entry storage outright and
/// `clear` never walks per-node allocations.
///
/// When the ratio of distinct keys to buckets exceeds the load factor
/// threshold, the table doubles its capacity and rehashes every entry under
/// the new size. The hash is reduced modulo the capacity directly, so a
/// resize relocates entries rather than splitting buckets in place.
///
/// # Examples
///
/// ```
/// use chained_multimap::ChainedMultimap;
///
/// let mut map = ChainedMultimap::new();
/// map.insert("Texas", 4.2);
/// map.insert("Texas", 3.1);
/// map.insert("Nevada", 2.5);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("Texas"), Some(&[4.2, 3.1][..]));
/// ```
#[derive(Clone)]
pub struct ChainedMultimap<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
    load_factor: f64,
}

impl<V> ChainedMultimap<V> {
    /// Creates an empty `ChainedMultimap` with the default capacity and load
    /// factor threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_and_load_factor(DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty `ChainedMultimap` with the specified number of
    /// buckets and the default load factor threshold.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty `ChainedMultimap` with the specified number of
    /// buckets and load factor threshold.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, or if `load_factor` is not a positive
    /// finite number.
    #[must_use]
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(capacity > 0, "capacity must be nonzero");
        assert!(
            load_factor > 0.0 && load_factor.is_finite(),
            "load factor must be positive and finite"
        );

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);

        Self {
            buckets,
            len: 0,
            load_factor,
        }
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor threshold that triggers a resize.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the number of distinct keys in the map, independent of how
    /// many values each key holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present, `value` is appended to its value
    /// sequence and [`len`](Self::len) does not change. Otherwise a new entry
    /// is created. May grow the table before returning, which relocates
    /// every entry.
    pub fn insert(&mut self, key: &str, value: V) {
        let index = bucket_index(key, self.buckets.len());

        if let Some(entry) = self.buckets[index].iter_mut().find(|entry| entry.key == key) {
            entry.values.push(value);
            return;
        }

        self.buckets[index].push(Entry {
            key: key.to_owned(),
            values: vec![value],
        });
        self.len += 1;
        self.grow_if_overloaded();
    }

    /// Inserts only if `key` is absent, returning whether it was added.
    ///
    /// Unlike [`insert`](Self::insert), a duplicate key is rejected outright
    /// instead of appending. This is the set's insert.
    pub(crate) fn insert_distinct(&mut self, key: &str, value: V) -> bool {
        let index = bucket_index(key, self.buckets.len());

        if self.buckets[index].iter().any(|entry| entry.key == key) {
            return false;
        }

        self.buckets[index].push(Entry {
            key: key.to_owned(),
            values: vec![value],
        });
        self.len += 1;
        self.grow_if_overloaded();
        true
    }

    /// Returns the values stored under `key`, in insertion order, or `None`
    /// if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use chained_multimap::ChainedMultimap;
    ///
    /// let mut map = ChainedMultimap::new();
    /// map.insert("Alaska", 1);
    ///
    /// assert_eq!(map.get("Alaska"), Some(&[1][..]));
    /// assert_eq!(map.get("Ontario"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&[V]> {
        let index = bucket_index(key, self.buckets.len());

        self.buckets[index]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.values.as_slice())
    }

    /// Returns `true` if the map contains at least one value for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Clears the map, removing every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// An iterator visiting every `(key, values)` entry exactly once, in
    /// bucket order and then per-bucket insertion order. The order is not
    /// sorted and changes whenever a resize reassigns bucket indices.
    /// The iterator element type is `(&'a str, &'a [V])`.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: [].iter(),
            outer: self.buckets.iter(),
            remaining: self.len,
        }
    }

    /// An iterator visiting every distinct key exactly once, in the same
    /// order as [`iter`](Self::iter). The iterator element type is `&'a str`.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys { iter: self.iter() }
    }

    /// Creates a consuming iterator over the distinct keys.
    pub fn into_keys(self) -> IntoKeys<V> {
        IntoKeys {
            iter: self.into_iter(),
        }
    }

    /// Grows and rehashes until the load factor threshold holds again.
    /// Called after every structural insert, so `len / capacity` is back
    /// under the threshold by the time `insert` returns. Thresholds below
    /// 0.5 can need more than one doubling for a single new key.
    fn grow_if_overloaded(&mut self) {
        while self.len as f64 / self.buckets.len() as f64 > self.load_factor {
            self.grow();
        }
    }

    /// Doubles the bucket count and rehashes every entry under the new
    /// capacity. Entries move wholesale, so value sequences stay intact, and
    /// old buckets are drained in index order so entries colliding in the new
    /// table keep their encounter order. Both tables are live until the old
    /// one is dropped, so peak memory is up to twice steady state.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut buckets = Vec::with_capacity(new_capacity);
        buckets.resize_with(new_capacity, Vec::new);

        let old = std::mem::replace(&mut self.buckets, buckets);
        for bucket in old {
            for entry in bucket {
                let index = bucket_index(&entry.key, new_capacity);
                self.buckets[index].push(entry);
            }
        }
    }
}

impl<V> Default for ChainedMultimap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for ChainedMultimap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Extend<(String, V)> for ChainedMultimap<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl<'a, V> Extend<(&'a str, V)> for ChainedMultimap<V> {
    fn extend<I: IntoIterator<Item = (&'a str, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for ChainedMultimap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> FromIterator<(&'a str, V)> for ChainedMultimap<V> {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a ChainedMultimap<V> {
    type Item = (&'a str, &'a [V]);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V> IntoIterator for ChainedMultimap<V> {
    type Item = (String, Vec<V>);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            inner: Vec::new().into_iter(),
            outer: self.buckets.into_iter(),
            remaining: self.len,
        }
    }
}

/// An iterator over the entries of a `ChainedMultimap`.
pub struct Iter<'a, V> {
    outer: slice::Iter<'a, Vec<Entry<V>>>,
    inner: slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a [V]);

    fn next(&mut self) -> Option<(&'a str, &'a [V])> {
        loop {
            if let Some(entry) = self.inner.next() {
                self.remaining -= 1;
                return Some((entry.key.as_str(), entry.values.as_slice()));
            }

            self.inner = self.outer.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V: Debug> Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the keys of a `ChainedMultimap`.
pub struct Keys<'a, V> {
    iter: Iter<'a, V>,
}

impl<V> Clone for Keys<'_, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<V> FusedIterator for Keys<'_, V> {}

impl<V> Debug for Keys<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the entries of a `ChainedMultimap`.
pub struct IntoIter<V> {
    outer: vec::IntoIter<Vec<Entry<V>>>,
    inner: vec::IntoIter<Entry<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, Vec<V>);

    fn next(&mut self) -> Option<(String, Vec<V>)> {
        loop {
            if let Some(entry) = self.inner.next() {
                self.remaining -= 1;
                return Some((entry.key, entry.values));
            }

            self.inner = self.outer.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> Debug for IntoIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// An owning iterator over the keys of a `ChainedMultimap`.
pub struct IntoKeys<V> {
    iter: IntoIter<V>,
}

impl<V> Iterator for IntoKeys<V> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoKeys<V> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<V> FusedIterator for IntoKeys<V> {}

impl<V> Debug for IntoKeys<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoKeys")
            .field("remaining", &self.iter.remaining)
            .finish()
    }
}
