/// Maps a string key to a bucket index in `[0, table_size)`.
///
/// Horner's-rule polynomial hash with base 31 over the key's bytes, reduced
/// modulo the table size at every step. Because the modulus is the table size
/// itself, the index a key hashes to depends on the current capacity: growing
/// the table invalidates every previously computed index, which is why a
/// resize rehashes the whole table rather than redistributing in place.
///
/// Deterministic and unseeded; not collision-resistant against adversarial
/// keys. The containers in this crate use it for small, trusted key domains.
///
/// # Examples
///
/// ```
/// use chained_multimap::hash::bucket_index;
///
/// assert!(bucket_index("Texas", 10) < 10);
/// assert_eq!(bucket_index("Texas", 10), bucket_index("Texas", 10));
/// ```
#[must_use]
pub fn bucket_index(key: &str, table_size: usize) -> usize {
    debug_assert!(table_size > 0, "table size must be nonzero");

    let mut hash = 0usize;
    for byte in key.bytes() {
        hash = (hash.wrapping_mul(31).wrapping_add(byte as usize)) % table_size;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::bucket_index;

    #[test]
    fn in_range_for_every_table_size() {
        for size in 1..64 {
            assert!(bucket_index("New Hampshire", size) < size);
        }
    }

    #[test]
    fn empty_key_hashes_to_zero() {
        assert_eq!(bucket_index("", 17), 0);
    }

    #[test]
    fn matches_horner_evaluation() {
        // "ab" = ('a' * 31 + 'b') mod size, with 'a' reduced first.
        let size = 1000;
        let expected = ((97 % size) * 31 + 98) % size;
        assert_eq!(bucket_index("ab", size), expected);
    }

    #[test]
    fn index_depends_on_table_size() {
        // The modulus is the table size, so the same key lands in different
        // buckets under different capacities (for most keys and sizes).
        assert_ne!(bucket_index("Mississippi", 7), bucket_index("Mississippi", 1000) % 7);
    }
}
