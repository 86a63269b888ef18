//! A string-keyed multimap and membership set built on a separately chained
//! hash table.
//!
//! ---
//!
//! [`ChainedMultimap`] maps each distinct key to the ordered sequence of
//! values inserted under it:
//!  - `a -> 1, 2`
//!  - `b -> 3`
//!
//! Collisions are resolved by chaining: every key hashing to the same bucket
//! index is stored in that bucket's entry sequence and matched by exact key
//! equality. When the ratio of distinct keys to buckets crosses the load
//! factor threshold, the table doubles its capacity and rehashes every entry.
//!
//! ---
//!
//! [`ChainedSet`] is the membership restriction of the same table: it stores
//! keys only, rejects duplicate inserts, and answers `contains` in expected
//! constant time. Its intended use is turning a fixed allow-list into a fast
//! lookup instead of a linear scan.
//!
//! ---
//!
//! Both containers hash with a Horner's-rule polynomial over the key's bytes,
//! reduced modulo the current table size (see [`hash::bucket_index`]). They
//! are single-threaded by contract: all mutation and iteration happen on one
//! owner, and sharing across threads needs external synchronization.

/// Bucket index computation shared by the map and the set.
pub mod hash;

/// Multimap from string keys to ordered value sequences.
pub mod map;

/// Membership set over string keys.
pub mod set;

#[cfg(feature = "serde")]
mod serde;

pub use map::ChainedMultimap;
pub use set::ChainedSet;
