#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod arena;
pub mod bidi_hash_map;
mod config;
mod error;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

/// A bidirectional hash map that keeps both its key side and its value side in
/// relative order, backed by an index arena for O(1) lookups in either
/// direction.
///
/// This is the main type alias using the default hasher. For custom hashers,
/// use [`bidi_hash_map::BidiHashMap`] directly.
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
///
/// let mut map = BidiHashMap::new();
/// map.put("a", 1);
/// map.put("b", 2);
///
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.inverse().get(&2), Some(&"b"));
///
/// let entries: Vec<_> = map.entries().collect();
/// assert_eq!(entries, [(&"a", &1), (&"b", &2)]);
/// ```
pub type BidiHashMap<K, V> = crate::bidi_hash_map::BidiHashMap<K, V, RandomState>;
use core::num::NonZeroU32;

pub use bidi_hash_map::Entries;
pub use bidi_hash_map::EntryCursor;
pub use bidi_hash_map::Evicted;
pub use bidi_hash_map::Inverse;
pub use bidi_hash_map::InverseEntries;
pub use bidi_hash_map::InverseEntryCursor;
pub use bidi_hash_map::InverseMut;
pub use config::Config;
pub use config::DEFAULT_CAPACITY;
pub use config::DEFAULT_LOAD_FACTOR;
pub use config::MINIMUM_CAPACITY;
pub use config::MINIMUM_LOAD_FACTOR;
pub use error::Error;
pub use error::Result;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
/// A pointer type used to identify mapping records in the bidirectional map.
///
/// This is an opaque handle that provides O(1) access to a mapping without a
/// key or value lookup. It is **non-generational**, meaning that once a
/// mapping is removed, the pointer may be re-used for a new mapping.
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
///
/// let mut map = BidiHashMap::new();
/// map.put("key", 42);
///
/// let ptr = map.get_ptr(&"key").unwrap();
/// assert_eq!(map.ptr_get_entry(ptr), Some((&"key", &42)));
/// assert_eq!(map.inverse().get_ptr(&42), Some(ptr));
/// ```
pub struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    pub(crate) fn unchecked_from(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "Index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn unchecked_get(self) -> usize {
        self.0.get() as usize - 1
    }
}
