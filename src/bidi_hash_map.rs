//! Bidirectional hash map implementation.
//!
//! This module provides the core [`BidiHashMap`] type, its inverse views, and
//! the iterators over both. Every mapping record is reachable from two
//! independently hashed bucket tables (one by key, one by value) and sits in
//! two independent insertion-order lists (one per side).
//!
//! Updating a mapping through one view repositions only the node whose
//! attribute changed: rebinding a key to a new value moves the mapping to the
//! tail of the value order while its place in the key order stays fixed, and
//! rebinding a value to a new key through the inverse view does the opposite.
//!
//! # Examples
//!
//! ```
//! use tether_bimap::bidi_hash_map::BidiHashMap;
//!
//! let mut map = BidiHashMap::new();
//! map.put(1, 101);
//! map.put(2, 102);
//! map.put(3, 103);
//!
//! // Rebinding the value 102 to a new key moves the entry to the tail of the
//! // key order.
//! map.inverse_mut().put(102, -2);
//!
//! let entries: Vec<_> = map.entries().collect();
//! assert_eq!(entries, [(&1, &101), (&3, &103), (&-2, &102)]);
//! ```

use core::convert::Infallible;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::ops::Index;

use log::debug;
use log::trace;

mod inverse;
mod iter;
mod order;
mod table;

pub use inverse::Inverse;
pub use inverse::InverseMut;
pub use iter::Entries;
pub use iter::EntryCursor;
pub use iter::InverseEntries;
pub use iter::InverseEntryCursor;
use order::OrderList;
use table::BucketTable;

use crate::Ptr;
use crate::RandomState;
use crate::arena::Arena;
use crate::arena::Mapping;
use crate::arena::Side;
use crate::config::Config;
use crate::error::Error;
use crate::error::Result;

/// A hash map that is also a hash map in the opposite direction.
///
/// Each key is bound to exactly one value and each value to exactly one key.
/// Lookups, insertions, updates, and removals run in average O(1) time from
/// either side. Both sides remember their own insertion order: the key order
/// is what [`entries`](Self::entries) walks, the value order is what
/// [`Inverse::entries`] walks.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq`
/// - `V`: Value type, must implement `Hash + Eq`
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// # Examples
///
/// ```
/// use tether_bimap::bidi_hash_map::BidiHashMap;
///
/// let mut map = BidiHashMap::new();
/// map.put("apple", 5);
/// map.put("banana", 3);
///
/// assert_eq!(map.get(&"apple"), Some(&5));
/// assert_eq!(map.inverse().get(&3), Some(&"banana"));
///
/// // Rebinding a key keeps its place in key order.
/// assert_eq!(map.put("apple", 7), Some(5));
/// let keys: Vec<_> = map.keys().collect();
/// assert_eq!(keys, [&"apple", &"banana"]);
/// ```
#[derive(Clone)]
pub struct BidiHashMap<K, V, S = RandomState> {
    nodes: Arena<K, V>,
    tables: [BucketTable; 2],
    orders: [OrderList; 2],
    len: usize,
    mod_count: usize,
    load_factor: f32,
    hasher: S,
}

/// A mapping that was removed because its value (or, through the inverse
/// view, its key) was claimed by another mapping.
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
/// use tether_bimap::Evicted;
///
/// let mut map = BidiHashMap::new();
/// map.put("a", 1);
///
/// let (previous, evicted) = map.put_full("b", 1);
/// assert_eq!(previous, None);
/// assert_eq!(evicted, Some(Evicted { key: "a", value: 1 }));
/// assert_eq!(map.inverse().get(&1), Some(&"b"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evicted<K, V> {
    /// The key of the evicted mapping
    pub key: K,
    /// The value of the evicted mapping
    pub value: V,
}

impl<K: core::fmt::Debug, V: core::fmt::Debug, S> core::fmt::Debug for BidiHashMap<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct DebugOrder<'a, K, V, S>(&'a BidiHashMap<K, V, S>, Side);

        impl<K: core::fmt::Debug, V: core::fmt::Debug, S> core::fmt::Debug for DebugOrder<'_, K, V, S> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.1 {
                    Side::Key => f.debug_map().entries(self.0.entries()).finish(),
                    Side::Value => f.debug_map().entries(self.0.inverse().entries()).finish(),
                }
            }
        }

        f.debug_struct("BidiHashMap")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("by_key", &DebugOrder(self, Side::Key))
            .field("by_value", &DebugOrder(self, Side::Value))
            .finish()
    }
}

impl<K, V, S: Default> Default for BidiHashMap<K, V, S> {
    fn default() -> Self {
        BidiHashMap::from_parts(Config::default(), S::default())
    }
}

impl<K, V> BidiHashMap<K, V> {
    /// Creates a new, empty map with the default capacity and load factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map: BidiHashMap<&str, i32> = BidiHashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty map whose tables start with at least `capacity`
    /// buckets. The bucket count is rounded up to a power of two no smaller
    /// than [`MINIMUM_CAPACITY`](crate::MINIMUM_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let map: BidiHashMap<&str, i32> = BidiHashMap::with_capacity(100);
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        BidiHashMap::from_parts(Config::default().capacity(capacity), RandomState::default())
    }

    /// Creates a new, empty map with the given load factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `load_factor` is NaN or not
    /// greater than [`MINIMUM_LOAD_FACTOR`](crate::MINIMUM_LOAD_FACTOR).
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// assert!(BidiHashMap::<i32, i32>::with_load_factor(0.75).is_ok());
    /// assert!(BidiHashMap::<i32, i32>::with_load_factor(0.0).is_err());
    /// ```
    pub fn with_load_factor(load_factor: f32) -> Result<Self> {
        Self::with_config(Config::default().load_factor(load_factor))
    }

    /// Creates a new, empty map from a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configured load factor is
    /// unusable.
    pub fn with_config(config: Config) -> Result<Self> {
        BidiHashMap::with_config_and_hasher(config, RandomState::default())
    }
}

impl<K, V, S> BidiHashMap<K, V, S> {
    /// Creates a new, empty map with the default configuration and the given
    /// hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashbrown::DefaultHashBuilder as RandomState;
    /// use tether_bimap::bidi_hash_map::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::with_hasher(RandomState::default());
    /// map.put("key", 42);
    /// assert_eq!(map.inverse().get(&42), Some(&"key"));
    /// ```
    pub fn with_hasher(hasher: S) -> Self {
        BidiHashMap::from_parts(Config::default(), hasher)
    }

    /// Creates a new, empty map from a [`Config`] and a hasher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configured load factor is
    /// unusable.
    pub fn with_config_and_hasher(config: Config, hasher: S) -> Result<Self> {
        Ok(BidiHashMap::from_parts(config.validate()?, hasher))
    }

    fn from_parts(config: Config, hasher: S) -> Self {
        let bucket_count = config.bucket_count();
        BidiHashMap {
            nodes: Arena::with_capacity(config.capacity),
            tables: [
                BucketTable::with_bucket_count(bucket_count),
                BucketTable::with_bucket_count(bucket_count),
            ],
            orders: [OrderList::default(), OrderList::default()],
            len: 0,
            mod_count: 0,
            load_factor: config.load_factor,
            hasher,
        }
    }

    /// Returns the number of mappings in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut a = BidiHashMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.put(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no mappings.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket count of both tables.
    pub fn capacity(&self) -> usize {
        self.tables[Side::Key.index()].bucket_count()
    }

    /// Returns the load factor the map was built with.
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// Removes every mapping. The tables keep their current bucket count.
    ///
    /// Any outstanding [`EntryCursor`] is invalidated if the map was not
    /// already empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut a = BidiHashMap::new();
    /// a.put(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert!(!a.inverse().contains_key(&"a"));
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing {} mappings", self.len);
        for table in &mut self.tables {
            table.clear();
        }
        for order in &mut self.orders {
            order.clear();
        }
        self.nodes.clear();
        self.mod_count = self.mod_count.wrapping_add(self.len);
        self.len = 0;
    }

    /// Returns an iterator over the `(key, value)` pairs of the map in key
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// map.put(10, 100);
    /// map.put(3, 30);
    /// map.put(5, 50);
    /// map.put(3, 40);
    ///
    /// let entries: Vec<_> = map.entries().collect();
    /// assert_eq!(entries, [(&10, &100), (&3, &40), (&5, &50)]);
    /// ```
    pub fn entries(&self) -> Entries<'_, K, V, S> {
        Entries::new(self)
    }

    /// Alias for [`entries`](Self::entries).
    pub fn iter(&self) -> Entries<'_, K, V, S> {
        self.entries()
    }

    /// Returns an iterator over the keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries().map(|(k, _)| k)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries().map(|(_, v)| v)
    }

    /// Returns a detached fail-fast cursor over the mappings in key order.
    ///
    /// See [`EntryCursor`] for details.
    pub fn entry_cursor(&self) -> EntryCursor {
        EntryCursor::new(self)
    }

    /// Returns a read-only view of the map keyed by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// map.put("one", 1);
    ///
    /// let inverse = map.inverse();
    /// assert_eq!(inverse.get(&1), Some(&"one"));
    /// assert!(inverse.contains_value(&"one"));
    /// ```
    pub fn inverse(&self) -> Inverse<'_, K, V, S> {
        Inverse { map: self }
    }

    /// Returns a mutable view of the map keyed by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// map.inverse_mut().put(1, "one");
    /// assert_eq!(map.get(&"one"), Some(&1));
    /// ```
    pub fn inverse_mut(&mut self) -> InverseMut<'_, K, V, S> {
        InverseMut { map: self }
    }

    /// Returns the `(key, value)` pair stored at `ptr`, or `None` if `ptr` does
    /// not refer to a live mapping.
    pub fn ptr_get_entry(&self, ptr: Ptr) -> Option<(&K, &V)> {
        self.nodes
            .get(ptr)
            .map(|record| (&record.mapping.key, &record.mapping.value))
    }

    /// Mutable access to the keys is not offered: changing a key in place
    /// would strand it in the wrong bucket.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedView`].
    pub fn keys_mut(&mut self) -> Result<Infallible> {
        Err(Error::UnsupportedView { view: "keys_mut" })
    }

    /// Mutable access to the values is not offered: changing a value in place
    /// would strand it in the wrong bucket. Use [`put`](Self::put) instead.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedView`].
    pub fn values_mut(&mut self) -> Result<Infallible> {
        Err(Error::UnsupportedView { view: "values_mut" })
    }

    /// Unlinks both nodes of `ptr` from their chains and order lists, then
    /// frees the record.
    fn unlink_and_free(&mut self, ptr: Ptr) -> Mapping<K, V> {
        for side in [Side::Key, Side::Value] {
            self.detach(side, ptr);
        }
        self.len -= 1;
        self.nodes.free(ptr).mapping
    }

    fn detach(&mut self, side: Side, ptr: Ptr) {
        self.tables[side.index()].unlink(&mut self.nodes, side, ptr);
        self.orders[side.index()].unlink(&mut self.nodes, side, ptr);
    }

    fn attach(&mut self, side: Side, ptr: Ptr) {
        self.orders[side.index()].push_back(&mut self.nodes, side, ptr);
        self.tables[side.index()].push_front(&mut self.nodes, side, ptr);
    }

    fn insert_new(&mut self, mapping: Mapping<K, V>) -> Ptr {
        self.reserve_one();
        let ptr = self.nodes.alloc(mapping);
        self.attach(Side::Key, ptr);
        self.attach(Side::Value, ptr);
        self.len += 1;
        ptr
    }

    /// Doubles both tables once if one more mapping would push the map past
    /// its load factor. Load factors below `1 / capacity` therefore grow by a
    /// single doubling per insert rather than satisfying the bound at once.
    fn reserve_one(&mut self) {
        let needed = (self.len + 1) as f64;
        if needed <= f64::from(self.load_factor) * self.capacity() as f64 {
            return;
        }
        match self.capacity().checked_mul(2) {
            Some(bucket_count) => self.resize(bucket_count),
            None => debug!("tables cannot grow past {} buckets", self.capacity()),
        }
    }

    /// Rehashes both tables into `bucket_count` buckets by walking each order
    /// list. Order lists and record identities are left alone.
    fn resize(&mut self, bucket_count: usize) {
        debug!(
            "growing tables from {} to {} buckets at {} mappings",
            self.capacity(),
            bucket_count,
            self.len
        );
        for side in [Side::Key, Side::Value] {
            let table = &mut self.tables[side.index()];
            table.reset(bucket_count);
            let mut cursor = self.orders[side.index()].head();
            while let Some(ptr) = cursor {
                cursor = self.nodes[ptr].node(side).order.next;
                table.push_front(&mut self.nodes, side, ptr);
            }
        }
    }

    fn bump_mod_count(&mut self) {
        self.mod_count = self.mod_count.wrapping_add(1);
    }
}

impl<K, V, S> BidiHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    fn find_key(&self, key: &K, hash: u64) -> Option<Ptr> {
        self.tables[Side::Key.index()].find(&self.nodes, Side::Key, hash, |m| m.key == *key)
    }

    fn find_value(&self, value: &V, hash: u64) -> Option<Ptr> {
        self.tables[Side::Value.index()].find(&self.nodes, Side::Value, hash, |m| {
            m.value == *value
        })
    }

    pub(crate) fn key_ptr(&self, key: &K) -> Option<Ptr> {
        self.find_key(key, self.hasher.hash_one(key))
    }

    pub(crate) fn value_ptr(&self, value: &V) -> Option<Ptr> {
        self.find_value(value, self.hasher.hash_one(value))
    }

    /// Removes the mapping at `holder` if it is not `keep`, logging and
    /// returning it.
    fn evict_unless(&mut self, holder: Option<Ptr>, keep: Option<Ptr>) -> Option<Evicted<K, V>> {
        let holder = holder.filter(|&ptr| Some(ptr) != keep)?;
        trace!("evicting mapping {:?} to keep the map bijective", holder);
        let Mapping { key, value, .. } = self.unlink_and_free(holder);
        Some(Evicted { key, value })
    }

    /// Forward insert: binds `key` to `value`. An existing key keeps its key
    /// node in place and has its value node re-hashed and moved to the tail of
    /// the value order.
    fn put_by_key(&mut self, key: K, value: V) -> (Option<V>, Option<Evicted<K, V>>) {
        let key_hash = self.hasher.hash_one(&key);
        let value_hash = self.hasher.hash_one(&value);
        let existing = self.find_key(&key, key_hash);
        let holder = self.find_value(&value, value_hash);
        let evicted = self.evict_unless(holder, existing);

        let previous = match existing {
            Some(ptr) => {
                self.detach(Side::Value, ptr);
                let mapping = &mut self.nodes[ptr].mapping;
                mapping.value_hash = value_hash;
                let old = core::mem::replace(&mut mapping.value, value);
                self.attach(Side::Value, ptr);
                Some(old)
            }
            None => {
                self.insert_new(Mapping {
                    key,
                    value,
                    key_hash,
                    value_hash,
                });
                None
            }
        };

        self.bump_mod_count();
        (previous, evicted)
    }

    /// Inverse insert: binds `value` to `key`. An existing value keeps its
    /// value node in place and has its key node re-hashed and moved to the
    /// tail of the key order.
    fn put_by_value(&mut self, value: V, key: K) -> (Option<K>, Option<Evicted<K, V>>) {
        let key_hash = self.hasher.hash_one(&key);
        let value_hash = self.hasher.hash_one(&value);
        let existing = self.find_value(&value, value_hash);
        let holder = self.find_key(&key, key_hash);
        let evicted = self.evict_unless(holder, existing);

        let previous = match existing {
            Some(ptr) => {
                self.detach(Side::Key, ptr);
                let mapping = &mut self.nodes[ptr].mapping;
                mapping.key_hash = key_hash;
                let old = core::mem::replace(&mut mapping.key, key);
                self.attach(Side::Key, ptr);
                Some(old)
            }
            None => {
                self.insert_new(Mapping {
                    key,
                    value,
                    key_hash,
                    value_hash,
                });
                None
            }
        };

        self.bump_mod_count();
        (previous, evicted)
    }

    fn remove_ptr(&mut self, ptr: Option<Ptr>) -> Option<(K, V)> {
        let Mapping { key, value, .. } = self.unlink_and_free(ptr?);
        self.bump_mod_count();
        Some((key, value))
    }

    /// Binds `key` to `value`, returning the value `key` was previously bound
    /// to.
    ///
    /// If the key is new, the mapping is appended to the tail of both orders.
    /// If the key already exists, its position in key order is unchanged and
    /// the mapping moves to the tail of the value order.
    ///
    /// If `value` is already bound to a different key, that other mapping is
    /// removed first so that every value keeps exactly one key. Use
    /// [`put_full`](Self::put_full) to get the removed mapping back. In that
    /// case [`len`](Self::len) stays the same for a new key and shrinks by one
    /// for an existing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// assert_eq!(map.put(37, "a"), None);
    /// assert_eq!(map.put(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// assert_eq!(map.inverse().get(&"a"), None);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.put_by_key(key, value).0
    }

    /// Like [`put`](Self::put), but also returns the mapping that was evicted
    /// because it held `value` under a different key.
    pub fn put_full(&mut self, key: K, value: V) -> (Option<V>, Option<Evicted<K, V>>) {
        self.put_by_key(key, value)
    }

    /// Returns a reference to the value bound to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.key_ptr(key).map(|ptr| &self.nodes[ptr].mapping.value)
    }

    /// Returns the pointer to the mapping with the given key.
    pub fn get_ptr(&self, key: &K) -> Option<Ptr> {
        self.key_ptr(key)
    }

    /// Returns a reference to the key bound to `value`. Shorthand for
    /// `self.inverse().get(value)`.
    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.value_ptr(value).map(|ptr| &self.nodes[ptr].mapping.key)
    }

    /// Returns `true` if the map contains a mapping for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.key_ptr(key).is_some()
    }

    /// Returns `true` if some key is bound to `value`. Runs in average O(1)
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// map.put(1, "a");
    /// assert!(map.contains_value(&"a"));
    /// assert!(!map.contains_value(&"b"));
    /// ```
    pub fn contains_value(&self, value: &V) -> bool {
        self.value_ptr(value).is_some()
    }

    /// Removes `key` from the map, returning the value it was bound to.
    ///
    /// Removing an absent key changes nothing, not even the modification
    /// counter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// assert!(!map.contains_value(&"a"));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key` from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let ptr = self.key_ptr(key);
        self.remove_ptr(ptr)
    }

    /// Removes the mapping bound to `value`, returning its key. Shorthand for
    /// `self.inverse_mut().remove(value)`.
    pub fn remove_by_value(&mut self, value: &V) -> Option<K> {
        let ptr = self.value_ptr(value);
        self.remove_ptr(ptr).map(|(k, _)| k)
    }
}

impl<K, V, S> PartialEq for BidiHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    /// Two maps are equal when they hold the same mappings, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, S> Eq for BidiHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> FromIterator<(K, V)> for BidiHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BidiHashMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for BidiHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a BidiHashMap<K, V, S> {
    type IntoIter = Entries<'a, K, V, S>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K, V, S> Index<&K> for BidiHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("key not found")
    }
}
