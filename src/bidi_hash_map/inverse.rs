use core::convert::Infallible;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::Ptr;
use crate::bidi_hash_map::BidiHashMap;
use crate::bidi_hash_map::Evicted;
use crate::bidi_hash_map::InverseEntries;
use crate::bidi_hash_map::InverseEntryCursor;
use crate::error::Error;
use crate::error::Result;

/// A read-only view of a [`BidiHashMap`] keyed by value.
///
/// This struct is created by the [`inverse`] method on [`BidiHashMap`]. It
/// shares all storage with the map, so "keys" here are the map's values and
/// "values" are the map's keys, and iteration walks the value order.
///
/// [`inverse`]: BidiHashMap::inverse
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
///
/// let mut map = BidiHashMap::new();
/// map.put("1", 1);
/// map.put("2", 2);
/// map.put("1", 5);
///
/// let inverse = map.inverse();
/// assert_eq!(inverse.get(&5), Some(&"1"));
/// assert_eq!(inverse.keys().collect::<Vec<_>>(), [&2, &5]);
/// ```
pub struct Inverse<'m, K, V, S> {
    pub(crate) map: &'m BidiHashMap<K, V, S>,
}

impl<K, V, S> Clone for Inverse<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for Inverse<'_, K, V, S> {}

impl<K: core::fmt::Debug, V: core::fmt::Debug, S> core::fmt::Debug for Inverse<'_, K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<'m, K, V, S> Inverse<'m, K, V, S> {
    /// Returns the number of mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no mappings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the `(value, key)` pairs in value order.
    pub fn entries(&self) -> InverseEntries<'m, K, V, S> {
        InverseEntries::new(self.map)
    }

    /// Alias for [`entries`](Self::entries).
    pub fn iter(&self) -> InverseEntries<'m, K, V, S> {
        self.entries()
    }

    /// Returns an iterator over the map's values in value order.
    pub fn keys(&self) -> impl Iterator<Item = &'m V> + use<'m, K, V, S> {
        self.entries().map(|(v, _)| v)
    }

    /// Returns an iterator over the map's keys in value order.
    pub fn values(&self) -> impl Iterator<Item = &'m K> + use<'m, K, V, S> {
        self.entries().map(|(_, k)| k)
    }

    /// Returns a detached fail-fast cursor over the `(value, key)` pairs in
    /// value order.
    pub fn entry_cursor(&self) -> InverseEntryCursor {
        InverseEntryCursor::new(self.map)
    }

    /// Returns the `(value, key)` pair stored at `ptr`.
    pub fn ptr_get_entry(&self, ptr: Ptr) -> Option<(&'m V, &'m K)> {
        self.map.ptr_get_entry(ptr).map(|(k, v)| (v, k))
    }
}

impl<'m, K, V, S> Inverse<'m, K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    /// Returns the key bound to `value`.
    pub fn get(&self, value: &V) -> Option<&'m K> {
        self.map.get_by_value(value)
    }

    /// Returns the pointer to the mapping holding `value`.
    pub fn get_ptr(&self, value: &V) -> Option<Ptr> {
        self.map.value_ptr(value)
    }

    /// Returns `true` if some key is bound to `value`.
    pub fn contains_key(&self, value: &V) -> bool {
        self.map.contains_value(value)
    }

    /// Returns `true` if `key` is bound to some value.
    pub fn contains_value(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

/// A mutable view of a [`BidiHashMap`] keyed by value.
///
/// This struct is created by the [`inverse_mut`] method on [`BidiHashMap`].
/// Mutations made through it are immediately visible through the map and
/// invalidate any outstanding cursor, whichever view created it.
///
/// [`inverse_mut`]: BidiHashMap::inverse_mut
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
///
/// let mut map = BidiHashMap::new();
/// map.put(1, 101);
/// map.put(2, 102);
/// map.put(3, 103);
///
/// // Rebinding a value moves its mapping to the tail of the key order.
/// assert_eq!(map.inverse_mut().put(102, -2), Some(2));
/// let keys: Vec<_> = map.keys().collect();
/// assert_eq!(keys, [&1, &3, &-2]);
/// ```
pub struct InverseMut<'m, K, V, S> {
    pub(crate) map: &'m mut BidiHashMap<K, V, S>,
}

impl<K: core::fmt::Debug, V: core::fmt::Debug, S> core::fmt::Debug for InverseMut<'_, K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.as_inverse(), f)
    }
}

impl<'m, K, V, S> InverseMut<'m, K, V, S> {
    /// Reborrows this view as a read-only [`Inverse`].
    pub fn as_inverse(&self) -> Inverse<'_, K, V, S> {
        Inverse { map: self.map }
    }

    /// Returns the number of mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no mappings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every mapping. Same as [`BidiHashMap::clear`].
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns an iterator over the `(value, key)` pairs in value order.
    pub fn entries(&self) -> InverseEntries<'_, K, V, S> {
        InverseEntries::new(self.map)
    }

    /// Alias for [`entries`](Self::entries).
    pub fn iter(&self) -> InverseEntries<'_, K, V, S> {
        self.entries()
    }

    /// Returns an iterator over the map's values in value order.
    pub fn keys(&self) -> impl Iterator<Item = &V> {
        self.entries().map(|(v, _)| v)
    }

    /// Returns an iterator over the map's keys in value order.
    pub fn values(&self) -> impl Iterator<Item = &K> {
        self.entries().map(|(_, k)| k)
    }

    /// Returns a detached fail-fast cursor over the `(value, key)` pairs in
    /// value order.
    pub fn entry_cursor(&self) -> InverseEntryCursor {
        InverseEntryCursor::new(self.map)
    }

    /// Mutable access to the map's values is not offered through this view.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedView`].
    pub fn keys_mut(&mut self) -> Result<Infallible> {
        Err(Error::UnsupportedView {
            view: "inverse keys_mut",
        })
    }

    /// Mutable access to the map's keys is not offered through this view.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedView`].
    pub fn values_mut(&mut self) -> Result<Infallible> {
        Err(Error::UnsupportedView {
            view: "inverse values_mut",
        })
    }
}

impl<'m, K, V, S> InverseMut<'m, K, V, S>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    /// Returns the key bound to `value`.
    pub fn get(&self, value: &V) -> Option<&K> {
        self.map.get_by_value(value)
    }

    /// Returns the pointer to the mapping holding `value`.
    pub fn get_ptr(&self, value: &V) -> Option<Ptr> {
        self.map.value_ptr(value)
    }

    /// Returns `true` if some key is bound to `value`.
    pub fn contains_key(&self, value: &V) -> bool {
        self.map.contains_value(value)
    }

    /// Returns `true` if `key` is bound to some value.
    pub fn contains_value(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Binds `value` to `key`, returning the key `value` was previously bound
    /// to.
    ///
    /// If the value is new, the mapping is appended to the tail of both
    /// orders. If the value already exists, its position in value order is
    /// unchanged and the mapping moves to the tail of the key order.
    ///
    /// If `key` is already bound to a different value, that other mapping is
    /// removed first, so [`len`](Self::len) stays the same for a new value
    /// and shrinks by one for an existing value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_bimap::BidiHashMap;
    ///
    /// let mut map = BidiHashMap::new();
    /// assert_eq!(map.inverse_mut().put(1, "a"), None);
    /// assert_eq!(map.inverse_mut().put(1, "b"), Some("a"));
    /// assert_eq!(map.get(&"b"), Some(&1));
    /// assert_eq!(map.get(&"a"), None);
    /// ```
    pub fn put(&mut self, value: V, key: K) -> Option<K> {
        self.map.put_by_value(value, key).0
    }

    /// Like [`put`](Self::put), but also returns the mapping that was evicted
    /// because it held `key` under a different value.
    pub fn put_full(&mut self, value: V, key: K) -> (Option<K>, Option<Evicted<K, V>>) {
        self.map.put_by_value(value, key)
    }

    /// Removes the mapping holding `value`, returning its key.
    pub fn remove(&mut self, value: &V) -> Option<K> {
        self.map.remove_by_value(value)
    }

    /// Removes the mapping holding `value`, returning the stored value and
    /// key.
    pub fn remove_entry(&mut self, value: &V) -> Option<(V, K)> {
        let ptr = self.map.value_ptr(value);
        self.map.remove_ptr(ptr).map(|(k, v)| (v, k))
    }
}
