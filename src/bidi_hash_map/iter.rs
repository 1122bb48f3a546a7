use core::iter::FusedIterator;

use crate::Ptr;
use crate::arena::Mapping;
use crate::arena::Side;
use crate::bidi_hash_map::BidiHashMap;
use crate::error::Error;
use crate::error::Result;

/// Walks one side's order list, checking the map's modification counter on
/// every step.
#[derive(Debug, Clone)]
struct RawCursor {
    origin: usize,
    side: Side,
    next: Option<Ptr>,
    expected_mod_count: usize,
    remaining: usize,
    invalidated: bool,
}

impl RawCursor {
    fn new<K, V, S>(map: &BidiHashMap<K, V, S>, side: Side) -> Self {
        RawCursor {
            origin: core::ptr::from_ref(map) as usize,
            side,
            next: map.orders[side.index()].head(),
            expected_mod_count: map.mod_count,
            remaining: map.len,
            invalidated: false,
        }
    }

    fn advance<'m, K, V, S>(&mut self, map: &'m BidiHashMap<K, V, S>) -> Result<&'m Mapping<K, V>> {
        if self.invalidated
            || core::ptr::from_ref(map) as usize != self.origin
            || map.mod_count != self.expected_mod_count
        {
            self.invalidated = true;
            return Err(Error::IteratorInvalidated);
        }

        if self.remaining == 0 {
            debug_assert!(
                self.next.is_none(),
                "order list is longer than the recorded size"
            );
            return Err(Error::IteratorExhausted);
        }

        let Some(record) = self.next.and_then(|ptr| map.nodes.get(ptr)) else {
            self.invalidated = true;
            return Err(Error::IteratorInvalidated);
        };

        self.next = record.node(self.side).order.next;
        self.remaining -= 1;
        Ok(&record.mapping)
    }
}

/// A detached, fail-fast cursor over the mappings of a [`BidiHashMap`] in key
/// order.
///
/// Unlike [`Entries`], a cursor does not borrow the map between steps, so the
/// map can be modified while the cursor is alive. Any structural modification
/// made through either view after the cursor was created makes every later
/// call to [`next`](EntryCursor::next) fail with
/// [`Error::IteratorInvalidated`]. A cursor is single pass and cannot be
/// restarted.
///
/// A cursor is tied to the map value it was created from. Passing any other
/// map, including a clone or the same map after it has been moved, also
/// yields [`Error::IteratorInvalidated`].
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
/// use tether_bimap::Error;
///
/// let mut map = BidiHashMap::new();
/// map.put(1, "one");
/// map.put(2, "two");
///
/// let mut cursor = map.entry_cursor();
/// assert_eq!(cursor.next(&map), Ok((&1, &"one")));
///
/// map.remove(&2);
/// assert_eq!(cursor.next(&map), Err(Error::IteratorInvalidated));
/// ```
#[derive(Debug, Clone)]
pub struct EntryCursor {
    raw: RawCursor,
}

impl EntryCursor {
    pub(crate) fn new<K, V, S>(map: &BidiHashMap<K, V, S>) -> Self {
        EntryCursor {
            raw: RawCursor::new(map, Side::Key),
        }
    }

    /// Advances the cursor, returning the next `(key, value)` pair.
    ///
    /// # Errors
    ///
    /// * [`Error::IteratorInvalidated`] if `map` was structurally modified
    ///   since the cursor was created.
    /// * [`Error::IteratorExhausted`] once every mapping has been returned.
    pub fn next<'m, K, V, S>(&mut self, map: &'m BidiHashMap<K, V, S>) -> Result<(&'m K, &'m V)> {
        self.raw.advance(map).map(|m| (&m.key, &m.value))
    }

    /// Number of mappings left to visit, assuming the map is not modified.
    pub fn remaining(&self) -> usize {
        self.raw.remaining
    }
}

/// A detached, fail-fast cursor over the mappings of a [`BidiHashMap`] in
/// value order, yielding `(value, key)` pairs.
///
/// Created by [`Inverse::entry_cursor`](crate::Inverse::entry_cursor). See
/// [`EntryCursor`] for the invalidation rules.
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
/// use tether_bimap::Error;
///
/// let mut map = BidiHashMap::new();
/// map.put("a", 1);
///
/// let mut cursor = map.inverse().entry_cursor();
/// assert_eq!(cursor.next(&map), Ok((&1, &"a")));
/// assert_eq!(cursor.next(&map), Err(Error::IteratorExhausted));
/// ```
#[derive(Debug, Clone)]
pub struct InverseEntryCursor {
    raw: RawCursor,
}

impl InverseEntryCursor {
    pub(crate) fn new<K, V, S>(map: &BidiHashMap<K, V, S>) -> Self {
        InverseEntryCursor {
            raw: RawCursor::new(map, Side::Value),
        }
    }

    /// Advances the cursor, returning the next `(value, key)` pair.
    ///
    /// # Errors
    ///
    /// Same as [`EntryCursor::next`].
    pub fn next<'m, K, V, S>(&mut self, map: &'m BidiHashMap<K, V, S>) -> Result<(&'m V, &'m K)> {
        self.raw.advance(map).map(|m| (&m.value, &m.key))
    }

    /// Number of mappings left to visit, assuming the map is not modified.
    pub fn remaining(&self) -> usize {
        self.raw.remaining
    }
}

/// An iterator over the mappings of a [`BidiHashMap`] in key order.
///
/// This struct is created by the [`entries`] method on [`BidiHashMap`]. See
/// its documentation for more.
///
/// [`entries`]: BidiHashMap::entries
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
/// for (key, value) in map.entries() {
///     println!("{}: {}", key, value);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Entries<'m, K, V, S> {
    map: &'m BidiHashMap<K, V, S>,
    cursor: RawCursor,
}

impl<'m, K, V, S> Entries<'m, K, V, S> {
    pub(crate) fn new(map: &'m BidiHashMap<K, V, S>) -> Self {
        Entries {
            map,
            cursor: RawCursor::new(map, Side::Key),
        }
    }
}

impl<'m, K, V, S> Iterator for Entries<'m, K, V, S> {
    type Item = (&'m K, &'m V);

    fn next(&mut self) -> Option<Self::Item> {
        // The shared borrow of the map rules out invalidation, so any error
        // here means the walk is over.
        self.cursor
            .advance(self.map)
            .ok()
            .map(|m| (&m.key, &m.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<K, V, S> ExactSizeIterator for Entries<'_, K, V, S> {}

impl<K, V, S> FusedIterator for Entries<'_, K, V, S> {}

/// An iterator over the mappings of a [`BidiHashMap`] in value order, yielding
/// `(value, key)` pairs.
///
/// This struct is created by [`Inverse::entries`](crate::Inverse::entries).
///
/// # Examples
///
/// ```
/// use tether_bimap::BidiHashMap;
///
/// let mut map = BidiHashMap::new();
/// map.put("a", 1);
/// map.put("b", 2);
/// map.put("a", 3);
///
/// let entries: Vec<_> = map.inverse().entries().collect();
/// assert_eq!(entries, [(&2, &"b"), (&3, &"a")]);
/// ```
#[derive(Debug, Clone)]
pub struct InverseEntries<'m, K, V, S> {
    map: &'m BidiHashMap<K, V, S>,
    cursor: RawCursor,
}

impl<'m, K, V, S> InverseEntries<'m, K, V, S> {
    pub(crate) fn new(map: &'m BidiHashMap<K, V, S>) -> Self {
        InverseEntries {
            map,
            cursor: RawCursor::new(map, Side::Value),
        }
    }
}

impl<'m, K, V, S> Iterator for InverseEntries<'m, K, V, S> {
    type Item = (&'m V, &'m K);

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor
            .advance(self.map)
            .ok()
            .map(|m| (&m.value, &m.key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<K, V, S> ExactSizeIterator for InverseEntries<'_, K, V, S> {}

impl<K, V, S> FusedIterator for InverseEntries<'_, K, V, S> {}
