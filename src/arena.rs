use alloc::vec::Vec;
use core::ops::Index;
use core::ops::IndexMut;
use core::panic;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_free() -> ! {
    panic!("Attempted to access data of free slot");
}

/// Selects one of the two hashed attributes of a mapping record. Each side has
/// its own bucket table and its own order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Key = 0,
    Value = 1,
}

impl Side {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) prev: Option<Ptr>,
    pub(crate) next: Option<Ptr>,
}

/// The per-side node of a mapping record: its place in one bucket chain and
/// its place in one order list.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Node {
    pub(crate) bucket: Links,
    pub(crate) order: Links,
}

#[derive(Debug, Clone)]
pub(crate) struct Mapping<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) key_hash: u64,
    pub(crate) value_hash: u64,
}

impl<K, V> Mapping<K, V> {
    pub(crate) fn hash(&self, side: Side) -> u64 {
        match side {
            Side::Key => self.key_hash,
            Side::Value => self.value_hash,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Record<K, V> {
    nodes: [Node; 2],
    pub(crate) mapping: Mapping<K, V>,
}

impl<K, V> Record<K, V> {
    pub(crate) fn node(&self, side: Side) -> &Node {
        &self.nodes[side.index()]
    }

    pub(crate) fn node_mut(&mut self, side: Side) -> &mut Node {
        &mut self.nodes[side.index()]
    }
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Free { next_free: Option<Ptr> },
    Occupied(Record<K, V>),
}

/// Slab of mapping records. Both key nodes and value nodes live inside the
/// record they point at, so a single `Ptr` addresses a mapping from either
/// side.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<Ptr>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    /// Allocates a record with fully detached nodes.
    pub(crate) fn alloc(&mut self, mapping: Mapping<K, V>) -> Ptr {
        let record = Slot::Occupied(Record {
            nodes: [Node::default(); 2],
            mapping,
        });

        match self.free_head {
            Some(ptr) => {
                let old = core::mem::replace(&mut self.slots[ptr.unchecked_get()], record);
                self.free_head = match old {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                ptr
            }
            None => {
                let ptr = Ptr::unchecked_from(self.slots.len());
                self.slots.push(record);
                ptr
            }
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot::Occupied(_))
        )
    }

    pub(crate) fn get(&self, ptr: Ptr) -> Option<&Record<K, V>> {
        match self.slots.get(ptr.unchecked_get()) {
            Some(Slot::Occupied(record)) => Some(record),
            _ => None,
        }
    }

    /// Releases the slot and hands back the record. The caller must already
    /// have unlinked both of its nodes.
    pub(crate) fn free(&mut self, ptr: Ptr) -> Record<K, V> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let old = core::mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(ptr);

        match old {
            Slot::Occupied(record) => record,
            Slot::Free { .. } => assert_free(),
        }
    }
}

impl<K, V> Index<Ptr> for Arena<K, V> {
    type Output = Record<K, V>;

    fn index(&self, index: Ptr) -> &Self::Output {
        match &self.slots[index.unchecked_get()] {
            Slot::Occupied(record) => record,
            Slot::Free { .. } => assert_free(),
        }
    }
}

impl<K, V> IndexMut<Ptr> for Arena<K, V> {
    fn index_mut(&mut self, index: Ptr) -> &mut Self::Output {
        match &mut self.slots[index.unchecked_get()] {
            Slot::Occupied(record) => record,
            Slot::Free { .. } => assert_free(),
        }
    }
}
