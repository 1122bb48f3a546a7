use crate::Ptr;
use crate::arena::Arena;
use crate::arena::Links;
use crate::arena::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeadTail {
    pub(crate) head: Ptr,
    pub(crate) tail: Ptr,
}

/// Insertion-order list threaded through the `order` links of one side of
/// each record. The head is the oldest node, the tail the newest.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrderList {
    head_tail: Option<HeadTail>,
}

impl OrderList {
    pub(crate) fn head(&self) -> Option<Ptr> {
        self.head_tail.map(|ht| ht.head)
    }

    pub(crate) fn tail(&self) -> Option<Ptr> {
        self.head_tail.map(|ht| ht.tail)
    }

    pub(crate) fn clear(&mut self) {
        self.head_tail = None;
    }

    /// Links a detached node after the current tail.
    pub(crate) fn push_back<K, V>(&mut self, nodes: &mut Arena<K, V>, side: Side, ptr: Ptr) {
        if let Some(ht) = &mut self.head_tail {
            nodes[ht.tail].node_mut(side).order.next = Some(ptr);
            nodes[ptr].node_mut(side).order = Links {
                prev: Some(ht.tail),
                next: None,
            };
            ht.tail = ptr;
            return;
        }

        nodes[ptr].node_mut(side).order = Links::default();
        self.head_tail = Some(HeadTail {
            head: ptr,
            tail: ptr,
        });
    }

    /// Detaches `ptr`, splicing its neighbors together.
    pub(crate) fn unlink<K, V>(&mut self, nodes: &mut Arena<K, V>, side: Side, ptr: Ptr) {
        let Links { prev, next } = nodes[ptr].node(side).order;
        match (prev, next) {
            (None, None) => {
                debug_assert_eq!(
                    self.head_tail,
                    Some(HeadTail {
                        head: ptr,
                        tail: ptr
                    })
                );
                self.head_tail = None;
            }
            (None, Some(next)) => {
                nodes[next].node_mut(side).order.prev = None;
                if let Some(ht) = &mut self.head_tail {
                    ht.head = next;
                }
            }
            (Some(prev), None) => {
                nodes[prev].node_mut(side).order.next = None;
                if let Some(ht) = &mut self.head_tail {
                    ht.tail = prev;
                }
            }
            (Some(prev), Some(next)) => {
                nodes[prev].node_mut(side).order.next = Some(next);
                nodes[next].node_mut(side).order.prev = Some(prev);
            }
        }
        nodes[ptr].node_mut(side).order = Links::default();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::arena::Mapping;

    fn alloc(nodes: &mut Arena<u32, u32>, key: u32) -> Ptr {
        nodes.alloc(Mapping {
            key,
            value: key,
            key_hash: key as u64,
            value_hash: key as u64,
        })
    }

    fn collect(list: &OrderList, nodes: &Arena<u32, u32>, side: Side) -> Vec<u32> {
        let mut out = Vec::new();
        let mut cursor = list.head();
        while let Some(ptr) = cursor {
            out.push(nodes[ptr].mapping.key);
            cursor = nodes[ptr].node(side).order.next;
        }
        out
    }

    #[test]
    fn test_push_back_preserves_order() {
        let mut nodes = Arena::with_capacity(0);
        let mut list = OrderList::default();
        assert_eq!(list.head(), None);

        let ptrs: Vec<_> = (1..=3).map(|k| alloc(&mut nodes, k)).collect();
        for &ptr in &ptrs {
            list.push_back(&mut nodes, Side::Key, ptr);
        }

        assert_eq!(collect(&list, &nodes, Side::Key), [1, 2, 3]);
        assert_eq!(list.head(), Some(ptrs[0]));
        assert_eq!(list.tail(), Some(ptrs[2]));
        assert!(collect(&OrderList::default(), &nodes, Side::Value).is_empty());
    }

    #[test]
    fn test_unlink_every_position() {
        let mut nodes = Arena::with_capacity(0);
        let mut list = OrderList::default();
        let ptrs: Vec<_> = (1..=4).map(|k| alloc(&mut nodes, k)).collect();
        for &ptr in &ptrs {
            list.push_back(&mut nodes, Side::Value, ptr);
        }

        list.unlink(&mut nodes, Side::Value, ptrs[1]);
        assert_eq!(collect(&list, &nodes, Side::Value), [1, 3, 4]);

        list.unlink(&mut nodes, Side::Value, ptrs[0]);
        assert_eq!(collect(&list, &nodes, Side::Value), [3, 4]);
        assert_eq!(list.head(), Some(ptrs[2]));

        list.unlink(&mut nodes, Side::Value, ptrs[3]);
        assert_eq!(collect(&list, &nodes, Side::Value), [3]);
        assert_eq!(list.tail(), Some(ptrs[2]));

        list.unlink(&mut nodes, Side::Value, ptrs[2]);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_unlink_then_push_back_moves_to_tail() {
        let mut nodes = Arena::with_capacity(0);
        let mut list = OrderList::default();
        let ptrs: Vec<_> = (1..=3).map(|k| alloc(&mut nodes, k)).collect();
        for &ptr in &ptrs {
            list.push_back(&mut nodes, Side::Key, ptr);
        }

        list.unlink(&mut nodes, Side::Key, ptrs[0]);
        list.push_back(&mut nodes, Side::Key, ptrs[0]);
        assert_eq!(collect(&list, &nodes, Side::Key), [2, 3, 1]);

        list.unlink(&mut nodes, Side::Key, ptrs[0]);
        list.push_back(&mut nodes, Side::Key, ptrs[0]);
        assert_eq!(collect(&list, &nodes, Side::Key), [2, 3, 1]);
    }
}
