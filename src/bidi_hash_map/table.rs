use alloc::vec;
use alloc::vec::Vec;

use crate::Ptr;
use crate::arena::Arena;
use crate::arena::Links;
use crate::arena::Mapping;
use crate::arena::Side;

/// A power-of-two array of bucket-chain heads. Chains are threaded through the
/// `bucket` links of one side of each record; the record's cached hash for
/// that side picks the bucket.
#[derive(Debug, Clone)]
pub(crate) struct BucketTable {
    heads: Vec<Option<Ptr>>,
}

impl BucketTable {
    pub(crate) fn with_bucket_count(bucket_count: usize) -> Self {
        debug_assert!(bucket_count.is_power_of_two());
        BucketTable {
            heads: vec![None; bucket_count],
        }
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    pub(crate) fn bucket_of(&self, hash: u64) -> usize {
        hash as usize & (self.heads.len() - 1)
    }

    /// Drops every chain and resizes to `bucket_count` empty buckets. The
    /// records themselves are untouched; their bucket links are rewritten by
    /// the next `push_front`.
    pub(crate) fn reset(&mut self, bucket_count: usize) {
        debug_assert!(bucket_count.is_power_of_two());
        self.heads.clear();
        self.heads.resize(bucket_count, None);
    }

    pub(crate) fn clear(&mut self) {
        self.heads.fill(None);
    }

    /// Walks the chain for `hash`, checking the cached hash before calling
    /// `eq`.
    pub(crate) fn find<K, V>(
        &self,
        nodes: &Arena<K, V>,
        side: Side,
        hash: u64,
        mut eq: impl FnMut(&Mapping<K, V>) -> bool,
    ) -> Option<Ptr> {
        let mut cursor = self.heads[self.bucket_of(hash)];
        while let Some(ptr) = cursor {
            let record = &nodes[ptr];
            if record.mapping.hash(side) == hash && eq(&record.mapping) {
                return Some(ptr);
            }
            cursor = record.node(side).bucket.next;
        }
        None
    }

    /// Links `ptr` at the head of the bucket selected by its cached hash.
    pub(crate) fn push_front<K, V>(&mut self, nodes: &mut Arena<K, V>, side: Side, ptr: Ptr) {
        let bucket = self.bucket_of(nodes[ptr].mapping.hash(side));
        let old_head = self.heads[bucket];
        if let Some(old_head) = old_head {
            nodes[old_head].node_mut(side).bucket.prev = Some(ptr);
        }
        nodes[ptr].node_mut(side).bucket = Links {
            prev: None,
            next: old_head,
        };
        self.heads[bucket] = Some(ptr);
    }

    /// Removes `ptr` from its chain. Must run while the record still carries
    /// the hash it was linked under.
    pub(crate) fn unlink<K, V>(&mut self, nodes: &mut Arena<K, V>, side: Side, ptr: Ptr) {
        let Links { prev, next } = nodes[ptr].node(side).bucket;
        match prev {
            Some(prev) => nodes[prev].node_mut(side).bucket.next = next,
            None => {
                let bucket = self.bucket_of(nodes[ptr].mapping.hash(side));
                debug_assert_eq!(self.heads[bucket], Some(ptr));
                self.heads[bucket] = next;
            }
        }
        if let Some(next) = next {
            nodes[next].node_mut(side).bucket.prev = prev;
        }
        nodes[ptr].node_mut(side).bucket = Links::default();
    }

    #[cfg(test)]
    pub(crate) fn chain<K, V>(&self, nodes: &Arena<K, V>, side: Side, bucket: usize) -> Vec<Ptr> {
        let mut out = Vec::new();
        let mut cursor = self.heads[bucket];
        while let Some(ptr) = cursor {
            out.push(ptr);
            cursor = nodes[ptr].node(side).bucket.next;
        }
        out
    }
}
