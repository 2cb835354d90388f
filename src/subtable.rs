//! Per-variable subtable for DDD nodes with intrusive hashing.
//!
//! Collision chains are stored in the nodes themselves (`DddNode.next`),
//! the subtable only keeps the bucket heads.

use crate::node::{hash_arcs, Arc, DddNode};
use crate::types::{NodeId, Var};

/// Default number of bucket bits (2^10 = 1024 buckets per variable).
pub const DEFAULT_BUCKET_BITS: usize = 10;

/// A subtable storing DDD nodes for a single variable.
///
/// Uses intrusive hashing: collision chains stored via `DddNode.next`,
/// and `buckets` array holds head pointers to each chain.
#[derive(Debug, Clone)]
pub struct Subtable {
    /// The variable for all nodes in this subtable.
    pub variable: Var,

    /// Bucket array: each entry is a head pointer to a collision chain.
    /// `DddNode::NO_NEXT` indicates an empty bucket.
    buckets: Vec<NodeId>,

    /// Bitmask for hash function: `bucket_index = hash & bitmask`.
    bitmask: u64,

    /// Number of nodes in this subtable.
    count: usize,
}

impl Subtable {
    /// Create a new empty subtable for the given variable.
    pub fn new(variable: Var) -> Self {
        Self::with_bucket_bits(variable, DEFAULT_BUCKET_BITS)
    }

    /// Create a new subtable with specified bucket count (2^bits).
    pub fn with_bucket_bits(variable: Var, bits: usize) -> Self {
        assert!(bits <= 31, "Bucket bits should be in the range 0..=31");
        let num_buckets = 1 << bits;
        let bitmask = (num_buckets - 1) as u64;
        Self {
            variable,
            buckets: vec![DddNode::NO_NEXT; num_buckets],
            bitmask,
            count: 0,
        }
    }

    #[inline]
    fn bucket_index(&self, hash: u64) -> usize {
        (hash & self.bitmask) as usize
    }

    /// Look up a node by its arcs.
    ///
    /// Returns the node index if a node with these arcs exists.
    pub fn find(&self, arcs: &[Arc], nodes: &[DddNode]) -> Option<NodeId> {
        let hash = hash_arcs(arcs);
        let mut current = self.buckets[self.bucket_index(hash)];

        while current != DddNode::NO_NEXT {
            let node = &nodes[current.index()];
            if node.hash() == hash && &*node.arcs == arcs {
                return Some(current);
            }
            current = node.next;
        }

        None
    }

    /// Insert a node into the subtable.
    ///
    /// Updates the node's `next` pointer and the bucket head.
    pub fn insert(&mut self, id: NodeId, nodes: &mut [DddNode]) {
        let bucket_idx = self.bucket_index(nodes[id.index()].hash());
        let old_head = self.buckets[bucket_idx];
        self.buckets[bucket_idx] = id;
        nodes[id.index()].next = old_head;
        self.count += 1;
    }

    /// Number of nodes in this subtable.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the subtable is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
