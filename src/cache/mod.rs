//! Operation caches for DDD computations.
//!
//! Two caches live in every [`DddManager`][crate::ddd::DddManager]:
//!
//! | Cache | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | operation cache | [`CacheKey`] | `DddId` | union, intersection, difference |
//! | apply cache | [`ApplyKey`] | `DddId` | homomorphism applications |
//!
//! Both use [`HashMapCache`]: no collisions and dynamic sizing, so a hit is
//! always a genuine hit. Entries are never invalidated during evaluation,
//! since nodes and homomorphisms are immutable once created.

mod hashmap;

pub use hashmap::{CacheStats, HashMapCache};

use crate::reference::{DddId, HomId};

/// Default cache implementation.
pub type Cache<K, V> = HashMapCache<K, V>;

/// Cache key for binary set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub op: OpType,
    pub f: DddId,
    pub g: DddId,
}

/// Operation types for caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Union,
    Intersection,
    Difference,
}

impl CacheKey {
    /// Create a key for a commutative operation, normalizing operand order.
    pub fn commutative(op: OpType, f: DddId, g: DddId) -> Self {
        let (f, g) = if f <= g { (f, g) } else { (g, f) };
        Self { op, f, g }
    }

    /// Create a key for a non-commutative operation.
    pub fn non_commutative(op: OpType, f: DddId, g: DddId) -> Self {
        Self { op, f, g }
    }
}

/// Cache key for a homomorphism application: `h(f)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplyKey {
    pub hom: HomId,
    pub f: DddId,
}

impl ApplyKey {
    pub fn new(hom: HomId, f: DddId) -> Self {
        Self { hom, f }
    }
}
