use std::hash::{Hash, Hasher};

use crate::reference::DddId;
use crate::types::{NodeId, Value, Var};

/// One outgoing arc of a node: the value carried by the variable, and the successor.
pub type Arc = (Value, DddId);

/// A DDD node: a variable and its outgoing arcs.
///
/// # Fields
///
/// - `var`: Variable decided at this node
/// - `arcs`: Outgoing `(value, successor)` pairs
/// - `next`: Next node in hash collision chain
///
/// # Invariant
///
/// Arcs are sorted by strictly increasing value and no arc leads to
/// `DddId::ZERO`. A node without arcs is never stored; it is ⊥.
///
/// # Semantics
///
/// A node represents the set of paths:
/// ```text
/// P(node) = ⋃ { (var = value) · p | (value, succ) ∈ arcs, p ∈ P(succ) }
/// ```
#[derive(Debug, Clone)]
pub struct DddNode {
    /// Decision variable.
    pub var: Var,
    /// Outgoing arcs, sorted by value.
    pub arcs: Box<[Arc]>,
    /// Next node in collision chain for unique table.
    pub next: NodeId,
    /// Precomputed hash for efficient lookup.
    hash: u64,
}

impl Default for DddNode {
    fn default() -> Self {
        Self {
            var: Var::new(0),
            arcs: Box::new([]),
            next: Self::NO_NEXT,
            hash: 0,
        }
    }
}

impl DddNode {
    /// Sentinel value for end of hash collision chain.
    pub const NO_NEXT: NodeId = NodeId::INVALID;

    /// Creates a new DDD node.
    ///
    /// # Panics
    ///
    /// Debug-panics if the arcs are not canonical.
    pub fn new(var: Var, arcs: Box<[Arc]>) -> Self {
        debug_assert!(!arcs.is_empty(), "DDD node must have at least one arc");
        debug_assert!(
            arcs.windows(2).all(|w| w[0].0 < w[1].0),
            "DDD node arcs must be sorted by strictly increasing value"
        );
        debug_assert!(arcs.iter().all(|(_, s)| !s.is_zero()), "DDD node arcs cannot lead to ZERO");
        let hash = hash_arcs(&arcs);
        Self {
            var,
            arcs,
            next: Self::NO_NEXT,
            hash,
        }
    }

    /// Returns the precomputed hash of the arcs.
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl PartialEq for DddNode {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.var == other.var && self.arcs == other.arcs
    }
}

impl Eq for DddNode {}

/// Hash function for a list of arcs.
///
/// The variable is not mixed in: unique subtables are kept per variable.
pub fn hash_arcs(arcs: &[Arc]) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for (value, succ) in arcs {
        value.hash(&mut hasher);
        succ.raw().hash(&mut hasher);
    }
    hasher.finish()
}
