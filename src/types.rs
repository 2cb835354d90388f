//! Type-safe wrappers for DDD variables, values and node indices.
//!
//! This module provides newtype wrappers that enforce compile-time distinction
//! between variable positions and node indices, preventing common mistakes in
//! diagram manipulation code.
use std::fmt;

/// A value carried by a diagram arc.
///
/// All arithmetic performed by the assignment homomorphisms is wrapping
/// two's-complement arithmetic on this type; overflow is not detected.
pub type Value = i64;

/// A variable identifier (0-indexed).
///
/// Variables are positions in the fixed global variable order: every path
/// of a diagram visits them in strictly increasing order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given position.
    pub const fn new(id: u32) -> Self {
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the variable position as a `usize`, e.g. to index coefficient vectors.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<u32> for Var {
    fn from(id: u32) -> Self {
        Var::new(id)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// A node identifier (index into the node storage array).
///
/// # Invariants
///
/// - `NodeId(0)` is the ZERO terminal (empty set of paths)
/// - `NodeId(1)` is the ONE terminal (the single empty path)
/// - Decision nodes start at index 2
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel value for the end of a collision chain.
    pub const INVALID: NodeId = NodeId(0xFFFF_FFFF);

    /// Creates a new NodeId from a raw index.
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the node index as a `usize` for array indexing.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => write!(f, "⊥"),
            1 => write!(f, "⊤"),
            _ => write!(f, "@{}", self.0),
        }
    }
}

impl From<u32> for NodeId {
    fn from(index: u32) -> Self {
        NodeId::new(index)
    }
}
