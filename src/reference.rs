use std::fmt::{Display, Formatter};

use crate::types::NodeId;

/// A reference to a DDD node.
///
/// DDDs don't use complement edges, so `DddId` is simply a node index wrapper.
///
/// # Terminal Values
///
/// - `DddId::ZERO` (⊥): empty set of paths, the infeasible result
/// - `DddId::ONE` (⊤): the single empty path, the accept terminal
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DddId(u32);

impl DddId {
    /// Empty set (⊥): no path at all.
    pub const ZERO: DddId = DddId(0);

    /// Accept terminal (⊤): the empty path.
    pub const ONE: DddId = DddId(1);

    /// Creates a DddId from a raw index.
    pub const fn new(index: u32) -> Self {
        DddId(index)
    }

    /// Creates a DddId from a NodeId.
    pub const fn from_node(id: NodeId) -> Self {
        DddId(id.raw())
    }

    /// Returns the underlying NodeId.
    pub const fn node_id(self) -> NodeId {
        NodeId::new(self.0)
    }

    /// Returns the raw index value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the index for array access.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is a terminal (ZERO or ONE).
    pub const fn is_terminal(self) -> bool {
        self.0 <= 1
    }

    /// Returns true if this is the empty set.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this is the accept terminal.
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }
}

impl Display for DddId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "⊥"),
            1 => write!(f, "⊤"),
            _ => write!(f, "#{}", self.0),
        }
    }
}

impl From<NodeId> for DddId {
    fn from(id: NodeId) -> Self {
        DddId::from_node(id)
    }
}

/// A reference to an interned homomorphism.
///
/// Structurally equal homomorphisms are interned to the same `HomId`,
/// so comparing handles is comparing homomorphisms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct HomId(u32);

impl HomId {
    /// The identity homomorphism, interned first by every manager.
    pub const IDENTITY: HomId = HomId(0);

    /// Creates a HomId from a raw index.
    pub const fn new(index: u32) -> Self {
        HomId(index)
    }

    /// Returns the raw index value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the index for array access.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this is the identity homomorphism.
    pub const fn is_identity(self) -> bool {
        self.0 == 0
    }
}

impl Display for HomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "id"),
            _ => write!(f, "h{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals() {
        assert!(DddId::ZERO.is_zero());
        assert!(DddId::ZERO.is_terminal());
        assert!(!DddId::ZERO.is_one());

        assert!(DddId::ONE.is_one());
        assert!(DddId::ONE.is_terminal());
        assert!(!DddId::ONE.is_zero());
    }

    #[test]
    fn test_non_terminal() {
        let id = DddId::new(42);
        assert!(!id.is_terminal());
        assert_eq!(id.raw(), 42);
        assert_eq!(id.node_id(), NodeId::new(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DddId::ZERO), "⊥");
        assert_eq!(format!("{}", DddId::ONE), "⊤");
        assert_eq!(format!("{}", DddId::new(42)), "#42");
        assert_eq!(format!("{}", HomId::IDENTITY), "id");
        assert_eq!(format!("{}", HomId::new(3)), "h3");
    }
}
