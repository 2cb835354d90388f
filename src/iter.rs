//! Iterator for enumerating the paths of a DDD.

use crate::ddd::DddManager;
use crate::reference::DddId;
use crate::types::{Value, Var};

/// Iterator that yields every path of a DDD, in lexicographic order of values.
///
/// Enumeration is exponential in general; it is meant for small diagrams,
/// tests and debugging.
pub struct PathIterator<'a> {
    mgr: &'a DddManager,
    /// Stack of (node, path so far)
    stack: Vec<(DddId, Vec<(Var, Value)>)>,
}

impl<'a> PathIterator<'a> {
    /// Creates a new iterator over the paths of the given DDD.
    pub fn new(mgr: &'a DddManager, root: DddId) -> Self {
        let mut iter = Self { mgr, stack: Vec::new() };
        if !root.is_zero() {
            iter.stack.push((root, Vec::new()));
        }
        iter
    }
}

impl<'a> Iterator for PathIterator<'a> {
    type Item = Vec<(Var, Value)>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, path)) = self.stack.pop() {
            if id.is_one() {
                return Some(path);
            }

            let node = self.mgr.node(id);
            // Push in reverse, so the smallest value is explored first
            for &(value, succ) in node.arcs.iter().rev() {
                let mut next = path.clone();
                next.push((node.var, value));
                self.stack.push((succ, next));
            }
        }
        None
    }
}

impl DddManager {
    /// Returns an iterator over all paths of `f`.
    pub fn paths(&self, f: DddId) -> PathIterator<'_> {
        PathIterator::new(self, f)
    }
}
