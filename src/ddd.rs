//! Data Decision Diagram (DDD) manager.
//!
//! This module provides the diagram substrate the homomorphisms run on.
//!
//! # Overview
//!
//! A DDD is a multi-valued decision diagram: each node decides one variable
//! and has one outgoing arc per value that variable may take. A diagram
//! represents a set of paths, i.e. a set of valuations of the variables it
//! visits, and every path visits variables in strictly increasing order.
//!
//! Nodes are hash-consed: equal `(variable, arcs)` always give the same
//! [`DddId`], so equality of diagrams is equality of handles.
//!
//! # Quick Start
//!
//! ```
//! use ddd_rs::ddd::DddManager;
//! use ddd_rs::types::Var;
//!
//! let mgr = DddManager::new();
//!
//! // All pairs (x0, x1) with x0 in 0..2 and x1 in 0..3
//! let all = mgr.product(&[0..2, 0..3]);
//! assert_eq!(mgr.count(all).to_string(), "6");
//!
//! // The single path x0=1, x1=2
//! let p = mgr.path(&[(Var::new(0), 1), (Var::new(1), 2)]);
//! assert_eq!(mgr.intersection(all, p), p);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::ops::Range;

use log::debug;
use num_bigint::BigUint;

use crate::cache::{ApplyKey, Cache, CacheKey, CacheStats, OpType};
use crate::config::DddConfig;
use crate::hom::HomTable;
use crate::node::{Arc, DddNode};
use crate::reference::DddId;
use crate::subtable::Subtable;
use crate::types::{NodeId, Value, Var};

/// The DDD manager: owns all nodes and homomorphisms and handles operations.
///
/// All operations go through the manager. The manager maintains:
/// - Node storage (Vec of [DddNode])
/// - Per-variable subtables for hash-based lookup
/// - Interned homomorphisms
/// - Operation and apply caches for memoization
///
/// A manager is a single "diagram universe": handles from one manager are
/// meaningless in another one, and everything is dropped with the manager.
/// The manager uses interior mutability and is not `Sync`.
pub struct DddManager {
    /// Node storage. Index 0 = ZERO terminal, Index 1 = ONE terminal.
    nodes: RefCell<Vec<DddNode>>,

    /// Per-variable subtables for unique table lookup (indexed by variable).
    subtables: RefCell<Vec<Subtable>>,

    /// Bucket bits for newly allocated subtables.
    subtable_bits: usize,

    /// Binary operation cache.
    cache: RefCell<Cache<CacheKey, DddId>>,

    /// Path counting cache.
    count_cache: RefCell<HashMap<DddId, BigUint>>,

    /// Interned homomorphisms.
    pub(crate) homs: RefCell<HomTable>,

    /// Homomorphism application cache.
    pub(crate) apply_cache: RefCell<Cache<ApplyKey, DddId>>,
}

impl Default for DddManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for DddManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DddManager")
            .field("nodes", &self.num_nodes())
            .field("vars", &self.num_vars())
            .field("homs", &self.num_homs())
            .finish()
    }
}

impl DddManager {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates a new DDD manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DddConfig::default())
    }

    /// Creates a manager with the given configuration.
    pub fn with_config(config: DddConfig) -> Self {
        debug!("creating DDD manager with {:?}", config);

        // Initialize with two terminal nodes
        let mut nodes = Vec::with_capacity(config.capacity.max(2));

        // Index 0: ZERO terminal (⊥)
        nodes.push(DddNode::default());

        // Index 1: ONE terminal (⊤)
        nodes.push(DddNode::default());

        Self {
            nodes: RefCell::new(nodes),
            subtables: RefCell::new(Vec::new()),
            subtable_bits: config.subtable_bits,
            cache: RefCell::new(Cache::new(config.cache_bits)),
            count_cache: RefCell::new(HashMap::new()),
            homs: RefCell::new(HomTable::new()),
            apply_cache: RefCell::new(Cache::new(config.cache_bits)),
        }
    }

    // ========================================================================
    // Terminal Constants
    // ========================================================================

    /// Returns the empty set (⊥): the infeasible result.
    pub fn zero(&self) -> DddId {
        DddId::ZERO
    }

    /// Returns the accept terminal (⊤): the set containing only the empty path.
    pub fn one(&self) -> DddId {
        DddId::ONE
    }

    #[inline(always)]
    pub fn is_zero(&self, f: DddId) -> bool {
        f.is_zero()
    }

    #[inline(always)]
    pub fn is_one(&self, f: DddId) -> bool {
        f.is_one()
    }

    #[inline(always)]
    pub fn is_terminal(&self, f: DddId) -> bool {
        f.is_terminal()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of decision nodes (terminals excluded).
    pub fn num_nodes(&self) -> usize {
        self.nodes.borrow().len() - 2
    }

    /// Number of variables a node has been created for.
    pub fn num_vars(&self) -> usize {
        self.subtables.borrow().len()
    }

    /// Counters of the set operation cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    /// Counters of the homomorphism application cache.
    pub fn apply_cache_stats(&self) -> CacheStats {
        self.apply_cache.borrow().stats()
    }

    /// Drops every memoized result. Nodes and homomorphisms stay valid.
    pub fn clear_caches(&self) {
        self.cache.borrow_mut().clear();
        self.apply_cache.borrow_mut().clear();
        self.count_cache.borrow_mut().clear();
    }

    // ========================================================================
    // Node Construction
    // ========================================================================

    fn ensure_var(&self, var: Var) {
        let mut subtables = self.subtables.borrow_mut();
        while subtables.len() <= var.index() {
            let v = Var::new(subtables.len() as u32);
            subtables.push(Subtable::with_bucket_bits(v, self.subtable_bits));
        }
    }

    /// Creates or retrieves the node with the given variable and canonical arcs.
    fn get_node(&self, var: Var, arcs: Box<[Arc]>) -> DddId {
        self.ensure_var(var);

        // Check unique table
        {
            let subtables = self.subtables.borrow();
            let nodes = self.nodes.borrow();
            if let Some(id) = subtables[var.index()].find(&arcs, &nodes) {
                return DddId::from_node(id);
            }
        }

        // Create new node
        let id = {
            let mut nodes = self.nodes.borrow_mut();
            let id = NodeId::new(nodes.len() as u32);
            nodes.push(DddNode::new(var, arcs));
            id
        };

        // Insert into unique table
        {
            let mut subtables = self.subtables.borrow_mut();
            let mut nodes = self.nodes.borrow_mut();
            subtables[var.index()].insert(id, &mut nodes);
        }

        DddId::from_node(id)
    }

    /// Creates or retrieves the node deciding `var` with the given arcs.
    ///
    /// Arcs may come in any order: arcs to ⊥ are dropped, arcs are sorted by
    /// value, and arcs sharing a value are merged by union of their
    /// successors. If no arc survives, the result is ⊥.
    ///
    /// # Panics
    ///
    /// Panics if the successors do not all decide the same variables, or if
    /// one of them decides a variable not greater than `var`.
    pub fn mk_node(&self, var: Var, arcs: impl IntoIterator<Item = Arc>) -> DddId {
        let arcs: Vec<Arc> = arcs.into_iter().filter(|(_, succ)| !succ.is_zero()).collect();
        if let Some(&(_, first)) = arcs.first() {
            let shape = self.shape(first);
            assert!(
                shape.first().map_or(true, |&v| v > var),
                "Successors of a node on {} must decide greater variables",
                var
            );
            assert!(
                arcs.iter().all(|&(_, succ)| self.shape(succ) == shape),
                "Successors of a node on {} must all decide the same variables",
                var
            );
        }
        self.reduce(var, arcs)
    }

    /// The variables decided along any path of the non-empty diagram `f`.
    ///
    /// Every node of a diagram has successors of one shape, so following the
    /// first arcs is enough.
    fn shape(&self, mut f: DddId) -> Vec<Var> {
        let nodes = self.nodes.borrow();
        let mut vars = Vec::new();
        while !f.is_terminal() {
            let node = &nodes[f.index()];
            vars.push(node.var);
            f = node.arcs[0].1;
        }
        vars
    }

    /// [`mk_node`][DddManager::mk_node] for arcs whose successors are known to share one shape.
    fn reduce(&self, var: Var, mut arcs: Vec<Arc>) -> DddId {
        arcs.retain(|(_, succ)| !succ.is_zero());
        if arcs.is_empty() {
            return DddId::ZERO;
        }
        arcs.sort_by_key(|&(value, _)| value);

        let mut merged: Vec<Arc> = Vec::with_capacity(arcs.len());
        for (value, succ) in arcs {
            match merged.last_mut() {
                Some(last) if last.0 == value => last.1 = self.union(last.1, succ),
                _ => merged.push((value, succ)),
            }
        }
        self.get_node(var, merged.into_boxed_slice())
    }

    /// Creates the node `var --value--> succ`, or ⊥ if `succ` is ⊥.
    pub fn edge(&self, var: Var, value: Value, succ: DddId) -> DddId {
        if succ.is_zero() {
            return DddId::ZERO;
        }
        self.get_node(var, Box::new([(value, succ)]))
    }

    /// Access node data.
    ///
    /// # Panics
    ///
    /// Panics if `f` is a terminal.
    pub fn node(&self, f: DddId) -> DddNode {
        assert!(!f.is_terminal(), "Terminal {} has no node data", f);
        self.nodes.borrow()[f.index()].clone()
    }

    /// The variable decided at the root of `f`.
    pub fn variable(&self, f: DddId) -> Var {
        assert!(!f.is_terminal(), "Terminal {} has no variable", f);
        self.nodes.borrow()[f.index()].var
    }

    /// The outgoing arcs of the root of `f`, sorted by value.
    pub fn arcs(&self, f: DddId) -> Vec<Arc> {
        assert!(!f.is_terminal(), "Terminal {} has no arcs", f);
        self.nodes.borrow()[f.index()].arcs.to_vec()
    }

    // ========================================================================
    // Primitive Constructors
    // ========================================================================

    /// Creates the diagram containing exactly one path.
    ///
    /// # Panics
    ///
    /// Panics if the variables are not strictly increasing.
    pub fn path(&self, assignment: &[(Var, Value)]) -> DddId {
        assert!(
            assignment.windows(2).all(|w| w[0].0 < w[1].0),
            "Path variables must be strictly increasing"
        );
        assignment
            .iter()
            .rev()
            .fold(DddId::ONE, |succ, &(var, value)| self.edge(var, value, succ))
    }

    /// Creates the full product `x0 ∈ domains[0], x1 ∈ domains[1], ...`.
    ///
    /// An empty range anywhere gives ⊥.
    pub fn product(&self, domains: &[Range<Value>]) -> DddId {
        let mut result = DddId::ONE;
        for (i, domain) in domains.iter().enumerate().rev() {
            let var = Var::new(i as u32);
            result = self.reduce(var, domain.clone().map(|value| (value, result)).collect());
        }
        result
    }

    // ========================================================================
    // Set Operations
    // ========================================================================

    /// Union of two sets of paths: `f ∪ g`.
    ///
    /// # Panics
    ///
    /// Both non-empty operands must decide the same variable at every common
    /// position: a set mixing paths of different shapes has no canonical node.
    pub fn union(&self, f: DddId, g: DddId) -> DddId {
        if f.is_zero() {
            return g;
        }
        if g.is_zero() || f == g {
            return f;
        }
        assert!(
            !f.is_terminal() && !g.is_terminal(),
            "Cannot unite paths of different lengths: {} and {}",
            f,
            g
        );

        let key = CacheKey::commutative(OpType::Union, f, g);
        if let Some(&res) = self.cache.borrow_mut().get(&key) {
            return res;
        }

        let (f_node, g_node) = (self.node(f), self.node(g));
        assert_eq!(
            f_node.var, g_node.var,
            "Cannot unite diagrams deciding different variables"
        );

        let mut merged: Vec<Arc> = Vec::with_capacity(f_node.arcs.len() + g_node.arcs.len());
        let (mut i, mut j) = (0, 0);
        while i < f_node.arcs.len() && j < g_node.arcs.len() {
            let (fv, fs) = f_node.arcs[i];
            let (gv, gs) = g_node.arcs[j];
            if fv < gv {
                merged.push((fv, fs));
                i += 1;
            } else if fv > gv {
                merged.push((gv, gs));
                j += 1;
            } else {
                merged.push((fv, self.union(fs, gs)));
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&f_node.arcs[i..]);
        merged.extend_from_slice(&g_node.arcs[j..]);

        let res = self.get_node(f_node.var, merged.into_boxed_slice());
        self.cache.borrow_mut().insert(key, res);
        res
    }

    /// Intersection of two sets of paths: `f ∩ g`.
    ///
    /// Paths of different shapes never intersect.
    pub fn intersection(&self, f: DddId, g: DddId) -> DddId {
        if f.is_zero() || g.is_zero() {
            return DddId::ZERO;
        }
        if f == g {
            return f;
        }
        if f.is_terminal() || g.is_terminal() {
            return DddId::ZERO;
        }

        let key = CacheKey::commutative(OpType::Intersection, f, g);
        if let Some(&res) = self.cache.borrow_mut().get(&key) {
            return res;
        }

        let (f_node, g_node) = (self.node(f), self.node(g));
        let res = if f_node.var != g_node.var {
            DddId::ZERO
        } else {
            let mut arcs = Vec::new();
            for &(value, fs) in f_node.arcs.iter() {
                if let Ok(pos) = g_node.arcs.binary_search_by_key(&value, |&(v, _)| v) {
                    arcs.push((value, self.intersection(fs, g_node.arcs[pos].1)));
                }
            }
            self.reduce(f_node.var, arcs)
        };

        self.cache.borrow_mut().insert(key, res);
        res
    }

    /// Difference of two sets of paths: `f \ g`.
    pub fn difference(&self, f: DddId, g: DddId) -> DddId {
        if f.is_zero() || f == g {
            return DddId::ZERO;
        }
        if g.is_zero() || f.is_terminal() || g.is_terminal() {
            return f;
        }

        let key = CacheKey::non_commutative(OpType::Difference, f, g);
        if let Some(&res) = self.cache.borrow_mut().get(&key) {
            return res;
        }

        let (f_node, g_node) = (self.node(f), self.node(g));
        let res = if f_node.var != g_node.var {
            f
        } else {
            let mut arcs = Vec::with_capacity(f_node.arcs.len());
            for &(value, fs) in f_node.arcs.iter() {
                match g_node.arcs.binary_search_by_key(&value, |&(v, _)| v) {
                    Ok(pos) => arcs.push((value, self.difference(fs, g_node.arcs[pos].1))),
                    Err(_) => arcs.push((value, fs)),
                }
            }
            self.reduce(f_node.var, arcs)
        };

        self.cache.borrow_mut().insert(key, res);
        res
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of paths in `f`.
    pub fn count(&self, f: DddId) -> BigUint {
        if f.is_zero() {
            return BigUint::from(0u32);
        }
        if f.is_one() {
            return BigUint::from(1u32);
        }

        if let Some(res) = self.count_cache.borrow().get(&f) {
            return res.clone();
        }

        let mut res = BigUint::from(0u32);
        for (_, succ) in self.arcs(f) {
            res += self.count(succ);
        }

        self.count_cache.borrow_mut().insert(f, res.clone());
        res
    }

    /// Returns true if `f` contains the given path.
    pub fn contains(&self, f: DddId, path: &[(Var, Value)]) -> bool {
        let mut current = f;
        for &(var, value) in path {
            if current.is_terminal() {
                return false;
            }
            let node = self.node(current);
            if node.var != var {
                return false;
            }
            match node.arcs.binary_search_by_key(&value, |&(v, _)| v) {
                Ok(pos) => current = node.arcs[pos].1,
                Err(_) => return false,
            }
        }
        current.is_one()
    }

    /// Renders `f` as a nested bracket string, sharing already printed nodes.
    pub fn to_bracket_string(&self, f: DddId) -> String {
        let mut visited = HashSet::new();
        self.node_to_str(f, &mut visited)
    }

    fn node_to_str(&self, f: DddId, visited: &mut HashSet<DddId>) -> String {
        if f.is_terminal() {
            return f.to_string();
        }
        if !visited.insert(f) {
            return f.to_string();
        }

        let node = self.node(f);
        let arcs: Vec<String> = node
            .arcs
            .iter()
            .map(|&(value, succ)| format!("{}: {}", value, self.node_to_str(succ, visited)))
            .collect();
        format!("{}:({}, {})", f, node.var, arcs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn x(i: u32) -> Var {
        Var::new(i)
    }

    #[test]
    fn test_terminals() {
        let mgr = DddManager::new();
        assert!(mgr.is_zero(mgr.zero()));
        assert!(mgr.is_one(mgr.one()));
        assert!(mgr.is_terminal(mgr.zero()));
        assert!(mgr.is_terminal(mgr.one()));
        assert_eq!(mgr.num_nodes(), 0);
    }

    #[test]
    fn test_hash_consing() {
        let mgr = DddManager::new();
        let a = mgr.edge(x(0), 3, mgr.one());
        let b = mgr.edge(x(0), 3, mgr.one());
        assert_eq!(a, b);
        assert_eq!(mgr.num_nodes(), 1);

        let c = mgr.mk_node(x(0), [(5, mgr.one()), (1, mgr.one())]);
        let d = mgr.mk_node(x(0), [(1, mgr.one()), (5, mgr.one())]);
        assert_eq!(c, d);
        assert_eq!(mgr.arcs(c), vec![(1, DddId::ONE), (5, DddId::ONE)]);
    }

    #[test]
    fn test_mk_node_drops_zero_arcs() {
        let mgr = DddManager::new();
        assert_eq!(mgr.mk_node(x(0), [(1, mgr.zero())]), mgr.zero());
        assert_eq!(mgr.mk_node(x(0), std::iter::empty()), mgr.zero());
        assert_eq!(mgr.edge(x(0), 1, mgr.zero()), mgr.zero());

        let f = mgr.mk_node(x(0), [(1, mgr.zero()), (2, mgr.one())]);
        assert_eq!(f, mgr.edge(x(0), 2, mgr.one()));
    }

    #[test]
    fn test_mk_node_merges_duplicate_values() {
        let mgr = DddManager::new();
        let a = mgr.edge(x(1), 0, mgr.one());
        let b = mgr.edge(x(1), 1, mgr.one());
        let f = mgr.mk_node(x(0), [(7, a), (7, b)]);
        assert_eq!(mgr.arcs(f), vec![(7, mgr.union(a, b))]);
        assert_eq!(mgr.count(f), BigUint::from(2u32));
    }

    #[test]
    #[should_panic(expected = "Successors of a node on x0 must all decide the same variables")]
    fn test_mk_node_mixed_lengths() {
        let mgr = DddManager::new();
        let tail = mgr.path(&[(x(1), 0)]);
        mgr.mk_node(x(0), [(0, mgr.one()), (1, tail)]);
    }

    #[test]
    #[should_panic(expected = "Successors of a node on x0 must all decide the same variables")]
    fn test_mk_node_mixed_variables() {
        let mgr = DddManager::new();
        let a = mgr.path(&[(x(1), 0)]);
        let b = mgr.path(&[(x(2), 0)]);
        mgr.mk_node(x(0), [(0, a), (1, b)]);
    }

    #[test]
    #[should_panic(expected = "Successors of a node on x1 must decide greater variables")]
    fn test_mk_node_unordered() {
        let mgr = DddManager::new();
        let tail = mgr.path(&[(x(0), 0)]);
        mgr.mk_node(x(1), [(0, tail)]);
    }

    #[test]
    fn test_mk_node_same_shape() {
        let mgr = DddManager::new();
        let a = mgr.path(&[(x(1), 7), (x(2), 0)]);
        let b = mgr.product(&[0..1, 2..4, 0..1]);
        let b = mgr.arcs(b)[0].1;
        let f = mgr.mk_node(x(0), [(0, a), (1, b), (2, mgr.zero())]);
        assert_eq!(mgr.arcs(f).len(), 2);
    }

    #[test]
    fn test_product_count() {
        let mgr = DddManager::new();
        let f = mgr.product(&[0..4, 0..4, 0..2]);
        assert_eq!(mgr.count(f), BigUint::from(32u32));
        // One node per variable thanks to sharing.
        assert_eq!(mgr.num_nodes(), 3);
        assert_eq!(mgr.product(&[0..4, 0..0]), mgr.zero());
        assert_eq!(mgr.product(&[]), mgr.one());
    }

    #[test]
    fn test_path_and_contains() {
        let mgr = DddManager::new();
        let p = mgr.path(&[(x(0), 1), (x(1), -2)]);
        assert!(mgr.contains(p, &[(x(0), 1), (x(1), -2)]));
        assert!(!mgr.contains(p, &[(x(0), 1), (x(1), 2)]));
        assert!(!mgr.contains(p, &[(x(0), 1)]));
        assert!(!mgr.contains(p, &[(x(1), 1), (x(1), -2)]));
        assert_eq!(mgr.count(p), BigUint::from(1u32));
    }

    #[test]
    #[should_panic(expected = "Path variables must be strictly increasing")]
    fn test_path_unordered() {
        let mgr = DddManager::new();
        mgr.path(&[(x(1), 0), (x(0), 0)]);
    }

    #[test]
    fn test_union() {
        let mgr = DddManager::new();
        let p = mgr.path(&[(x(0), 1), (x(1), 2)]);
        let q = mgr.path(&[(x(0), 1), (x(1), 3)]);
        let r = mgr.path(&[(x(0), 0), (x(1), 3)]);

        let pq = mgr.union(p, q);
        assert_eq!(mgr.count(pq), BigUint::from(2u32));
        assert_eq!(mgr.arcs(pq).len(), 1);

        let pqr = mgr.union(pq, r);
        assert_eq!(mgr.count(pqr), BigUint::from(3u32));
        assert_eq!(mgr.union(r, pq), pqr);
        assert_eq!(mgr.union(pqr, mgr.zero()), pqr);
        assert_eq!(mgr.union(pqr, p), pqr);
    }

    #[test]
    #[should_panic(expected = "Cannot unite diagrams deciding different variables")]
    fn test_union_incompatible() {
        let mgr = DddManager::new();
        let p = mgr.path(&[(x(0), 1)]);
        let q = mgr.path(&[(x(1), 1)]);
        mgr.union(p, q);
    }

    #[test]
    fn test_intersection() {
        let mgr = DddManager::new();
        let all = mgr.product(&[0..3, 0..3]);
        let p = mgr.path(&[(x(0), 1), (x(1), 2)]);
        let q = mgr.path(&[(x(0), 5), (x(1), 2)]);

        assert_eq!(mgr.intersection(all, p), p);
        assert_eq!(mgr.intersection(all, q), mgr.zero());
        assert_eq!(mgr.intersection(p, mgr.zero()), mgr.zero());
        assert_eq!(mgr.intersection(p, mgr.one()), mgr.zero());
        assert_eq!(mgr.intersection(p, mgr.path(&[(x(1), 2)])), mgr.zero());
    }

    #[test]
    fn test_difference() {
        let mgr = DddManager::new();
        let all = mgr.product(&[0..3, 0..3]);
        let p = mgr.path(&[(x(0), 1), (x(1), 2)]);

        let rest = mgr.difference(all, p);
        assert_eq!(mgr.count(rest), BigUint::from(8u32));
        assert!(!mgr.contains(rest, &[(x(0), 1), (x(1), 2)]));
        assert_eq!(mgr.union(rest, p), all);
        assert_eq!(mgr.difference(p, all), mgr.zero());
        assert_eq!(mgr.difference(p, mgr.zero()), p);
        assert_eq!(mgr.difference(p, p), mgr.zero());
    }

    #[test]
    fn test_set_operations_are_cached() {
        let mgr = DddManager::new();
        let p = mgr.path(&[(x(0), 1), (x(1), 2)]);
        let q = mgr.path(&[(x(0), 1), (x(1), 3)]);
        let first = mgr.union(p, q);
        let hits = mgr.cache_stats().hits;
        let second = mgr.union(q, p);
        assert_eq!(first, second);
        assert_eq!(mgr.cache_stats().hits, hits + 1);

        mgr.clear_caches();
        assert_eq!(mgr.cache_stats().entries, 0);
        assert_eq!(mgr.union(p, q), first);
    }

    #[test]
    fn test_bracket_string() {
        let mgr = DddManager::new();
        let p = mgr.path(&[(x(0), 1)]);
        assert_eq!(mgr.to_bracket_string(p), format!("{}:(x0, 1: ⊤)", p));
        assert_eq!(mgr.to_bracket_string(mgr.zero()), "⊥");
    }
}
