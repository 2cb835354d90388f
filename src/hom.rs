//! Homomorphisms over DDDs.
//!
//! A homomorphism is a transformation of a set of paths that distributes over
//! union and is applied one variable at a time, without enumerating paths.
//! Homomorphisms are immutable values of the closed variant type [`Hom`];
//! the manager interns them, so two structurally equal homomorphisms always
//! get the same [`HomId`] and share their memoized applications.
//!
//! # Combinators
//!
//! | Constructor | Meaning of `h(f)` |
//! |-------------|-------------------|
//! | [`identity`][DddManager::identity] | `f` |
//! | [`constant(d)`][DddManager::constant] | `d` (`⊥` stays `⊥`) |
//! | [`prefix(x, v, h)`][DddManager::prefix] | `x=v · h(f)` |
//! | [`compose(a, b)`][DddManager::compose] | `a(b(f))` |
//! | [`hom_union(a, b)`][DddManager::hom_union] | `a(f) ∪ b(f)` |
//! | [`fixpoint(h)`][DddManager::fixpoint] | `h(h(...h(f)))` until stable |
//!
//! The inductive homomorphisms ([`Linear`] and [`Action`]) implement the
//! [`Inductive`] contract and are rewritten into successor homomorphisms as
//! the diagram is consumed, see [`DddManager::apply`].

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::action::Action;
use crate::ddd::DddManager;
use crate::linear::Linear;
use crate::reference::{DddId, HomId};
use crate::types::{Value, Var};

/// The contract of inductive homomorphisms.
///
/// Applying an inductive homomorphism `h` to a node deciding `var` gives
/// the union over its arcs `(value, succ)` of `h.phi(var, value)(succ)`;
/// applying it to the accept terminal gives `h.phi_one()`.
pub trait Inductive {
    /// Result at the accept terminal, once every variable has been consumed.
    fn phi_one(&self, mgr: &DddManager) -> DddId;

    /// Homomorphism to apply to the successor of the arc `var = value`.
    ///
    /// Pruning is `mgr.constant(mgr.zero())`, re-emitting the arc is
    /// `mgr.prefix(var, value, next)`.
    fn phi(&self, mgr: &DddManager, var: Var, value: Value) -> HomId;
}

/// A homomorphism.
///
/// Equality and hashing are structural, children are compared by [`HomId`],
/// which is sound because children are interned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Hom {
    Identity,
    Constant(DddId),
    Prefix(Var, Value, HomId),
    Compose(HomId, HomId),
    Union(HomId, HomId),
    Fixpoint(HomId),
    Linear(Linear),
    Action(Action),
}

impl fmt::Display for Hom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hom::Identity => write!(f, "id"),
            Hom::Constant(d) => write!(f, "const({})", d),
            Hom::Prefix(var, value, next) => write!(f, "({}={})·{}", var, value, next),
            Hom::Compose(outer, inner) => write!(f, "{}∘{}", outer, inner),
            Hom::Union(a, b) => write!(f, "{}+{}", a, b),
            Hom::Fixpoint(h) => write!(f, "fix({})", h),
            Hom::Linear(linear) => write!(f, "{}", linear),
            Hom::Action(action) => write!(f, "{}", action),
        }
    }
}

/// The unique table of homomorphisms.
pub struct HomTable {
    homs: Vec<Rc<Hom>>,
    index: HashMap<Rc<Hom>, HomId>,
}

impl Default for HomTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HomTable {
    /// Creates a table holding only the identity, as [`HomId::IDENTITY`].
    pub fn new() -> Self {
        let mut table = Self {
            homs: Vec::new(),
            index: HashMap::new(),
        };
        let id = table.intern(Hom::Identity);
        assert_eq!(id, HomId::IDENTITY);
        table
    }

    /// Returns the handle of `hom`, allocating one if it is new.
    pub fn intern(&mut self, hom: Hom) -> HomId {
        if let Some(&id) = self.index.get(&hom) {
            return id;
        }
        let id = HomId::new(self.homs.len() as u32);
        let hom = Rc::new(hom);
        self.homs.push(Rc::clone(&hom));
        self.index.insert(hom, id);
        id
    }

    pub fn get(&self, id: HomId) -> Rc<Hom> {
        Rc::clone(&self.homs[id.index()])
    }

    pub fn len(&self) -> usize {
        self.homs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.homs.is_empty()
    }
}

impl DddManager {
    /// Interns a homomorphism.
    pub fn intern(&self, hom: Hom) -> HomId {
        self.homs.borrow_mut().intern(hom)
    }

    /// Access homomorphism data.
    pub fn hom(&self, id: HomId) -> Rc<Hom> {
        self.homs.borrow().get(id)
    }

    /// Number of interned homomorphisms, identity included.
    pub fn num_homs(&self) -> usize {
        self.homs.borrow().len()
    }

    /// The identity homomorphism.
    pub fn identity(&self) -> HomId {
        HomId::IDENTITY
    }

    /// The homomorphism mapping every non-empty diagram to `f`.
    pub fn constant(&self, f: DddId) -> HomId {
        self.intern(Hom::Constant(f))
    }

    /// The homomorphism prepending the arc `var = value` to the result of `next`.
    pub fn prefix(&self, var: Var, value: Value, next: HomId) -> HomId {
        self.intern(Hom::Prefix(var, value, next))
    }

    /// Composition: `outer` applied to the result of `inner`.
    pub fn compose(&self, outer: HomId, inner: HomId) -> HomId {
        if outer.is_identity() {
            return inner;
        }
        if inner.is_identity() {
            return outer;
        }
        self.intern(Hom::Compose(outer, inner))
    }

    /// Sum: the union of the results of `a` and `b`.
    pub fn hom_union(&self, a: HomId, b: HomId) -> HomId {
        if a == b {
            return a;
        }
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        self.intern(Hom::Union(a, b))
    }

    /// Least fixpoint: applies `h` until the diagram stops changing.
    ///
    /// Termination is up to the caller. The usual form is
    /// `fixpoint(hom_union(identity, step))`, which only ever adds paths.
    pub fn fixpoint(&self, h: HomId) -> HomId {
        if h.is_identity() {
            return h;
        }
        self.intern(Hom::Fixpoint(h))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(hom: &Hom) -> u64 {
        let mut hasher = DefaultHasher::new();
        hom.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_is_first() {
        let mgr = DddManager::new();
        assert_eq!(mgr.identity(), HomId::IDENTITY);
        assert_eq!(*mgr.hom(HomId::IDENTITY), Hom::Identity);
        assert_eq!(mgr.intern(Hom::Identity), HomId::IDENTITY);
        assert_eq!(mgr.num_homs(), 1);
    }

    #[test]
    fn test_interning() {
        let mgr = DddManager::new();
        let a = mgr.prefix(Var::new(0), 3, mgr.identity());
        let b = mgr.prefix(Var::new(0), 3, mgr.identity());
        let c = mgr.prefix(Var::new(0), 4, mgr.identity());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&mgr.hom(a)), hash_of(&mgr.hom(b)));
        assert_eq!(mgr.num_homs(), 3);
    }

    #[test]
    fn test_compose_with_identity() {
        let mgr = DddManager::new();
        let h = mgr.constant(mgr.one());
        assert_eq!(mgr.compose(h, mgr.identity()), h);
        assert_eq!(mgr.compose(mgr.identity(), h), h);
        assert_ne!(mgr.compose(h, h), h);
    }

    #[test]
    fn test_union_is_commutative() {
        let mgr = DddManager::new();
        let a = mgr.constant(mgr.one());
        let b = mgr.prefix(Var::new(0), 1, mgr.identity());
        assert_eq!(mgr.hom_union(a, b), mgr.hom_union(b, a));
        assert_eq!(mgr.hom_union(a, a), a);
    }

    #[test]
    fn test_display() {
        let mgr = DddManager::new();
        let p = mgr.prefix(Var::new(2), 5, mgr.identity());
        assert_eq!(mgr.hom(p).to_string(), "(x2=5)·id");
        assert_eq!(Hom::Constant(DddId::ZERO).to_string(), "const(⊥)");
        assert_eq!(Hom::Fixpoint(HomId::new(4)).to_string(), "fix(h4)");
    }
}
