//! Evaluation of homomorphisms on diagrams.

use log::debug;

use crate::cache::ApplyKey;
use crate::ddd::DddManager;
use crate::hom::{Hom, Inductive};
use crate::reference::{DddId, HomId};

impl DddManager {
    /// Applies the homomorphism `h` to the diagram `f`.
    ///
    /// This is a total function: unsatisfiable guards and homomorphisms that
    /// do not fit the variable order of `f` evaluate to ⊥.
    ///
    /// Every application except the trivial ones (identity, constant, ⊥) is
    /// memoized by `(h, f)`, so the cost is linear in the number of distinct
    /// `(homomorphism, node)` pairs reached, not in the number of paths.
    pub fn apply(&self, h: HomId, f: DddId) -> DddId {
        if f.is_zero() {
            return DddId::ZERO;
        }

        let hom = self.hom(h);
        match *hom {
            Hom::Identity => return f,
            Hom::Constant(c) => return c,
            _ => {}
        }

        let key = ApplyKey::new(h, f);
        if let Some(&res) = self.apply_cache.borrow_mut().get(&key) {
            return res;
        }

        debug!("apply({} = {}, {})", h, hom, f);
        let res = self.eval(&hom, f);

        self.apply_cache.borrow_mut().insert(key, res);
        res
    }

    fn eval(&self, hom: &Hom, f: DddId) -> DddId {
        match hom {
            Hom::Identity => f,
            Hom::Constant(c) => *c,
            Hom::Prefix(var, value, next) => {
                let succ = self.apply(*next, f);
                self.edge(*var, *value, succ)
            }
            Hom::Compose(outer, inner) => {
                let g = self.apply(*inner, f);
                self.apply(*outer, g)
            }
            Hom::Union(a, b) => {
                let fa = self.apply(*a, f);
                let fb = self.apply(*b, f);
                self.union(fa, fb)
            }
            Hom::Fixpoint(h) => self.apply_fixpoint(*h, f),
            Hom::Linear(linear) => self.apply_inductive(linear, f),
            Hom::Action(action) => self.apply_inductive(action, f),
        }
    }

    fn apply_inductive(&self, hom: &impl Inductive, f: DddId) -> DddId {
        if f.is_one() {
            return hom.phi_one(self);
        }

        let node = self.node(f);
        let mut res = DddId::ZERO;
        for &(value, succ) in node.arcs.iter() {
            let next = hom.phi(self, node.var, value);
            let r = self.apply(next, succ);
            res = self.union(res, r);
        }
        res
    }

    fn apply_fixpoint(&self, h: HomId, f: DddId) -> DddId {
        let mut current = f;
        let mut steps = 0usize;
        loop {
            let next = self.apply(h, current);
            steps += 1;
            if next == current {
                debug!("fixpoint of {} on {} reached after {} steps", h, f, steps);
                return current;
            }
            current = next;
        }
    }
}
