//! Guarded multi-variable assignment.
//!
//! An [`Action`] checks a conjunction of linear [`Condition`]s over all
//! variables and, on every path satisfying them, simultaneously rewrites each
//! variable `x{i}` with the weighted sum `assignments[i]` of the old values.
//!
//! Conditions and sums are partially evaluated as the diagram is consumed:
//! visiting `x{v} = val` substitutes `val` for `x{v}` and zeroes its
//! coefficient. A condition with no coefficient left is decided right away,
//! pruning the path if it does not hold. At the terminal, all sums are
//! resolved and the path is rebuilt from their values.
//!
//! ```
//! use ddd_rs::action::{Comparator, Condition, WeightedSum};
//! use ddd_rs::ddd::DddManager;
//! use ddd_rs::types::Var;
//!
//! let mgr = DddManager::new();
//! // if x0 < 3 then x0 := x0 + 1
//! let guard = Condition::new(Comparator::Lt, 3, vec![1]);
//! let step = WeightedSum::new(1, vec![1]);
//! let h = mgr.guarded_assign(vec![guard], vec![step]).unwrap();
//!
//! let f = mgr.product(&[0..5]);
//! assert_eq!(mgr.apply(h, f), mgr.product(&[1..4]));
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::ddd::DddManager;
use crate::error::Error;
use crate::hom::{Hom, Inductive};
use crate::reference::{DddId, HomId};
use crate::types::{Value, Var};

/// Comparison operator of a [`Condition`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Comparator {
    /// Evaluates `lhs ▸ rhs`.
    pub fn holds(self, lhs: Value, rhs: Value) -> bool {
        match self {
            Comparator::Eq => lhs == rhs,
            Comparator::Ne => lhs != rhs,
            Comparator::Lt => lhs < rhs,
            Comparator::Gt => lhs > rhs,
            Comparator::Le => lhs <= rhs,
            Comparator::Ge => lhs >= rhs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Comparator::Eq),
            "!=" => Ok(Comparator::Ne),
            "<" => Ok(Comparator::Lt),
            ">" => Ok(Comparator::Gt),
            "<=" => Ok(Comparator::Le),
            ">=" => Ok(Comparator::Ge),
            _ => Err(format!("invalid comparator '{}'", s)),
        }
    }
}

/// A linear condition `Σ coefs[v]·x{v} ▸ threshold`.
///
/// Substituting values moves them to the right-hand side, so the residual
/// `threshold` always satisfies: the condition holds iff
/// `Σ (remaining terms) ▸ threshold`. Once no term remains, the condition is
/// decided by `0 ▸ threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    pub op: Comparator,
    pub threshold: Value,
    pub coefs: Vec<Value>,
}

impl Condition {
    pub fn new(op: Comparator, threshold: Value, coefs: Vec<Value>) -> Self {
        Self { op, threshold, coefs }
    }

    /// True when no variable is left to substitute.
    pub fn is_resolved(&self) -> bool {
        self.coefs.iter().all(|&c| c == 0)
    }

    /// Decides a resolved condition.
    pub fn holds(&self) -> bool {
        self.op.holds(0, self.threshold)
    }

    fn substitute(&self, index: usize, value: Value) -> Self {
        let coef = self.coefs[index];
        if coef == 0 {
            return self.clone();
        }
        let mut coefs = self.coefs.clone();
        coefs[index] = 0;
        Self {
            op: self.op,
            threshold: self.threshold.wrapping_sub(coef.wrapping_mul(value)),
            coefs,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &self.coefs)?;
        write!(f, " {} {}", self.op, self.threshold)
    }
}

/// A weighted sum `value + Σ coefs[v]·x{v}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedSum {
    pub value: Value,
    pub coefs: Vec<Value>,
}

impl WeightedSum {
    pub fn new(value: Value, coefs: Vec<Value>) -> Self {
        Self { value, coefs }
    }

    /// The constant `value`, over `width` variables.
    pub fn constant(width: usize, value: Value) -> Self {
        Self::new(value, vec![0; width])
    }

    /// The old value of `var`, over `width` variables.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not one of the `width` variables.
    pub fn variable(width: usize, var: Var) -> Self {
        assert!(var.index() < width, "Variable {} is outside of the {} variables", var, width);
        let mut coefs = vec![0; width];
        coefs[var.index()] = 1;
        Self::new(0, coefs)
    }

    /// True when no variable is left to substitute.
    pub fn is_resolved(&self) -> bool {
        self.coefs.iter().all(|&c| c == 0)
    }

    fn substitute(&self, index: usize, value: Value) -> Self {
        let coef = self.coefs[index];
        if coef == 0 {
            return self.clone();
        }
        let mut coefs = self.coefs.clone();
        coefs[index] = 0;
        Self {
            value: self.value.wrapping_add(coef.wrapping_mul(value)),
            coefs,
        }
    }
}

impl fmt::Display for WeightedSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &self.coefs)?;
        write!(f, " + {}", self.value)
    }
}

fn write_terms(f: &mut fmt::Formatter<'_>, coefs: &[Value]) -> fmt::Result {
    let terms: Vec<String> = coefs
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != 0)
        .map(|(i, c)| format!("{}*x{}", c, i))
        .collect();
    if terms.is_empty() {
        write!(f, "0")
    } else {
        write!(f, "{}", terms.join(" + "))
    }
}

/// A guarded simultaneous assignment.
///
/// `assignments[i]` is the new value of `x{i}`; the number of assignments is
/// the number of variables, and every coefficient vector has that length.
///
/// An action only accepts paths deciding exactly `x0`, ..., `x{width-1}`, in
/// that order: any other path is pruned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    conditions: Vec<Condition>,
    assignments: Vec<WeightedSum>,
    /// Index of the next variable to consume.
    next: usize,
}

impl Action {
    /// Validates the coefficient vectors against the number of variables.
    pub fn new(conditions: Vec<Condition>, assignments: Vec<WeightedSum>) -> Result<Self, Error> {
        let width = assignments.len();
        for (i, cond) in conditions.iter().enumerate() {
            if cond.coefs.len() != width {
                return Err(Error::coefficient_length(format!("condition {}", i), width, cond.coefs.len()));
            }
        }
        for (i, sum) in assignments.iter().enumerate() {
            if sum.coefs.len() != width {
                return Err(Error::coefficient_length(format!("assignment {}", i), width, sum.coefs.len()));
            }
        }
        Ok(Self {
            conditions,
            assignments,
            next: 0,
        })
    }

    /// Number of variables.
    pub fn width(&self) -> usize {
        self.assignments.len()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn assignments(&self) -> &[WeightedSum] {
        &self.assignments
    }
}

impl Inductive for Action {
    fn phi_one(&self, mgr: &DddManager) -> DddId {
        if self.next != self.width() {
            debug!("action {} reached the terminal before x{}", self, self.next);
            return DddId::ZERO;
        }
        if !self.conditions.is_empty() || !self.assignments.iter().all(WeightedSum::is_resolved) {
            debug!("action {} reached the terminal with unresolved terms", self);
            return DddId::ZERO;
        }
        // Bottom-up, last variable first.
        self.assignments
            .iter()
            .enumerate()
            .rev()
            .fold(DddId::ONE, |succ, (i, sum)| mgr.edge(Var::new(i as u32), sum.value, succ))
    }

    fn phi(&self, mgr: &DddManager, var: Var, value: Value) -> HomId {
        let index = var.index();
        if index >= self.width() {
            debug!("{} is outside of action {}", var, self);
            return mgr.constant(DddId::ZERO);
        }
        if index != self.next {
            debug!("action {} expected x{} but got {}", self, self.next, var);
            return mgr.constant(DddId::ZERO);
        }

        let mut conditions = Vec::with_capacity(self.conditions.len());
        for cond in self.conditions.iter() {
            let cond = cond.substitute(index, value);
            if !cond.is_resolved() {
                conditions.push(cond);
            } else if !cond.holds() {
                return mgr.constant(DddId::ZERO);
            }
        }
        let assignments = self.assignments.iter().map(|sum| sum.substitute(index, value)).collect();

        mgr.intern(Hom::Action(Action {
            conditions,
            assignments,
            next: index + 1,
        }))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        let assignments: Vec<String> = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, sum)| format!("x{} := {}", i, sum))
            .collect();
        write!(f, "[{}] {{{}}}", conditions.join(" && "), assignments.join("; "))
    }
}

impl DddManager {
    /// Builds the homomorphism that keeps the paths satisfying every
    /// condition, and rewrites `x{i}` with `assignments[i]` on them.
    ///
    /// Conditions that do not mention any variable are decided immediately:
    /// a false one gives `constant(⊥)`, a true one is dropped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if a coefficient vector does not have one
    /// entry per assignment.
    pub fn guarded_assign(&self, conditions: Vec<Condition>, assignments: Vec<WeightedSum>) -> Result<HomId, Error> {
        let mut action = Action::new(conditions, assignments)?;

        if action.conditions.iter().any(|c| c.is_resolved() && !c.holds()) {
            debug!("action {} can never fire", action);
            return Ok(self.constant(DddId::ZERO));
        }
        action.conditions.retain(|c| !c.is_resolved());

        Ok(self.intern(Hom::Action(action)))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use test_log::test;

    use super::*;

    fn x(i: u32) -> Var {
        Var::new(i)
    }

    #[test]
    fn test_comparator() {
        assert!(Comparator::Ge.holds(0, 0));
        assert!(!Comparator::Gt.holds(0, 0));
        assert!(Comparator::Ne.holds(0, -1));
        assert_eq!("<=".parse::<Comparator>(), Ok(Comparator::Le));
        assert_eq!("=".parse::<Comparator>(), Ok(Comparator::Eq));
        assert!("=>".parse::<Comparator>().is_err());
        assert_eq!(Comparator::Ne.to_string(), "!=");
    }

    #[test]
    fn test_condition_substitution() {
        // x0 - x1 >= 0
        let cond = Condition::new(Comparator::Ge, 0, vec![1, -1]);
        let cond = cond.substitute(0, 3);
        assert_eq!(cond.threshold, -3);
        assert!(!cond.is_resolved());

        let yes = cond.substitute(1, 2);
        assert!(yes.is_resolved());
        assert!(yes.holds()); // 3 - 2 >= 0

        let no = cond.substitute(1, 4);
        assert!(!no.holds()); // 3 - 4 >= 0
    }

    #[test]
    fn test_weighted_sum_substitution() {
        let sum = WeightedSum::new(1, vec![2, 3]);
        let sum = sum.substitute(1, 5).substitute(0, -1);
        assert!(sum.is_resolved());
        assert_eq!(sum.value, 1 + 15 - 2);

        assert_eq!(WeightedSum::variable(3, x(1)).coefs, vec![0, 1, 0]);
        assert_eq!(WeightedSum::constant(2, 7), WeightedSum::new(7, vec![0, 0]));
    }

    #[test]
    fn test_invalid_lengths() {
        let mgr = DddManager::new();
        let res = mgr.guarded_assign(vec![], vec![WeightedSum::new(0, vec![1, 0])]);
        assert_eq!(res, Err(Error::coefficient_length("assignment 0", 1, 2)));

        let cond = Condition::new(Comparator::Eq, 0, vec![1]);
        let res = mgr.guarded_assign(vec![cond], vec![WeightedSum::constant(2, 0), WeightedSum::constant(2, 0)]);
        assert_eq!(res, Err(Error::coefficient_length("condition 0", 2, 1)));
    }

    #[test]
    fn test_resolved_conditions_are_decided_early() {
        let mgr = DddManager::new();
        let never = Condition::new(Comparator::Eq, 1, vec![0]);
        let h = mgr.guarded_assign(vec![never], vec![WeightedSum::variable(1, x(0))]).unwrap();
        assert_eq!(h, mgr.constant(mgr.zero()));

        let always = Condition::new(Comparator::Eq, 0, vec![0]);
        let h = mgr.guarded_assign(vec![always], vec![WeightedSum::variable(1, x(0))]).unwrap();
        let plain = mgr.guarded_assign(vec![], vec![WeightedSum::variable(1, x(0))]).unwrap();
        assert_eq!(h, plain);
    }

    #[test]
    fn test_copy_is_identity() {
        let mgr = DddManager::new();
        let h = mgr
            .guarded_assign(vec![], (0..3).map(|i| WeightedSum::variable(3, x(i))).collect())
            .unwrap();
        let f = mgr.product(&[0..2, 0..3, 0..4]);
        assert_eq!(mgr.apply(h, f), f);
    }

    #[test]
    fn test_swap() {
        let mgr = DddManager::new();
        let h = mgr
            .guarded_assign(vec![], vec![WeightedSum::variable(2, x(1)), WeightedSum::variable(2, x(0))])
            .unwrap();
        let f = mgr.path(&[(x(0), 1), (x(1), 2)]);
        assert_eq!(mgr.apply(h, f), mgr.path(&[(x(0), 2), (x(1), 1)]));
    }

    #[test]
    fn test_guard_prunes() {
        let mgr = DddManager::new();
        // if x0 + x1 == 2 then x1 := 0
        let guard = Condition::new(Comparator::Eq, 2, vec![1, 1]);
        let h = mgr
            .guarded_assign(vec![guard], vec![WeightedSum::variable(2, x(0)), WeightedSum::constant(2, 0)])
            .unwrap();
        let f = mgr.product(&[0..3, 0..3]);
        let res = mgr.apply(h, f);
        assert_eq!(mgr.count(res), BigUint::from(3u32));
        for v in 0..3 {
            assert!(mgr.contains(res, &[(x(0), v), (x(1), 0)]));
        }
    }

    #[test]
    fn test_variable_outside_width() {
        let mgr = DddManager::new();
        let h = mgr.guarded_assign(vec![], vec![WeightedSum::variable(1, x(0))]).unwrap();
        let f = mgr.product(&[0..2, 0..2]);
        assert_eq!(mgr.apply(h, f), mgr.zero());
    }

    #[test]
    fn test_missing_variable() {
        let mgr = DddManager::new();
        // x1 := x1, but the diagram only has x0
        let h = mgr
            .guarded_assign(vec![], vec![WeightedSum::variable(2, x(0)), WeightedSum::variable(2, x(1))])
            .unwrap();
        let f = mgr.product(&[0..2]);
        assert_eq!(mgr.apply(h, f), mgr.zero());
    }

    #[test]
    #[should_panic(expected = "Variable x2 is outside of the 2 variables")]
    fn test_weighted_sum_variable_out_of_range() {
        WeightedSum::variable(2, x(2));
    }

    #[test]
    fn test_short_diagram_is_pruned() {
        let mgr = DddManager::new();
        let h = mgr
            .guarded_assign(vec![], vec![WeightedSum::constant(2, 1), WeightedSum::constant(2, 1)])
            .unwrap();
        let f = mgr.product(&[0..2]);
        assert_eq!(mgr.apply(h, f), mgr.zero());
        assert_eq!(mgr.apply(h, mgr.one()), mgr.zero());

        // Unaffected paths are kept, the mismatched ones vanish.
        let step = mgr.hom_union(mgr.identity(), h);
        assert_eq!(mgr.apply(step, f), f);
    }

    #[test]
    fn test_skipped_variable_is_pruned() {
        let mgr = DddManager::new();
        let h = mgr
            .guarded_assign(vec![], vec![WeightedSum::constant(2, 1), WeightedSum::constant(2, 1)])
            .unwrap();
        let f = mgr.path(&[(x(1), 3)]);
        assert_eq!(mgr.apply(h, f), mgr.zero());
        assert_eq!(mgr.apply(mgr.hom_union(mgr.identity(), h), f), f);

        let full = mgr.path(&[(x(0), 0), (x(1), 3)]);
        assert_eq!(mgr.apply(h, full), mgr.path(&[(x(0), 1), (x(1), 1)]));
    }

    #[test]
    fn test_display() {
        let action = Action::new(
            vec![Condition::new(Comparator::Lt, 3, vec![1, 0])],
            vec![WeightedSum::new(1, vec![1, 0]), WeightedSum::variable(2, x(1))],
        )
        .unwrap();
        assert_eq!(action.to_string(), "[1*x0 < 3] {x0 := 1*x0 + 1; x1 := 1*x1 + 0}");
    }
}
