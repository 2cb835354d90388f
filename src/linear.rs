//! Single-variable affine assignment.
//!
//! [`DddManager::linear_assign`] builds the homomorphism implementing either
//!  - `tgt = mul*src + inc` if `aug` is false,
//!  - `tgt += mul*src + inc` if `aug` is true,
//!
//! where `tgt` and `src` are two variables and `inc` and `mul` are constants.
//! `tgt` and `src` may come in any order, or be the same variable.
//!
//! The homomorphism is a small state machine over [`Linear`]; each step only
//! looks at the arc being visited, so the apply cache shares all the work
//! between paths that reach the same node in the same state.

use std::fmt;

use log::debug;

use crate::ddd::DddManager;
use crate::hom::{Hom, Inductive};
use crate::reference::{DddId, HomId};
use crate::types::{Value, Var};

/// `mul*val + inc`, wrapping on overflow.
fn affine(mul: Value, val: Value, inc: Value) -> Value {
    mul.wrapping_mul(val).wrapping_add(inc)
}

/// The states of a linear assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Linear {
    /// Nothing seen yet.
    Entry {
        tgt: Var,
        src: Var,
        aug: bool,
        inc: Value,
        mul: Value,
    },
    /// The value to write (or add) is known, waiting for `var`.
    Constant { var: Var, val: Value, aug: bool },
    /// The arc of `tgt` was consumed, waiting for `src` to compute its value.
    Descend {
        tgt: Var,
        src: Var,
        inc: Value,
        mul: Value,
    },
    /// Re-inserts the arc `var = val` right below the first arc of its input.
    Lift { var: Var, val: Value },
}

impl Linear {
    fn intern(self, mgr: &DddManager) -> HomId {
        mgr.intern(Hom::Linear(self))
    }
}

impl Inductive for Linear {
    fn phi_one(&self, _mgr: &DddManager) -> DddId {
        match *self {
            Linear::Entry { .. } | Linear::Constant { .. } => DddId::ONE,
            Linear::Descend { tgt, src, .. } => {
                debug!("{} was consumed but {} never came: no {} below {}", tgt, src, src, tgt);
                DddId::ZERO
            }
            Linear::Lift { .. } => DddId::ZERO,
        }
    }

    fn phi(&self, mgr: &DddManager, var: Var, value: Value) -> HomId {
        match *self {
            Linear::Entry { tgt, src, aug, inc, mul } => {
                if var == tgt && var == src {
                    let new = affine(mul, value, inc);
                    let new = if aug { value.wrapping_add(new) } else { new };
                    mgr.prefix(var, new, mgr.identity())
                } else if var == src {
                    let next = Linear::Constant {
                        var: tgt,
                        val: affine(mul, value, inc),
                        aug,
                    };
                    mgr.prefix(var, value, next.intern(mgr))
                } else if var != tgt {
                    mgr.prefix(var, value, self.intern(mgr))
                } else {
                    let inc = if aug { value.wrapping_add(inc) } else { inc };
                    Linear::Descend { tgt, src, inc, mul }.intern(mgr)
                }
            }
            Linear::Constant { var: target, val, aug } => {
                if var != target {
                    mgr.prefix(var, value, self.intern(mgr))
                } else if aug {
                    mgr.prefix(var, value.wrapping_add(val), mgr.identity())
                } else {
                    mgr.prefix(var, val, mgr.identity())
                }
            }
            Linear::Descend { tgt, src, inc, mul } => {
                if var == src {
                    let rest = mgr.prefix(var, value, mgr.identity());
                    mgr.prefix(tgt, affine(mul, value, inc), rest)
                } else {
                    let lift = Linear::Lift { var, val: value }.intern(mgr);
                    mgr.compose(lift, self.intern(mgr))
                }
            }
            Linear::Lift { var: lifted, val } => {
                let rest = mgr.prefix(lifted, val, mgr.identity());
                mgr.prefix(var, value, rest)
            }
        }
    }
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linear::Entry { tgt, src, aug, inc, mul } => {
                let op = if *aug { "+=" } else { "=" };
                write!(f, "{} {} {}*{} + {}", tgt, op, mul, src, inc)
            }
            Linear::Constant { var, val, aug } => {
                let op = if *aug { "+=" } else { "=" };
                write!(f, "{} {} {}", var, op, val)
            }
            Linear::Descend { tgt, src, inc, mul } => write!(f, "{} <- {}*{} + {}", tgt, mul, src, inc),
            Linear::Lift { var, val } => write!(f, "lift({}={})", var, val),
        }
    }
}

impl DddManager {
    /// Builds the homomorphism for `tgt = mul*src + inc` (`+=` if `aug`).
    ///
    /// Degenerate parameters are simplified: `mul = 0, inc = 0` with `aug`
    /// is the identity, and `mul = 0` is a constant assignment that does not
    /// depend on `src`.
    pub fn linear_assign(&self, tgt: Var, src: Var, aug: bool, inc: Value, mul: Value) -> HomId {
        if mul == 0 && inc == 0 && aug {
            self.identity()
        } else if mul == 0 {
            Linear::Constant { var: tgt, val: inc, aug }.intern(self)
        } else {
            Linear::Entry { tgt, src, aug, inc, mul }.intern(self)
        }
    }
}
