//! # ddd-rs: Affine assignments over Data Decision Diagrams
//!
//! **`ddd-rs`** is a manager-centric library for transforming sets of integer
//! valuations represented as **Data Decision Diagrams (DDDs)**, with
//! **homomorphisms** that implement linear assignments.
//!
//! ## What is a DDD?
//!
//! A DDD is a multi-valued decision diagram: every node decides one integer
//! variable and has one arc per value. A diagram stands for the set of its
//! paths from the root to the accept terminal, and is **canonical** for a
//! fixed variable order: equal sets always share the same handle.
//!
//! A homomorphism transforms such a set without enumerating it: it walks the
//! diagram one variable at a time and rewrites itself into a simpler
//! homomorphism at every arc. Both diagrams and homomorphisms are hash-consed,
//! so applications are memoized by `(homomorphism, node)`.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All operations go through the [`DddManager`][crate::ddd::DddManager], which owns nodes, homomorphisms and caches.
//! - **Lightweight Handles**: Diagrams are [`DddId`][crate::reference::DddId]s and homomorphisms are [`HomId`][crate::reference::HomId]s, both `Copy` indices.
//! - **Affine Assignments**: `tgt = mul*src + inc` and `tgt += mul*src + inc`, in either variable order ([`linear`]).
//! - **Guarded Actions**: simultaneous assignments of weighted sums under a conjunction of linear conditions ([`action`]).
//! - **Combinators**: identity, constant, prefix, composition, union and fixpoint ([`hom`]).
//!
//! ## Basic Usage
//!
//! ```rust
//! use ddd_rs::ddd::DddManager;
//! use ddd_rs::types::Var;
//!
//! let mgr = DddManager::new();
//! let (x, y) = (Var::new(0), Var::new(1));
//!
//! // 1. Build the set {x = 1, y ∈ 0..4}
//! let f = mgr.product(&[1..2, 0..4]);
//!
//! // 2. Build the homomorphism y := 2x + 10
//! let h = mgr.linear_assign(y, x, false, 10, 2);
//!
//! // 3. Apply it: every path collapses to x = 1, y = 12
//! let g = mgr.apply(h, f);
//! assert_eq!(g, mgr.path(&[(x, 1), (y, 12)]));
//! ```
//!
//! ## Core Components
//!
//! - **[`ddd`]**: The diagram manager and the set operations.
//! - **[`hom`]**: Homomorphism representation, interning and combinators.
//! - **[`apply`]**: Evaluation of homomorphisms on diagrams.
//! - **[`linear`]** and **[`action`]**: The assignment homomorphisms.

pub mod action;
pub mod apply;
pub mod cache;
pub mod config;
pub mod ddd;
pub mod error;
pub mod hom;
pub mod iter;
pub mod linear;
pub mod node;
pub mod reference;
pub mod subtable;
pub mod types;
