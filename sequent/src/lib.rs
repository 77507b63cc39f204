//! Interactive construction of sequent calculus proofs.
//!
//! A proof under construction is a [`ReductionTree`] of [`Sequent`]s.
//! Positions inside the tree are addressed by a [`TreeFocus`],
//! which is turned into an [`Optional`] by the [`focus`] module.
//! The [`rule`] module expands an open leaf by
//! the introduction rule for the connective of a chosen formula.
#![no_std]
#![forbid(unsafe_code)]
//#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
mod error;
pub mod expr;
pub mod focus;
pub mod notation;
pub mod optic;
pub mod rule;
mod sequent;
pub mod tree;

pub use builder::Edit;
pub use error::Error;
pub use expr::{Assoc, Connective, Expr, Prec};
pub use focus::TreeFocus;
pub use notation::{Exprs, Latex, Notation};
pub use optic::Optional;
pub use rule::{Operator, Rule};
pub use sequent::{Sequent, Side};
pub use tree::ReductionTree;

use alloc::vec::Vec;

/// Return all elements of `xs` except the one at position `i`.
///
/// ~~~
/// assert_eq!(sequent::without(&[0, 1, 2], 1), vec![0, 2]);
/// assert_eq!(sequent::without(&[0, 1, 2], 3), vec![0, 1, 2]);
/// ~~~
pub fn without<T: Clone>(xs: &[T], i: usize) -> Vec<T> {
    let iter = xs.iter().enumerate().filter(|(j, _)| *j != i);
    iter.map(|(_, x)| x.clone()).collect()
}
