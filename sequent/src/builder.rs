//! Stack-like construction of formulas.
//!
//! A formula list is edited from its end:
//! atoms are appended, and connectives consume the trailing formulas.
//! For example, the edits `A`, `B`, `∧`, `¬` turn the empty list into `¬ (A ∧ B)`.

use crate::focus::{exprs_at, TreeFocus};
use crate::optic::Optional;
use crate::{Assoc, Connective, Expr, Prec, ReductionTree};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use log::trace;

/// Atoms offered for quick input.
pub const PALETTE: [&str; 8] = ["A", "B", "C", "D", "Γ", "Δ", "Σ", "Π"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Append an atom.
    ///
    /// Names of connectives with operands are rejected.
    Atom(String),
    /// Replace as many trailing formulas as the connective takes
    /// by their combination with the connective.
    ///
    /// For falsity, this appends `⊥`.
    Connect(Connective),
    /// Replace the trailing formula by its operands.
    Undo,
}

impl Edit {
    /// Apply the edit to a list of formulas.
    ///
    /// If there are not enough formulas for the edit, the list is returned unchanged.
    ///
    /// ~~~
    /// use sequent::{Connective, Edit, Expr};
    /// let (a, b) = (Expr::atom("A"), Expr::atom("B"));
    /// let and = Edit::Connect(Connective::And);
    /// assert_eq!(and.apply(&[a.clone(), b.clone()]), vec![a.clone() & b.clone()]);
    /// assert_eq!(and.apply(&[a.clone()]), vec![a]);
    /// ~~~
    pub fn apply(&self, exprs: &[Expr]) -> Vec<Expr> {
        match self {
            // connective symbols must not occur without their operands
            Self::Atom(name) => match Expr::new(name, Prec::Atom, Assoc::Neither, Vec::new()) {
                Ok(e) => exprs.iter().cloned().chain([e]).collect(),
                Err(e) => {
                    trace!("{}", e);
                    exprs.to_vec()
                }
            },
            Self::Connect(c) => match exprs.len().checked_sub(c.arity()) {
                Some(n) => {
                    let (init, last) = exprs.split_at(n);
                    match Expr::connect(*c, last.to_vec()) {
                        Ok(e) => init.iter().cloned().chain([e]).collect(),
                        Err(e) => {
                            trace!("{}", e);
                            exprs.to_vec()
                        }
                    }
                }
                None => exprs.to_vec(),
            },
            Self::Undo => match exprs.split_last() {
                Some((last, init)) => init.iter().chain(last.operands()).cloned().collect(),
                None => exprs.to_vec(),
            },
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{}", name),
            Self::Connect(c) => write!(f, "{}", c),
            Self::Undo => write!(f, "undo"),
        }
    }
}

/// Apply an edit to the formulas at a coordinate.
///
/// If the coordinate does not exist, the tree is returned unchanged.
pub fn edit(tree: &ReductionTree, focus: &TreeFocus, edit: &Edit) -> ReductionTree {
    exprs_at(focus).modify(tree, |exprs| edit.apply(exprs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sequent, Side};
    use alloc::string::ToString;
    use alloc::vec;

    fn apply_all(edits: &[Edit]) -> Vec<Expr> {
        edits.iter().fold(Vec::new(), |acc, e| e.apply(&acc))
    }

    #[test]
    fn build() {
        let atom = |s: &str| Edit::Atom(s.to_string());
        let edits = [
            atom("A"),
            atom("B"),
            atom("C"),
            Edit::Connect(Connective::Imp),
            Edit::Connect(Connective::Imp),
            Edit::Connect(Connective::Neg),
            Edit::Connect(Connective::Bot),
        ];
        let exprs = apply_all(&edits);
        assert_eq!(exprs.len(), 2);
        assert_eq!(exprs[0].to_string(), "¬ (A → B → C)");
        assert!(exprs[1].is_bot());
    }

    #[test]
    fn undo() {
        let (a, b) = (Expr::atom("A"), Expr::atom("B"));
        let exprs = vec![a.clone(), Expr::imp(a.clone(), b.clone())];
        assert_eq!(Edit::Undo.apply(&exprs), vec![a.clone(), a.clone(), b]);
        assert_eq!(Edit::Undo.apply(&[a.clone()]), Vec::new());
        assert_eq!(Edit::Undo.apply(&[]), Vec::new());
    }

    #[test]
    fn connective_as_atom() {
        let a = Expr::atom("A");
        for c in ["∧", "∨", "→", "¬"] {
            assert_eq!(Edit::Atom(c.to_string()).apply(&[a.clone()]), vec![a.clone()]);
        }
        let bot = Edit::Atom("⊥".to_string()).apply(&[]);
        assert_eq!(bot, vec![Expr::bot()]);
    }

    #[test]
    fn not_enough_operands() {
        let neg = Edit::Connect(Connective::Neg);
        assert_eq!(neg.apply(&[]), Vec::new());
        let or = Edit::Connect(Connective::Or);
        let a = Expr::atom("A");
        assert_eq!(or.apply(&[a.clone()]), vec![a]);
    }

    #[test]
    fn edit_tree() {
        let tree = ReductionTree::leaf(Sequent::default());
        let focus = TreeFocus::root(Side::Rhs);
        let tree = edit(&tree, &focus, &Edit::Atom(PALETTE[4].to_string()));
        assert_eq!(tree.sequent().rhs, vec![Expr::atom("Γ")]);
        let missing = TreeFocus::new(vec![0], Side::Rhs);
        assert_eq!(edit(&tree, &missing, &Edit::Undo), tree);
    }
}
