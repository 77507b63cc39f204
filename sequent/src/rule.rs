//! Introduction rules of classical propositional sequent calculus.
//!
//! Rules for implication and negation copy
//! all formulas of the opposite side into every premise.
//! Because of this, the calculus is not suitable for intuitionistic logic,
//! and formulas may be duplicated across branches;
//! superfluous formulas can be removed by weakening.

use crate::focus::{self, TreeFocus};
use crate::optic::Optional;
use crate::{without, Connective, Expr, ReductionTree, Sequent, Side};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use log::{debug, trace};

/// Top-level connective of a formula, together with its operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    Conj(Expr, Expr),
    Disj(Expr, Expr),
    Impl(Expr, Expr),
    Neg(Expr),
}

impl Operator {
    /// Return the operator of a formula, or `None` if no rule applies to it.
    ///
    /// This is the case for atoms, falsity, unknown symbols, and
    /// connectives with the wrong number of operands.
    pub fn classify(e: &Expr) -> Option<Self> {
        use Connective::*;
        match (e.connective()?, e.operands()) {
            (And, [l, r]) => Some(Self::Conj(l.clone(), r.clone())),
            (Or, [l, r]) => Some(Self::Disj(l.clone(), r.clone())),
            (Imp, [l, r]) => Some(Self::Impl(l.clone(), r.clone())),
            (Neg, [x]) => Some(Self::Neg(x.clone())),
            _ => None,
        }
    }

    pub fn connective(&self) -> Connective {
        match self {
            Self::Conj(..) => Connective::And,
            Self::Disj(..) => Connective::Or,
            Self::Impl(..) => Connective::Imp,
            Self::Neg(_) => Connective::Neg,
        }
    }

    pub fn rule(&self, side: Side) -> Rule {
        Rule {
            connective: self.connective(),
            side,
        }
    }
}

/// Name of an introduction rule, such as `∧L` or `→R`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub connective: Connective,
    pub side: Side,
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Side::Lhs => "L",
            Side::Rhs => "R",
        };
        write!(f, "{}{}", self.connective, side)
    }
}

fn cat(xs: &[Expr], ys: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    xs.iter().cloned().chain(ys).collect()
}

/// Compute the premises obtained by reducing
/// the formula at position `index` on `side` of a sequent,
/// where `op` is the operator of that formula.
pub fn apply_rule(sequent: &Sequent, side: Side, index: usize, op: Operator) -> Vec<Sequent> {
    use Operator::*;
    let Sequent { lhs, rhs } = sequent;
    let rest = without(sequent.side(side), index);
    let premise = |lhs, rhs| Sequent::new(lhs, rhs);
    match (side, op) {
        (Side::Lhs, Conj(a, b)) => Vec::from([premise(cat(&rest, [a, b]), rhs.clone())]),
        (Side::Lhs, Disj(a, b)) => Vec::from([
            premise(cat(&rest, [a]), rhs.clone()),
            premise(cat(&rest, [b]), rhs.clone()),
        ]),
        (Side::Lhs, Impl(a, b)) => Vec::from([
            premise(rest.clone(), cat(&[a], rhs.iter().cloned())),
            premise(cat(&rest, [b]), rhs.clone()),
        ]),
        (Side::Lhs, Neg(a)) => Vec::from([premise(rest, cat(&[a], rhs.iter().cloned()))]),
        (Side::Rhs, Conj(a, b)) => Vec::from([
            premise(lhs.clone(), cat(&rest, [a])),
            premise(lhs.clone(), cat(&rest, [b])),
        ]),
        (Side::Rhs, Disj(a, b)) => Vec::from([premise(lhs.clone(), cat(&rest, [a, b]))]),
        (Side::Rhs, Impl(a, b)) => Vec::from([premise(cat(lhs, [a]), cat(&rest, [b]))]),
        (Side::Rhs, Neg(a)) => Vec::from([premise(cat(lhs, [a]), rest)]),
    }
}

/// Attach premises to the open leaf at `path`.
///
/// The premises are computed from the sequent of the leaf by `premises`;
/// if the node does not exist, is not a leaf, or
/// `premises` returns `None`, the tree is returned unchanged.
fn attach(
    tree: &ReductionTree,
    path: &[usize],
    premises: impl FnOnce(&Sequent) -> Option<Vec<Sequent>>,
) -> ReductionTree {
    let node = match focus::subtree_at(path).get(tree) {
        Some(node) => node,
        None => {
            trace!("no node at {:?}", path);
            return tree.clone();
        }
    };
    if !node.is_leaf() {
        debug!("node at {:?} already has premises", path);
        return tree.clone();
    }
    match premises(node.sequent()) {
        Some(premises) => {
            let upper = premises.into_iter().map(ReductionTree::leaf).collect();
            focus::subtree_at(path).then(focus::upper()).replace(upper, tree)
        }
        None => tree.clone(),
    }
}

/// Expand the open leaf at `focus.path` by
/// the rule for the formula at position `index` on `focus.side`.
///
/// The tree is returned unchanged if
/// the focus does not point to an open leaf,
/// there is no formula at `index`, or
/// no rule applies to the formula.
pub fn expand_leaf(tree: &ReductionTree, focus: &TreeFocus, index: usize) -> ReductionTree {
    let side = focus.side;
    attach(tree, &focus.path, |sequent| {
        let expr = sequent.side(side).get(index)?;
        let op = match Operator::classify(expr) {
            Some(op) => op,
            None => {
                trace!("no rule for {}", expr);
                return None;
            }
        };
        debug!("{} on {} at {}", op.rule(side), expr, focus);
        Some(apply_rule(sequent, side, index, op))
    })
}

/// Weaken the open leaf at `focus.path` by
/// removing the formula at position `index` on `focus.side`.
///
/// The tree is returned unchanged under the same conditions as for [`expand_leaf`],
/// except that any formula can be removed.
pub fn weaken_leaf(tree: &ReductionTree, focus: &TreeFocus, index: usize) -> ReductionTree {
    let side = focus.side;
    attach(tree, &focus.path, |sequent| {
        let exprs = sequent.side(side);
        let expr = exprs.get(index)?;
        debug!("weakening {} at {}", expr, focus);
        Some(Vec::from([sequent.with_side(side, without(exprs, index))]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn atoms() -> (Expr, Expr, Expr) {
        (Expr::atom("A"), Expr::atom("B"), Expr::atom("C"))
    }

    #[test]
    fn classify() {
        let (a, b, _) = atoms();
        assert_eq!(Operator::classify(&a), None);
        assert_eq!(Operator::classify(&Expr::bot()), None);
        assert_eq!(
            Operator::classify(&(a.clone() & b.clone())),
            Some(Operator::Conj(a.clone(), b.clone()))
        );
        assert_eq!(Operator::classify(&-a.clone()), Some(Operator::Neg(a.clone())));
        let bad = Expr::raw("∨", Connective::Or.prec(), Connective::Or.assoc(), vec![a]);
        assert_eq!(Operator::classify(&bad), None);
    }

    #[test]
    fn rule_names() {
        let (a, b, _) = atoms();
        let op = Operator::classify(&Expr::imp(a, b)).unwrap();
        assert_eq!(op.rule(Side::Lhs).to_string(), "→L");
        assert_eq!(op.rule(Side::Rhs).to_string(), "→R");
    }

    #[test]
    fn implication_left_copies_context() {
        let (a, b, c) = atoms();
        let d = Expr::atom("D");
        let sequent = Sequent::new(vec![c.clone(), Expr::imp(a.clone(), b.clone())], vec![d.clone()]);
        let op = Operator::classify(&sequent.lhs[1]).unwrap();
        let premises = apply_rule(&sequent, Side::Lhs, 1, op);
        assert_eq!(
            premises,
            vec![
                Sequent::new(vec![c.clone()], vec![a, d.clone()]),
                Sequent::new(vec![c, b], vec![d]),
            ]
        );
    }

    #[test]
    fn right_rules() {
        let (a, b, c) = atoms();
        let sq = |lhs: &[Expr], rhs: &[Expr]| Sequent::new(lhs.to_vec(), rhs.to_vec());
        let apply = |s: &Sequent, i| apply_rule(s, Side::Rhs, i, Operator::classify(&s.rhs[i]).unwrap());

        let conj = sq(&[c.clone()], &[a.clone() & b.clone(), c.clone()]);
        let expected = vec![sq(&[c.clone()], &[c.clone(), a.clone()]), sq(&[c.clone()], &[c.clone(), b.clone()])];
        assert_eq!(apply(&conj, 0), expected);

        let disj = sq(&[], &[a.clone() | b.clone()]);
        assert_eq!(apply(&disj, 0), vec![sq(&[], &[a.clone(), b.clone()])]);

        let imp = sq(&[c.clone()], &[Expr::imp(a.clone(), b.clone())]);
        assert_eq!(apply(&imp, 0), vec![sq(&[c.clone(), a.clone()], &[b.clone()])]);

        let neg = sq(&[c.clone()], &[-a.clone(), b.clone()]);
        assert_eq!(apply(&neg, 0), vec![sq(&[c, a], &[b])]);
    }

    #[test]
    fn negation_left() {
        let (a, b, _) = atoms();
        let sequent = Sequent::new(vec![-a.clone()], vec![b.clone()]);
        let premises = apply_rule(&sequent, Side::Lhs, 0, Operator::Neg(a.clone()));
        assert_eq!(premises, vec![Sequent::new(vec![], vec![a, b])]);
    }

    #[test]
    fn weaken() {
        let (a, b, _) = atoms();
        let tree = ReductionTree::leaf(Sequent::new(vec![a.clone(), b.clone()], vec![a.clone()]));
        let focus = TreeFocus::root(Side::Lhs);
        let weakened = weaken_leaf(&tree, &focus, 1);
        assert_eq!(weakened.upper().len(), 1);
        assert_eq!(weakened.upper()[0].sequent(), &Sequent::new(vec![a.clone()], vec![a]));
        assert_eq!(weaken_leaf(&tree, &focus, 2), tree);
        // already expanded
        assert_eq!(weaken_leaf(&weakened, &focus, 0), weakened);
    }
}
