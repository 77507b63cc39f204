//! Reduction trees, i.e. partial sequent calculus proofs.

use crate::notation::{Latex, Notation};
use crate::Sequent;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tree of sequents, where the premises of every node justify its sequent.
///
/// A node without premises is an open leaf.
/// Nodes are shared, so cloning a tree is cheap, and
/// updating a node copies only the path from the root to the node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReductionTree(Arc<Node>);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    sequent: Sequent,
    upper: Vec<ReductionTree>,
}

impl ReductionTree {
    pub fn new(sequent: Sequent, upper: Vec<Self>) -> Self {
        Self(Arc::new(Node { sequent, upper }))
    }

    /// Open leaf.
    pub fn leaf(sequent: Sequent) -> Self {
        Self::new(sequent, Vec::new())
    }

    pub fn sequent(&self) -> &Sequent {
        &self.0.sequent
    }

    /// Premises.
    pub fn upper(&self) -> &Vec<Self> {
        &self.0.upper
    }

    pub fn is_leaf(&self) -> bool {
        self.0.upper.is_empty()
    }

    pub fn with_sequent(&self, sequent: Sequent) -> Self {
        Self::new(sequent, self.0.upper.clone())
    }

    pub fn with_upper(&self, upper: Vec<Self>) -> Self {
        Self::new(self.0.sequent.clone(), upper)
    }

    /// Return true if both trees are the same node in memory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Combine the results for the premises of every node into a result for the node.
    ///
    /// Leaves are passed to `leaf` together with their path from the root,
    /// inner nodes are passed to `node` together with the results of their premises.
    pub fn fold<T>(
        &self,
        leaf: &mut impl FnMut(&Self, &[usize]) -> T,
        node: &mut impl FnMut(&Self, Vec<T>) -> T,
    ) -> T {
        self.fold_at(&mut Vec::new(), leaf, node)
    }

    fn fold_at<T>(
        &self,
        path: &mut Vec<usize>,
        leaf: &mut impl FnMut(&Self, &[usize]) -> T,
        node: &mut impl FnMut(&Self, Vec<T>) -> T,
    ) -> T {
        if self.is_leaf() {
            return leaf(self, &path[..]);
        }
        let mut results = Vec::with_capacity(self.upper().len());
        for (i, u) in self.upper().iter().enumerate() {
            path.push(i);
            results.push(u.fold_at(path, leaf, node));
            path.pop();
        }
        node(self, results)
    }

    /// Return the open leaves together with their paths, from left to right.
    pub fn leaves(&self) -> Vec<(Vec<usize>, &Sequent)> {
        let mut leaves = Vec::new();
        self.leaves_at(&mut Vec::new(), &mut leaves);
        leaves
    }

    fn leaves_at<'t>(&'t self, path: &mut Vec<usize>, acc: &mut Vec<(Vec<usize>, &'t Sequent)>) {
        if self.is_leaf() {
            acc.push((path.clone(), self.sequent()))
        }
        for (i, u) in self.upper().iter().enumerate() {
            path.push(i);
            u.leaves_at(path, acc);
            path.pop();
        }
    }

    /// Return true if all open leaves are axioms.
    pub fn is_closed(&self) -> bool {
        self.fold(&mut |t, _| t.sequent().is_axiom(), &mut |_, us| {
            us.into_iter().all(|u| u)
        })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.fold(&mut |_, _| 1, &mut |_, us| 1 + us.into_iter().sum::<usize>())
    }

    pub fn display(&self, notation: Notation) -> Disp<'_> {
        Disp {
            depth: 0,
            tree: self,
            notation,
        }
    }
}

/// Display a tree with one node per line,
/// every premise being indented more deeply than its conclusion.
pub struct Disp<'t> {
    depth: usize,
    tree: &'t ReductionTree,
    notation: Notation,
}

impl<'t> Display for Disp<'t> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{: <1$}", "", self.depth * 2)?;
        let sequent = self.tree.sequent();
        match self.notation {
            Notation::Unicode => write!(f, "{}", sequent)?,
            Notation::Latex => write!(f, "{}", Latex(sequent))?,
        }
        if self.tree.is_leaf() {
            let status = if sequent.is_axiom() { "axiom" } else { "open" };
            write!(f, "  [{}]", status)?
        }
        writeln!(f)?;
        let depth = self.depth + 1;
        for tree in self.tree.upper() {
            let notation = self.notation;
            Self {
                depth,
                tree,
                notation,
            }
            .fmt(f)?
        }
        Ok(())
    }
}

impl Display for ReductionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display(Notation::Unicode).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expr;
    use alloc::string::ToString;
    use alloc::vec;

    fn goal(rhs: Expr) -> Sequent {
        Sequent::new(Vec::new(), vec![rhs])
    }

    #[test]
    fn leaves() {
        let (a, b) = (Expr::atom("A"), Expr::atom("B"));
        let l0 = ReductionTree::leaf(goal(a.clone()));
        let l1 = ReductionTree::leaf(goal(b.clone()));
        let tree = ReductionTree::new(goal(a.clone() & b), vec![l0, l1.clone()]);
        let root = ReductionTree::new(goal(a.clone()), vec![tree]);
        let leaves = root.leaves();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[1], (vec![0, 1], l1.sequent()));
        assert_eq!(root.size(), 4);
        assert!(!root.is_closed());
    }

    #[test]
    fn display() {
        let a = Expr::atom("A");
        let axiom = Sequent::new(vec![a.clone()], vec![a.clone()]);
        let tree = ReductionTree::new(goal(Expr::imp(a.clone(), a)), vec![ReductionTree::leaf(axiom)]);
        assert_eq!(tree.to_string(), " ⊢ A → A\n  A ⊢ A  [axiom]\n");
        assert!(tree.is_closed());
    }

    #[test]
    fn sharing() {
        let leaf = ReductionTree::leaf(Sequent::default());
        let tree = ReductionTree::new(Sequent::default(), vec![leaf.clone()]);
        let other = tree.with_sequent(goal(Expr::bot()));
        assert!(other.upper()[0].ptr_eq(&leaf));
        assert_eq!(tree.sequent(), &Sequent::default());
    }
}
