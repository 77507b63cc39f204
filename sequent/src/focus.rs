//! Addressing of formula lists inside a reduction tree.

use crate::optic::{Field, Identity, Index, Optional};
use crate::{Error, Expr, ReductionTree, Sequent, Side};
use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optic from a reduction tree into one of its parts.
pub type TreeOptic<A> = Box<dyn Optional<ReductionTree, A>>;

/// Coordinate of a formula list in a reduction tree.
///
/// The path `[i0, i1, ...]` denotes the node `root.upper[i0].upper[i1]...`,
/// so the empty path denotes the root.
///
/// The textual form separates path components by dots and
/// the side by a colon:
///
/// ~~~
/// use sequent::{Side, TreeFocus};
/// let focus: TreeFocus = "0.1:rhs".parse().unwrap();
/// assert_eq!(focus, TreeFocus::new(vec![0, 1], Side::Rhs));
/// assert_eq!(TreeFocus::root(Side::Lhs).to_string(), ":lhs");
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeFocus {
    pub path: Vec<usize>,
    pub side: Side,
}

impl TreeFocus {
    pub fn new(path: Vec<usize>, side: Side) -> Self {
        Self { path, side }
    }

    pub fn root(side: Side) -> Self {
        Self::new(Vec::new(), side)
    }
}

impl Display for TreeFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.path.iter();
        if let Some(i) = iter.next() {
            write!(f, "{}", i)?;
            iter.try_for_each(|i| write!(f, ".{}", i))?;
        }
        write!(f, ":{}", self.side)
    }
}

impl FromStr for TreeFocus {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, side) = s
            .rsplit_once(':')
            .ok_or_else(|| Error::Focus(s.to_string()))?;
        let side = side.parse()?;
        let path = if path.is_empty() {
            Vec::new()
        } else {
            let path = path.split('.').map(|i| i.parse::<usize>());
            path.collect::<Result<_, _>>()
                .map_err(|_| Error::Focus(s.to_string()))?
        };
        Ok(Self { path, side })
    }
}

/// Premises of a tree.
pub fn upper() -> Field<ReductionTree, Vec<ReductionTree>> {
    Field::new(ReductionTree::upper, ReductionTree::with_upper)
}

/// Sequent at the root of a tree.
pub fn sequent() -> Field<ReductionTree, Sequent> {
    Field::new(ReductionTree::sequent, ReductionTree::with_sequent)
}

/// Subtree at the given path.
pub fn subtree_at(path: &[usize]) -> TreeOptic<ReductionTree> {
    match path.split_first() {
        None => Box::new(Identity),
        Some((i, rest)) => Box::new(upper().then(Index::new(*i)).then(subtree_at(rest))),
    }
}

/// Sequent of the subtree at the given path.
pub fn sequent_at(path: &[usize]) -> TreeOptic<Sequent> {
    Box::new(subtree_at(path).then(sequent()))
}

/// Formulas on one side of a sequent.
pub fn exprs_at_side(side: Side) -> Field<Sequent, Vec<Expr>> {
    match side {
        Side::Lhs => Field::new(|s| &s.lhs, |s, lhs| Sequent::new(lhs, s.rhs.clone())),
        Side::Rhs => Field::new(|s| &s.rhs, |s, rhs| Sequent::new(s.lhs.clone(), rhs)),
    }
}

/// Formulas at a coordinate.
pub fn exprs_at(focus: &TreeFocus) -> TreeOptic<Vec<Expr>> {
    Box::new(sequent_at(&focus.path).then(exprs_at_side(focus.side)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn tree() -> ReductionTree {
        let (a, b) = (Expr::atom("A"), Expr::atom("B"));
        let sq = |lhs: Vec<Expr>| Sequent::new(lhs, Vec::new());
        let l0 = ReductionTree::leaf(sq(vec![a.clone()]));
        let l1 = ReductionTree::leaf(sq(vec![b.clone()]));
        ReductionTree::new(sq(vec![a | b]), vec![l0, l1])
    }

    #[test]
    fn get() {
        let t = tree();
        let lhs = |path: &[usize]| exprs_at(&TreeFocus::new(path.to_vec(), Side::Lhs));
        assert_eq!(lhs(&[1]).get(&t), Some(&vec![Expr::atom("B")]));
        assert_eq!(lhs(&[]).get(&t), Some(&t.sequent().lhs));
        assert_eq!(lhs(&[2]).get(&t), None);
        assert_eq!(lhs(&[0, 0]).get(&t), None);
        assert_eq!(subtree_at(&[0]).get(&t), Some(&t.upper()[0]));
    }

    #[test]
    fn modify() {
        let t = tree();
        let focus = TreeFocus::new(vec![0], Side::Rhs);
        let c = Expr::atom("C");
        let u = exprs_at(&focus).modify(&t, |_| vec![c.clone()]);
        assert_eq!(u.upper()[0].sequent().rhs, vec![c]);
        // untouched sibling is shared
        assert!(u.upper()[1].ptr_eq(&t.upper()[1]));
        assert!(t.upper()[0].sequent().rhs.is_empty());
    }

    #[test]
    fn parse() {
        let root: TreeFocus = ":r".parse().unwrap();
        assert_eq!(root, TreeFocus::root(Side::Rhs));
        assert_eq!("1.x:lhs".parse::<TreeFocus>(), Err(Error::Focus("1.x:lhs".to_string())));
        assert_eq!("0.1".parse::<TreeFocus>(), Err(Error::Focus("0.1".to_string())));
        assert_eq!("0:mid".parse::<TreeFocus>(), Err(Error::Side("mid".to_string())));
        let focus = TreeFocus::new(vec![3, 0, 12], Side::Lhs);
        assert_eq!(focus.to_string().parse::<TreeFocus>(), Ok(focus));
    }
}
