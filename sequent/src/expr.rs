//! Propositional formulas with fixity information.

use crate::notation::Notation;
use crate::Error;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binding strength of an operator.
///
/// Lower values bind weaker, i.e. are more likely to require parentheses.
/// `Atom` is greater than every finite precedence and never requires parentheses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prec {
    Finite(i32),
    Atom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Assoc {
    Neither,
    Left,
    Right,
}

/// The connectives that the inference rules know about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Imp,
    Neg,
    Bot,
}

impl Connective {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "∧",
            Self::Or => "∨",
            Self::Imp => "→",
            Self::Neg => "¬",
            Self::Bot => "⊥",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        [Self::And, Self::Or, Self::Imp, Self::Neg, Self::Bot]
            .iter()
            .copied()
            .find(|c| c.symbol() == s)
    }

    pub fn prec(self) -> Prec {
        match self {
            Self::And => Prec::Finite(3),
            Self::Or => Prec::Finite(2),
            Self::Imp => Prec::Finite(1),
            Self::Neg => Prec::Finite(9),
            Self::Bot => Prec::Atom,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Imp | Self::Neg => Assoc::Right,
            Self::And | Self::Or | Self::Bot => Assoc::Neither,
        }
    }

    /// Number of operands.
    pub fn arity(self) -> usize {
        match self {
            Self::Bot => 0,
            Self::Neg => 1,
            Self::And | Self::Or | Self::Imp => 2,
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbol().fmt(f)
    }
}

/// Formula.
///
/// Formulas are immutable; operands are shared,
/// so cloning a formula is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    symbol: Arc<str>,
    prec: Prec,
    assoc: Assoc,
    operands: Arc<[Expr]>,
}

impl Expr {
    /// Construct a formula without checking its arity.
    ///
    /// Formulas built this way whose arity does not match their connective
    /// are not reduced by any rule.
    pub fn raw(symbol: &str, prec: Prec, assoc: Assoc, operands: Vec<Expr>) -> Self {
        Self {
            symbol: symbol.into(),
            prec,
            assoc,
            operands: operands.into(),
        }
    }

    /// Construct a formula, rejecting known connectives with the wrong number of operands.
    ///
    /// ~~~
    /// use sequent::{Assoc, Expr, Prec};
    /// let a = Expr::atom("A");
    /// let neg = Expr::new("¬", Prec::Finite(9), Assoc::Right, vec![a.clone()]);
    /// assert_eq!(neg, Ok(-a.clone()));
    /// assert!(Expr::new("∧", Prec::Finite(3), Assoc::Neither, vec![a]).is_err());
    /// ~~~
    pub fn new(symbol: &str, prec: Prec, assoc: Assoc, operands: Vec<Expr>) -> Result<Self, Error> {
        if let Some(c) = Connective::from_symbol(symbol) {
            check_arity(c, operands.len())?
        }
        Ok(Self::raw(symbol, prec, assoc, operands))
    }

    /// Apply a connective to operands, using its standard fixity.
    pub fn connect(c: Connective, operands: Vec<Expr>) -> Result<Self, Error> {
        check_arity(c, operands.len())?;
        Ok(Self::raw(c.symbol(), c.prec(), c.assoc(), operands))
    }

    pub fn atom(name: &str) -> Self {
        Self::raw(name, Prec::Atom, Assoc::Neither, Vec::new())
    }

    pub fn bot() -> Self {
        Self::nary(Connective::Bot, Vec::new())
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::nary(Connective::Imp, Vec::from([l, r]))
    }

    fn nary(c: Connective, operands: Vec<Expr>) -> Self {
        Self::raw(c.symbol(), c.prec(), c.assoc(), operands)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn prec(&self) -> Prec {
        self.prec
    }

    pub fn assoc(&self) -> Assoc {
        self.assoc
    }

    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    /// Return the connective of the formula, if its symbol denotes one.
    ///
    /// This does not consider the number of operands.
    pub fn connective(&self) -> Option<Connective> {
        Connective::from_symbol(&self.symbol)
    }

    pub fn is_bot(&self) -> bool {
        self.connective() == Some(Connective::Bot) && self.operands.is_empty()
    }

    fn fmt_paren(&self, f: &mut fmt::Formatter<'_>, paren: bool, n: Notation) -> fmt::Result {
        if paren {
            write!(f, "(")?;
            self.fmt_with(f, n)?;
            write!(f, ")")
        } else {
            self.fmt_with(f, n)
        }
    }

    /// Print the formula with minimal parentheses.
    ///
    /// We assume that operators with the same precedence
    /// do not mix left and right associativity.
    pub(crate) fn fmt_with(&self, f: &mut fmt::Formatter<'_>, n: Notation) -> fmt::Result {
        let me = n.symbol(&self.symbol);
        match &*self.operands {
            [] => write!(f, "{}", me),
            [x] => {
                write!(f, "{} ", me)?;
                x.fmt_paren(f, x.prec < self.prec, n)
            }
            [l, r] => {
                let lp = l.prec < self.prec || (l.prec == self.prec && l.assoc == Assoc::Right);
                let rp = r.prec < self.prec || (r.prec == self.prec && r.assoc == Assoc::Left);
                l.fmt_paren(f, lp, n)?;
                write!(f, " {} ", me)?;
                r.fmt_paren(f, rp, n)
            }
            xs => {
                write!(f, "{}(", me)?;
                let mut iter = xs.iter();
                if let Some(x) = iter.next() {
                    x.fmt_with(f, n)?;
                    for x in iter {
                        write!(f, ", ")?;
                        x.fmt_with(f, n)?
                    }
                }
                write!(f, ")")
            }
        }
    }
}

fn check_arity(c: Connective, found: usize) -> Result<(), Error> {
    if c.arity() == found {
        Ok(())
    } else {
        Err(Error::Arity {
            symbol: c.symbol().to_string(),
            expected: c.arity(),
            found,
        })
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, Notation::Unicode)
    }
}

impl core::ops::Neg for Expr {
    type Output = Self;
    fn neg(self) -> Self {
        Self::nary(Connective::Neg, Vec::from([self]))
    }
}

impl core::ops::BitAnd for Expr {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::nary(Connective::And, Vec::from([self, rhs]))
    }
}

impl core::ops::BitOr for Expr {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::nary(Connective::Or, Vec::from([self, rhs]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prec_order() {
        assert!(Prec::Finite(i32::MAX) < Prec::Atom);
        assert!(Prec::Finite(1) < Prec::Finite(2));
    }

    #[test]
    fn connective_symbols() {
        for c in [Connective::And, Connective::Or, Connective::Imp, Connective::Neg] {
            assert_eq!(Connective::from_symbol(c.symbol()), Some(c))
        }
        assert_eq!(Connective::from_symbol("A"), None);
    }

    #[test]
    fn connect_checks_arity() {
        let a = Expr::atom("A");
        let err = Expr::connect(Connective::Imp, Vec::from([a.clone()]));
        assert_eq!(
            err,
            Err(Error::Arity {
                symbol: "→".to_string(),
                expected: 2,
                found: 1
            })
        );
        let ok = Expr::connect(Connective::Imp, Vec::from([a.clone(), a.clone()]));
        assert_eq!(ok, Ok(Expr::imp(a.clone(), a)));
    }

    #[test]
    fn unknown_symbols_are_unchecked() {
        let e = Expr::new("⊕", Prec::Finite(2), Assoc::Left, Vec::new());
        assert!(e.is_ok());
    }
}
