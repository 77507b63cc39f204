use crate::notation::{Exprs, Latex, Notation, TURNSTILE};
use crate::{Error, Expr};
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of a sequent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Lhs,
    Rhs,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Lhs => Self::Rhs,
            Self::Rhs => Self::Lhs,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lhs => write!(f, "lhs"),
            Self::Rhs => write!(f, "rhs"),
        }
    }
}

impl FromStr for Side {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lhs" | "l" => Ok(Self::Lhs),
            "rhs" | "r" => Ok(Self::Rhs),
            _ => Err(Error::Side(s.to_string())),
        }
    }
}

/// Sequent `lhs ⊢ rhs`.
///
/// The order of formulas on each side only matters for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sequent {
    pub lhs: Vec<Expr>,
    pub rhs: Vec<Expr>,
}

impl Sequent {
    pub fn new(lhs: Vec<Expr>, rhs: Vec<Expr>) -> Self {
        Self { lhs, rhs }
    }

    pub fn side(&self, side: Side) -> &Vec<Expr> {
        match side {
            Side::Lhs => &self.lhs,
            Side::Rhs => &self.rhs,
        }
    }

    /// Return a copy of the sequent with the formulas on the given side replaced.
    pub fn with_side(&self, side: Side, exprs: Vec<Expr>) -> Self {
        match side {
            Side::Lhs => Self::new(exprs, self.rhs.clone()),
            Side::Rhs => Self::new(self.lhs.clone(), exprs),
        }
    }

    /// Return true if the sequent holds trivially, i.e.
    /// some formula occurs on both sides or falsity occurs on the left.
    pub fn is_axiom(&self) -> bool {
        self.lhs.iter().any(|l| l.is_bot() || self.rhs.contains(l))
    }

    pub(crate) fn fmt_with(&self, f: &mut fmt::Formatter<'_>, n: Notation) -> fmt::Result {
        let (lhs, rhs) = (Exprs(&self.lhs), Exprs(&self.rhs));
        let turnstile = n.symbol(TURNSTILE);
        match n {
            Notation::Unicode => write!(f, "{} {} {}", lhs, turnstile, rhs),
            Notation::Latex => write!(f, "{} {} {}", Latex(lhs), turnstile, Latex(rhs)),
        }
    }
}

impl Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, Notation::Unicode)
    }
}
