//! Textual notations for formulas and sequents.
//!
//! The default `Display` implementations use Unicode symbols.
//! [`Latex`] produces input for a TeX-style typesetter.

use crate::{Expr, Sequent};
use core::fmt::{self, Display};

/// Turnstile, separating the two sides of a sequent.
pub const TURNSTILE: &str = "⊢";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notation {
    Unicode,
    Latex,
}

impl Notation {
    /// Spell a symbol in this notation.
    pub fn symbol(self, s: &str) -> &str {
        match self {
            Self::Unicode => s,
            Self::Latex => match s {
                "∧" => "\\land",
                "∨" => "\\lor",
                "→" => "\\to",
                "¬" => "\\neg",
                "⊥" => "\\bot",
                "⊢" => "\\vdash",
                "Γ" => "\\Gamma",
                "Δ" => "\\Delta",
                "Σ" => "\\Sigma",
                "Π" => "\\Pi",
                _ => s,
            },
        }
    }
}

/// Comma-separated list of formulas.
///
/// ~~~
/// use sequent::{Expr, Exprs};
/// let (a, b) = (Expr::atom("A"), Expr::atom("B"));
/// assert_eq!(Exprs(&[a.clone(), a & b]).to_string(), "A, A ∧ B");
/// assert_eq!(Exprs(&[]).to_string(), "");
/// ~~~
#[derive(Copy, Clone, Debug)]
pub struct Exprs<'a>(pub &'a [Expr]);

impl<'a> Exprs<'a> {
    pub(crate) fn fmt_with(&self, f: &mut fmt::Formatter<'_>, n: Notation) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(e) = iter.next() {
            e.fmt_with(f, n)?;
            for e in iter {
                write!(f, ", ")?;
                e.fmt_with(f, n)?
            }
        }
        Ok(())
    }
}

impl<'a> Display for Exprs<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, Notation::Unicode)
    }
}

/// Display an object in LaTeX notation.
///
/// In this notation, an empty list of formulas is shown as `\quad`,
/// so that it remains visible (and clickable) once typeset.
pub struct Latex<T>(pub T);

impl Display for Latex<&Expr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_with(f, Notation::Latex)
    }
}

impl Display for Latex<Exprs<'_>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 .0.is_empty() {
            write!(f, "\\quad")
        } else {
            self.0.fmt_with(f, Notation::Latex)
        }
    }
}

impl Display for Latex<&Sequent> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_with(f, Notation::Latex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn latex() {
        let g = Expr::atom("Γ");
        let a = Expr::atom("A");
        let fm = Expr::imp(-(g & a.clone()), Expr::bot());
        let s = Latex(&fm).to_string();
        assert_eq!(s, "\\neg (\\Gamma \\land A) \\to \\bot");
        assert_eq!(Latex(Exprs(&[])).to_string(), "\\quad");
        let sequent = Sequent::new(Vec::new(), Vec::from([a]));
        assert_eq!(Latex(&sequent).to_string(), "\\quad \\vdash A");
    }
}
