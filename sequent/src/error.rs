use alloc::string::String;
use core::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A connective was given the wrong number of operands.
    Arity {
        symbol: String,
        expected: usize,
        found: usize,
    },
    /// Neither `lhs` nor `rhs`.
    Side(String),
    /// Malformed textual coordinate.
    Focus(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity {
                symbol,
                expected,
                found,
            } => write!(
                f,
                "arity mismatch for {}: expected {} operand(s), found {}",
                symbol, expected, found
            ),
            Self::Side(s) => write!(f, "unknown side: {}", s),
            Self::Focus(s) => write!(f, "malformed coordinate: {}", s),
        }
    }
}
