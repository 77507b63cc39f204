//! Commands of an interactive session, one per line.

use crate::session::Mode;
use sequent::{Connective, Edit, TreeFocus};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Select the formulas at a coordinate for editing
    Focus(TreeFocus),
    /// Edit the selected formulas
    Edit(Edit),
    /// Expand the formula with the given index at a coordinate
    Expand(TreeFocus, usize),
    /// Remove the formula with the given index at a coordinate
    Weaken(TreeFocus, usize),
    Mode(Mode),
    /// Return to the previous tree
    Back,
    Show,
    Leaves,
    /// Start over with an empty sequent
    Reset,
}

fn connective(word: &str) -> Option<Connective> {
    match word {
        "and" | "∧" => Some(Connective::And),
        "or" | "∨" => Some(Connective::Or),
        "imp" | "→" => Some(Connective::Imp),
        "not" | "¬" => Some(Connective::Neg),
        "bot" | "⊥" => Some(Connective::Bot),
        _ => None,
    }
}

fn coordinate(arg: Option<&str>) -> Result<TreeFocus, String> {
    let arg = arg.ok_or_else(|| "coordinate expected".to_string())?;
    arg.parse().map_err(|e: sequent::Error| e.to_string())
}

fn index(arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| "formula index expected".to_string())?;
    arg.parse()
        .map_err(|_| format!("invalid formula index: {}", arg))
}

impl FromStr for Command {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or_else(|| "empty command".to_string())?;
        let cmd = match word {
            "focus" => Self::Focus(coordinate(words.next())?),
            "push" => {
                let name = words.next().ok_or_else(|| "atom expected".to_string())?;
                Self::Edit(Edit::Atom(name.to_string()))
            }
            "undo" => Self::Edit(Edit::Undo),
            "expand" => Self::Expand(coordinate(words.next())?, index(words.next())?),
            "weaken" => Self::Weaken(coordinate(words.next())?, index(words.next())?),
            "mode" => {
                let mode = words.next().ok_or_else(|| "mode expected".to_string())?;
                Self::Mode(mode.parse()?)
            }
            "back" => Self::Back,
            "show" => Self::Show,
            "leaves" => Self::Leaves,
            "reset" => Self::Reset,
            _ => match connective(word) {
                Some(c) => Self::Edit(Edit::Connect(c)),
                None => return Err(format!("unknown command: {}", word)),
            },
        };
        match words.next() {
            None => Ok(cmd),
            Some(arg) => Err(format!("unexpected argument: {}", arg)),
        }
    }
}
