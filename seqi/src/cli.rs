use clap::Parser;
use sequent::{Notation, ReductionTree};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Interactive construction of sequent calculus proofs
///
/// Commands are read line by line, for example:
/// `focus :rhs`, `push A`, `not`, `mode infer`, `expand :rhs 0`.
/// After every command that changes the proof tree,
/// the tree is printed with its open leaves marked.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
pub struct Cli {
    /// Print formulas in LaTeX notation
    #[arg(long)]
    pub latex: bool,

    /// Print the tree only when requested with `show`
    #[arg(short, long)]
    pub quiet: bool,

    /// Stop at the first malformed or rejected command
    #[arg(long)]
    pub strict: bool,

    /// Write the final proof tree in JSON format to given file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Path of a command file (standard input if omitted)
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn notation(&self) -> Notation {
        if self.latex {
            Notation::Latex
        } else {
            Notation::Unicode
        }
    }

    pub fn input(&self) -> Result<Box<dyn BufRead>, io::Error> {
        match &self.file {
            Some(file) => Ok(Box::new(BufReader::new(File::open(file)?))),
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }

    /// Write the tree to the JSON file, if one was given.
    pub fn export(&self, tree: &ReductionTree) -> Result<(), crate::Error> {
        if let Some(json) = &self.json {
            let f = File::create(json)?;
            serde_json::to_writer_pretty(f, tree)?;
        }
        Ok(())
    }
}
