//! Execution of command scripts.

use crate::{Cli, Command, Error, Kind, Session};
use log::{info, warn};
use sequent::{Latex, Notation};
use std::io::{BufRead, Write};

/// Execute the commands in `input`, writing trees and leaves to `out`.
///
/// Text after `#` is ignored.
/// Malformed and rejected commands are skipped with a warning,
/// unless the command-line options demand strictness.
/// At the end, the tree is exported if requested.
pub fn run(cli: &Cli, input: impl BufRead, out: &mut impl Write) -> Result<Session, Error> {
    let mut session = Session::default();
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        info!("line {}: {}", n + 1, line);
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) if cli.strict => {
                return Err(Error::new(Kind::SyntaxError, format!("line {}: {}", n + 1, e).into()))
            }
            Err(e) => {
                warn!("line {}: {}", n + 1, e);
                continue;
            }
        };
        respond(cli, &mut session, cmd, out)?;
    }
    cli.export(session.tree())?;
    Ok(session)
}

fn respond(cli: &Cli, session: &mut Session, cmd: Command, out: &mut impl Write) -> Result<(), Error> {
    let notation = cli.notation();
    match cmd {
        Command::Show => write!(out, "{}", session.tree().display(notation))?,
        Command::Leaves => {
            for (path, sequent) in session.tree().leaves() {
                let status = if sequent.is_axiom() { "axiom" } else { "open" };
                let path: Vec<_> = path.iter().map(|i| i.to_string()).collect();
                match notation {
                    Notation::Unicode => write!(out, "@{}  {}", path.join("."), sequent)?,
                    Notation::Latex => write!(out, "@{}  {}", path.join("."), Latex(sequent))?,
                }
                writeln!(out, "  [{}]", status)?;
            }
        }
        cmd => match session.execute(cmd) {
            Ok(true) if !cli.quiet => write!(out, "{}", session.tree().display(notation))?,
            Ok(_) => (),
            Err(e) if cli.strict => return Err(e.into()),
            Err(e) => warn!("{}", e),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sequent::{Expr, ReductionTree};

    fn cli(strict: bool) -> Cli {
        Cli {
            latex: false,
            quiet: true,
            strict,
            json: None,
            file: None,
        }
    }

    const EXCLUDED_MIDDLE: &str = "
# ⊢ ¬ ¬ (A ∨ ¬ A)
focus :rhs
push A   # first disjunct
push A
not
or
not
not
mode infer
expand :rhs 0
expand 0:lhs 0
expand 0.0:rhs 0
expand 0.0.0:rhs 1
leaves
";

    fn execute(cli: &Cli, script: &str) -> (Result<Session, Error>, String) {
        let mut out = Vec::new();
        let result = run(cli, script.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn leaves() {
        let (result, out) = execute(&cli(true), EXCLUDED_MIDDLE);
        assert!(result.is_ok());
        assert_eq!(out, "@0.0.0.0  A ⊢ A  [axiom]\n");
    }

    #[test]
    fn latex_leaves() {
        let cli = Cli { latex: true, ..cli(false) };
        let (_, out) = execute(&cli, "focus :lhs\npush Γ\nleaves");
        assert_eq!(out, "@  \\Gamma \\vdash \\quad  [open]\n");
    }

    #[test]
    fn show_after_change() {
        let cli = Cli { quiet: false, ..cli(false) };
        let (_, out) = execute(&cli, "focus :rhs\npush A\nmode infer");
        assert_eq!(out, " ⊢ A  [open]\n");
    }

    #[test]
    fn comments() {
        let (result, _) = execute(&cli(true), "# only a comment\n\n  push A # trailing\n");
        // editing without focus is rejected
        match result {
            Err(e) => assert!(matches!(e.get_kind(), Kind::Rejected)),
            Ok(_) => panic!("expected rejection"),
        }
        let (result, _) = execute(&cli(true), "focus :rhs # select\npush A#B\n");
        let session = result.ok().unwrap();
        assert_eq!(session.tree().sequent().rhs, vec![Expr::atom("A")]);
    }

    #[test]
    fn strict() {
        let (result, _) = execute(&cli(true), "show\nfrobnicate\n");
        match result {
            Err(e) => assert!(matches!(e.get_kind(), Kind::SyntaxError)),
            Ok(_) => panic!("expected syntax error"),
        }
    }

    #[test]
    fn lenient() {
        let script = "frobnicate\nfocus :rhs\nexpand :rhs 0\npush A\n";
        let (result, _) = execute(&cli(false), script);
        let session = result.ok().unwrap();
        assert_eq!(session.tree().sequent().rhs, vec![Expr::atom("A")]);
    }

    #[test]
    fn export() {
        let path = std::env::temp_dir().join(format!("seqi-export-{}.json", std::process::id()));
        let cli = Cli {
            json: Some(path.clone()),
            ..cli(true)
        };
        let (result, _) = execute(&cli, EXCLUDED_MIDDLE);
        let session = result.ok().unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let tree: ReductionTree = serde_json::from_str(&json).unwrap();
        assert_eq!(&tree, session.tree());
        assert!(tree.is_closed());
    }
}
