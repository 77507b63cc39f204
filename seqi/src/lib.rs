//! Line-oriented front end for building sequent calculus proofs.

mod cli;
pub mod command;
mod error;
pub mod script;
pub mod session;

pub use cli::Cli;
pub use command::Command;
pub use error::{Error, Kind};
pub use session::{Mode, Rejection, Session};
