//! Interactive shell used by the `boop` binary.

mod command;
mod shell;

pub use command::{ImageRef, ParseError, ShellCommand, HELP};
pub use shell::{describe_history, describe_session, execute, run_shell};
