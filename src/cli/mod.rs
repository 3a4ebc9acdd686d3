//! Command-line interface for cfgcompat.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The command trait and result type
//! - [`check`] - The compatibility check command

pub mod args;
pub mod check;
pub mod command;

pub use args::{CheckArgs, Cli};
pub use check::CheckCommand;
pub use command::{Command, CommandResult};
