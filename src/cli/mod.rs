//! Command-line interface layer.
//!
//! Separate from the lookup types so the crate can be used as a library.

mod args;
mod commands;
mod context;
mod exit_status;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs};
pub use context::DataContext;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
