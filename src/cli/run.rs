//! Dispatch parsed arguments to the matching command.
//!
//! Every command except `init` loads the reference data first; a load
//! failure is returned as `Err` and ends the run.

use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{
        countries::countries, init::init, interactive::interactive, language::language,
        languages::languages, translate::translate,
    },
    context::DataContext,
    exit_status::ExitStatus,
};

pub fn run(Arguments { command, common }: Arguments) -> Result<ExitStatus> {
    let load = || DataContext::load(&common);

    match command {
        None => interactive(&load()?),
        Some(Command::Countries) => Ok(countries(&load()?)),
        Some(Command::Languages(cmd)) => Ok(languages(&cmd, &load()?)),
        Some(Command::Translate(cmd)) => Ok(translate(&cmd, &load()?)),
        Some(Command::Language(cmd)) => Ok(language(&cmd, &load()?)),
        Some(Command::Init) => {
            let cwd = env::current_dir().context("Failed to determine current directory")?;
            init(&cwd)
        }
    }
}
