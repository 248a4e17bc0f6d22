//! Interactive console session.
//!
//! The user picks a country from a list, then a language, and is shown the
//! country's name in that language. Typing `quit` at any prompt, or closing
//! input, ends the session.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::super::{context::DataContext, exit_status::ExitStatus};
use crate::translator::Translator;

const QUIT_COMMAND: &str = "quit";

pub fn interactive(ctx: &DataContext) -> Result<ExitStatus> {
    let stdin = io::stdin();
    run_session(ctx, stdin.lock(), &mut io::stdout().lock())?;
    Ok(ExitStatus::Success)
}

enum Answer {
    Quit,
    Line(String),
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<Answer> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Answer::Quit);
    }
    let line = line.trim();
    if line.eq_ignore_ascii_case(QUIT_COMMAND) {
        Ok(Answer::Quit)
    } else {
        Ok(Answer::Line(line.to_string()))
    }
}

/// Run the prompt loop until the user quits or input ends.
pub fn run_session<R: BufRead, W: Write>(ctx: &DataContext, mut input: R, out: &mut W) -> Result<()> {
    loop {
        for (_, name) in ctx.sorted_countries() {
            writeln!(out, "{}", name)?;
        }
        writeln!(out, "select a country from above:")?;
        out.flush()?;

        let Answer::Line(answer) = read_answer(&mut input)? else {
            break;
        };
        let Some(country) = ctx.resolve_country(&answer) else {
            writeln!(out, "\"{}\" is not a country from the list.", answer)?;
            continue;
        };

        for (_, name) in ctx.sorted_languages(&country) {
            writeln!(out, "{}", name)?;
        }
        writeln!(out, "select a language from above:")?;
        out.flush()?;

        let Answer::Line(answer) = read_answer(&mut input)? else {
            break;
        };
        let Some(language) = ctx.resolve_language(&country, &answer) else {
            writeln!(out, "\"{}\" is not a language from the list.", answer)?;
            continue;
        };

        let country_name = ctx.country_name(&country);
        let language_name = ctx.language_name(&language);
        match ctx.translator.translate(&country, &language) {
            Some(text) => writeln!(out, "{} in {} is {}", country_name, language_name, text)?,
            None => writeln!(out, "{} has no name in {}", country_name, language_name)?,
        }

        writeln!(out, "Press enter to continue or quit to exit.")?;
        out.flush()?;
        if let Answer::Quit = read_answer(&mut input)? {
            break;
        }
    }

    out.flush()?;
    Ok(())
}
