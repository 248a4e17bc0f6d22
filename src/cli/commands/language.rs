use super::super::{
    args::LanguageCommand, context::DataContext, exit_status::ExitStatus,
    report::print_not_found,
};

/// Resolve a language code to its name, or a name to its code.
pub fn language(cmd: &LanguageCommand, ctx: &DataContext) -> ExitStatus {
    let query = cmd.query.trim();
    let answer = ctx
        .languages
        .lookup_name(query)
        .or_else(|| ctx.languages.lookup_code(query));

    match answer {
        Some(answer) => println!("{}", answer),
        None => print_not_found(&format!("Unknown language or code \"{}\"", query)),
    }
    ExitStatus::from_found(answer.is_some())
}
