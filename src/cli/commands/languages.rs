use super::super::{
    args::LanguagesCommand,
    context::DataContext,
    exit_status::ExitStatus,
    report::{print_not_found, print_table},
};

pub fn languages(cmd: &LanguagesCommand, ctx: &DataContext) -> ExitStatus {
    let Some(country) = ctx.resolve_country(&cmd.country) else {
        print_not_found(&format!("Unknown country \"{}\"", cmd.country));
        return ExitStatus::Failure;
    };

    print_table(("Code", "Language"), &ctx.sorted_languages(&country));
    ExitStatus::Success
}
