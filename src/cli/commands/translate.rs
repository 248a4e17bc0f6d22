use super::super::{
    args::TranslateCommand, context::DataContext, exit_status::ExitStatus,
    report::print_not_found,
};
use crate::translator::Translator;

pub fn translate(cmd: &TranslateCommand, ctx: &DataContext) -> ExitStatus {
    let Some(country) = ctx.resolve_country(&cmd.country) else {
        print_not_found(&format!("Unknown country \"{}\"", cmd.country));
        return ExitStatus::Failure;
    };
    let Some(language) = ctx.resolve_language(&country, &cmd.language) else {
        print_not_found(&format!(
            "No translation of \"{}\" into \"{}\"",
            ctx.country_name(&country),
            cmd.language
        ));
        return ExitStatus::Failure;
    };

    match ctx.translator.translate(&country, &language) {
        Some(text) => {
            println!("{}", text);
            ExitStatus::Success
        }
        None => {
            print_not_found(&format!(
                "No translation of \"{}\" into \"{}\"",
                ctx.country_name(&country),
                ctx.language_name(&language)
            ));
            ExitStatus::Failure
        }
    }
}
