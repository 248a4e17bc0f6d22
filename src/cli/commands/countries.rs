use super::super::{context::DataContext, exit_status::ExitStatus, report::print_table};

pub fn countries(ctx: &DataContext) -> ExitStatus {
    print_table(("Code", "Country"), &ctx.sorted_countries());
    ExitStatus::Success
}
