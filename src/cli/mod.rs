use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs, FormatArgs};
pub use exit_status::ExitStatus;
pub use report::print_error;
pub use run::CommandOutcome;

mod args;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let outcome = run::run(args)?;
    report::print(&outcome, verbose);

    Ok(ExitStatus::Success)
}
