use std::process::ExitCode;

use clap::Parser;
use langfmt::cli::{Arguments, ExitStatus, print_error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args = Arguments::parse();

    match langfmt::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::from_error(&err).into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LANGFMT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
