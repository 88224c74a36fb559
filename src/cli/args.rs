//! CLI argument definitions using clap.
//!
//! Without a subcommand, langfmt formats (or with `--validate`, checks) the
//! given locales against the reference locale.
//!
//! ## Commands
//!
//! - `init`: Initialize langfmt configuration file
//!
//! Locales that collide with a subcommand name go after `--`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub format: FormatArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.format.common.verbose,
        }
    }
}

/// Common arguments that override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Assets directory containing lang/<locale>.json (overrides config file)
    #[arg(long, env = "LANGFMT_ASSETS_ROOT")]
    pub assets_root: Option<PathBuf>,

    /// Reference locale (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// List dropped and missing keys per locale
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// Check that files are already formatted instead of rewriting them
    #[arg(long)]
    pub validate: bool,

    /// Locales to process, in order (default: `locales` from the config file)
    #[arg(value_name = "LOCALES")]
    pub locales: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .langfmtrc.json configuration file
    ///
    /// A locale named `init` is formatted with `langfmt -- init`.
    Init,
}
