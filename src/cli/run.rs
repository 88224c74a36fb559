//! Dispatches parsed arguments to the format run or the `init` command.

use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::args::{Arguments, Command, FormatArgs};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config, resolve_against, validate_locale},
    lang::{Driver, LangStore, Mode, RunSummary},
};

/// What a successful invocation did.
#[derive(Debug)]
pub enum CommandOutcome {
    Init { path: PathBuf },
    Format(RunSummary),
}

pub fn run(Arguments { command, format }: Arguments) -> Result<CommandOutcome> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    match command {
        Some(Command::Init) => init(&cwd).map(|path| CommandOutcome::Init { path }),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            format_locales(&cwd, format, &mut out).map(CommandOutcome::Format)
        }
    }
}

/// Resolve configuration and run the driver, writing progress lines to `out`.
pub fn format_locales<W: Write>(cwd: &Path, args: FormatArgs, out: &mut W) -> Result<RunSummary> {
    let loaded = load_config(cwd)?;

    if args.common.verbose {
        match &loaded.source {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    let assets_root = match &args.common.assets_root {
        Some(path) => resolve_against(cwd, path),
        None => loaded.resolved_assets_root(),
    };

    let reference_locale = match args.common.reference_locale {
        Some(locale) => {
            validate_locale(&locale)?;
            locale
        }
        None => loaded.config.reference_locale.clone(),
    };

    let locales = if args.locales.is_empty() {
        loaded.config.locales.clone()
    } else {
        for locale in &args.locales {
            validate_locale(locale)?;
        }
        args.locales
    };

    if locales.is_empty() {
        bail!(
            "No locales given.\n\
             Hint: Pass locales as arguments (e.g. `langfmt de_de`) or set 'locales' in {}.",
            CONFIG_FILE_NAME
        );
    }

    let driver = Driver::new(
        LangStore::new(assets_root),
        reference_locale,
        Mode::from_validate_flag(args.validate),
    );
    let summary = driver.run(&locales, out)?;
    Ok(summary)
}

fn init(cwd: &Path) -> Result<PathBuf> {
    let config_path = cwd.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
