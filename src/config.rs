use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lang::DEFAULT_REFERENCE_LOCALE;

pub const CONFIG_FILE_NAME: &str = ".langfmtrc.json";

static LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap());

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing `lang/<locale>.json`.
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    /// Locales processed when none are given on the command line.
    #[serde(default)]
    pub locales: Vec<String>,
}

fn default_assets_root() -> String {
    "./src/main/resources/assets/tfc".to_string()
}

fn default_reference_locale() -> String {
    DEFAULT_REFERENCE_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            reference_locale: default_reference_locale(),
            locales: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locale identifiers become file names, so they must not contain path
    /// separators or be empty.
    pub fn validate(&self) -> Result<()> {
        validate_locale(&self.reference_locale).context("Invalid 'referenceLocale'")?;
        for locale in &self.locales {
            validate_locale(locale).context("Invalid entry in 'locales'")?;
        }
        if self.assets_root.trim().is_empty() {
            bail!("'assetsRoot' must not be empty");
        }
        Ok(())
    }
}

/// Check that a locale identifier can safely name a file under `lang/`.
pub fn validate_locale(locale: &str) -> Result<()> {
    if !LOCALE_REGEX.is_match(locale) {
        bail!(
            "Invalid locale identifier \"{}\": expected letters, digits, '_' or '-' (e.g. en_us)",
            locale
        );
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// Path of the config file, or `None` when using defaults.
    pub source: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Absolute or base-relative assets root.
    pub fn resolved_assets_root(&self) -> PathBuf {
        resolve_against(&self.base_dir, Path::new(&self.config.assets_root))
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            source: None,
        }),
    }
}

/// Join `path` onto `base` unless it is absolute.
///
/// A leading `./` is stripped so joins read `<base>/assets` rather than
/// `<base>/./assets`.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(".").unwrap_or(path);
        base.join(rel)
    }
}
