use std::fs;

use tracing::{debug, info};

use super::{
    loader::{LangStore, read_lang_file},
    map::LangMap,
};
use crate::error::{LangError, LangResult};

/// What to do with a formatted map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the locale file with the formatted map.
    Write,
    /// Compare the on-disk file with the formatted map and never write.
    Validate,
}

impl Mode {
    pub fn from_validate_flag(validate: bool) -> Self {
        if validate { Mode::Validate } else { Mode::Write }
    }
}

pub fn persist(store: &LangStore, locale: &str, formatted: &LangMap, mode: Mode) -> LangResult<()> {
    match mode {
        Mode::Validate => validate(store, locale, formatted),
        Mode::Write => write(store, locale, formatted),
    }
}

/// Fail unless the file on disk already equals `formatted`, key order included.
pub fn validate(store: &LangStore, locale: &str, formatted: &LangMap) -> LangResult<()> {
    let on_disk = read_lang_file(&store.path_for(locale))?;
    if !same_entries_in_order(&on_disk, formatted) {
        return Err(LangError::ValidationMismatch {
            locale: locale.to_string(),
        });
    }
    debug!(locale, "language file is correctly formatted");
    Ok(())
}

/// Overwrite the locale file with `formatted`.
pub fn write(store: &LangStore, locale: &str, formatted: &LangMap) -> LangResult<()> {
    let path = store.path_for(locale);
    let content = render(formatted).map_err(|source| LangError::Serialize {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, content).map_err(|source| LangError::Io {
        path: path.clone(),
        source,
    })?;
    info!(locale, path = %path.display(), "wrote language file");
    Ok(())
}

/// Serialize a map the way language files are stored on disk.
///
/// Uses 2-space indentation, literal non-ASCII characters and a trailing newline.
pub fn render(map: &LangMap) -> serde_json::Result<String> {
    let content = serde_json::to_string_pretty(map)?;
    Ok(format!("{}\n", content))
}

// `Map` equality ignores order when `preserve_order` is on, so compare pairwise.
fn same_entries_in_order(left: &LangMap, right: &LangMap) -> bool {
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(l, r)| l == r)
}
