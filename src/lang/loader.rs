use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use super::map::LangMap;
use crate::error::{LangError, LangResult};

/// Directory under the assets root that holds one JSON file per locale.
pub const LANG_DIR: &str = "lang";

/// Resolves locale identifiers to their files under an assets root.
///
/// The layout is fixed: `<assets_root>/lang/<locale>.json`.
#[derive(Debug, Clone)]
pub struct LangStore {
    assets_root: PathBuf,
}

impl LangStore {
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
        }
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.assets_root
            .join(LANG_DIR)
            .join(format!("{}.json", locale))
    }

    /// Load the language map for a locale.
    pub fn load(&self, locale: &str) -> LangResult<LangMap> {
        let path = self.path_for(locale);
        let map = read_lang_file(&path)?;
        debug!(locale, entries = map.len(), path = %path.display(), "loaded language file");
        Ok(map)
    }
}

/// Read and parse a language file, keeping the file's key order.
pub fn read_lang_file(path: &Path) -> LangResult<LangMap> {
    let content = fs::read_to_string(path).map_err(|source| LangError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lang(&content, path)
}

fn parse_lang(content: &str, path: &Path) -> LangResult<LangMap> {
    let value: Value = serde_json::from_str(content).map_err(|source| LangError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LangError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
