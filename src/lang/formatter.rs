//! Filters and reorders a target language map against the reference.

use std::{fmt, io::Write};

use super::{
    loader::LangStore,
    map::{LangMap, is_comment_key, partition},
    persister::{Mode, persist},
};
use crate::error::{LangError, LangResult};

/// Translated keys over total reference keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub translated: usize,
    pub total: usize,
}

impl Coverage {
    /// Percentage of reference keys that are translated.
    ///
    /// Callers guarantee `total > 0`; the driver rejects an empty reference.
    pub fn percent(&self) -> f64 {
        100.0 * self.translated as f64 / self.total as f64
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} ({:.1}%)",
            self.translated,
            self.total,
            self.percent()
        )
    }
}

/// Result of formatting one target map.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedLang {
    /// Comment entries first, then translated keys in reference order.
    pub map: LangMap,
    pub coverage: Coverage,
    /// Target keys that the reference does not know, in target order.
    pub dropped: Vec<String>,
    /// Reference keys the target does not translate, in reference order.
    pub missing: Vec<String>,
}

/// Build the canonical form of `target` against `reference`.
///
/// Comment keys keep their values and relative order and come first.
/// Regular keys follow in reference order; keys absent from the reference
/// are dropped and no placeholders are inserted for missing ones.
pub fn format_map(reference: &LangMap, target: &LangMap) -> FormattedLang {
    let (mut map, regular) = partition(target);

    let mut missing = Vec::new();
    for key in reference.keys().filter(|key| !is_comment_key(key)) {
        match regular.get(key) {
            Some(value) => {
                map.insert(key.clone(), value.clone());
            }
            None => missing.push(key.clone()),
        }
    }

    let dropped: Vec<String> = regular
        .keys()
        .filter(|key| !reference.contains_key(*key))
        .cloned()
        .collect();

    let coverage = Coverage {
        translated: regular.len() - dropped.len(),
        total: reference.len(),
    };

    FormattedLang {
        map,
        coverage,
        dropped,
        missing,
    }
}

/// The progress line printed for every processed locale.
pub fn progress_line(locale: &str, coverage: &Coverage) -> String {
    format!("Translation progress for {}: {}", locale, coverage)
}

/// Outcome of processing one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleReport {
    pub locale: String,
    pub coverage: Coverage,
    pub dropped: Vec<String>,
    pub missing: Vec<String>,
}

/// Load, format, report and persist a single locale.
///
/// The progress line is written before the persister runs, so it still
/// appears for a locale that then fails validation.
pub fn format_locale<W: Write>(
    store: &LangStore,
    reference: &LangMap,
    locale: &str,
    mode: Mode,
    out: &mut W,
) -> LangResult<LocaleReport> {
    let target = store.load(locale)?;
    let formatted = format_map(reference, &target);

    writeln!(out, "{}", progress_line(locale, &formatted.coverage))
        .map_err(|source| LangError::Output { source })?;

    persist(store, locale, &formatted.map, mode)?;

    Ok(LocaleReport {
        locale: locale.to_string(),
        coverage: formatted.coverage,
        dropped: formatted.dropped,
        missing: formatted.missing,
    })
}
