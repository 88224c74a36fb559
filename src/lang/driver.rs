use std::io::Write;

use tracing::debug;

use super::{
    formatter::{LocaleReport, format_locale},
    loader::LangStore,
    persister::Mode,
};
use crate::error::{LangError, LangResult};

/// Default baseline locale whose key set and order are canonical.
pub const DEFAULT_REFERENCE_LOCALE: &str = "en_us";

/// Result of a complete run over a list of locales.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub mode: Mode,
    /// One report per processed locale, in processing order.
    pub reports: Vec<LocaleReport>,
    /// How many times the reference locale appeared in the input list.
    pub skipped_reference: usize,
}

/// Runs the formatter sequentially over a list of locales.
#[derive(Debug, Clone)]
pub struct Driver {
    store: LangStore,
    reference_locale: String,
    mode: Mode,
}

impl Driver {
    pub fn new(store: LangStore, reference_locale: impl Into<String>, mode: Mode) -> Self {
        Self {
            store,
            reference_locale: reference_locale.into(),
            mode,
        }
    }

    /// Process `locales` in order, writing progress lines to `out`.
    ///
    /// The reference is loaded once up front and every entry equal to the
    /// reference locale is skipped. The first error aborts the run.
    pub fn run<W: Write>(&self, locales: &[String], out: &mut W) -> LangResult<RunSummary> {
        let reference = self.store.load(&self.reference_locale)?;
        if reference.is_empty() {
            return Err(LangError::EmptyReference {
                locale: self.reference_locale.clone(),
            });
        }

        let mut summary = RunSummary {
            mode: self.mode,
            reports: Vec::with_capacity(locales.len()),
            skipped_reference: 0,
        };

        for locale in locales {
            if *locale == self.reference_locale {
                debug!(locale = %locale, "skipping reference locale");
                summary.skipped_reference += 1;
                continue;
            }
            let report = format_locale(&self.store, &reference, locale, self.mode, out)?;
            summary.reports.push(report);
        }

        Ok(summary)
    }
}
