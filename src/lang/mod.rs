//! Language file synchronization.
//!
//! - `map`: ordered language maps and comment keys
//! - `loader`: locale identifier to file resolution and parsing
//! - `formatter`: filtering/reordering against the reference and coverage
//! - `persister`: write or validate the formatted result
//! - `driver`: sequential run over a list of locales

pub mod driver;
pub mod formatter;
pub mod loader;
pub mod map;
pub mod persister;

pub use driver::{DEFAULT_REFERENCE_LOCALE, Driver, RunSummary};
pub use formatter::{Coverage, FormattedLang, LocaleReport, format_map, progress_line};
pub use loader::LangStore;
pub use map::{COMMENT_MARKER, LangMap, is_comment_key};
pub use persister::Mode;
