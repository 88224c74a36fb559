//! langfmt - localization file formatter
//!
//! langfmt is a CLI tool and library that keeps translation files in sync with
//! a reference locale. Every locale file is filtered down to the reference's
//! keys, reordered to match it and rewritten, or, in validate mode, checked
//! to already be in that state. Translation coverage is reported per locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `config`: Configuration file loading and parsing
//! - `error`: Error type shared by the library
//! - `lang`: Loading, formatting and persisting language files

pub mod cli;
pub mod config;
pub mod error;
pub mod lang;

pub use error::{LangError, LangResult};
