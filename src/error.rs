use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, formatting or persisting language files.
///
/// Every variant is fatal: the driver stops at the first one.
#[derive(Error, Debug)]
pub enum LangError {
    /// The file is missing, unreadable or could not be written.
    #[error("Failed to access language file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON.
    #[error("Failed to parse language file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The formatted map could not be serialized.
    #[error("Failed to serialize language file {}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A progress line could not be written.
    #[error("Failed to write progress output")]
    Output {
        #[source]
        source: std::io::Error,
    },
    /// The JSON root is something other than an object.
    #[error("Root of language file must be an object: {}", .path.display())]
    NotAnObject { path: PathBuf },
    /// Coverage is undefined against an empty reference.
    #[error("Reference locale '{locale}' has no entries")]
    EmptyReference { locale: String },
    /// Validate mode found a file that is not in its formatted state.
    #[error("Validation error in mod localization for {locale}")]
    ValidationMismatch { locale: String },
}

impl LangError {
    pub fn is_validation_mismatch(&self) -> bool {
        matches!(self, LangError::ValidationMismatch { .. })
    }
}

pub type LangResult<T> = Result<T, LangError>;
