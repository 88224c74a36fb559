use std::process::ExitCode;

use crate::error::LangError;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): A language file is not in its formatted state
/// - `Error` (2): Command failed due to internal error (I/O, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Validation found a language file that needs formatting.
    Failure,
    /// Command failed due to internal error (I/O, parse error, config error, etc.).
    Error,
}

impl ExitStatus {
    /// Pick the exit status for an error that aborted the run.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LangError>() {
            Some(lang_err) if lang_err.is_validation_mismatch() => ExitStatus::Failure,
            _ => ExitStatus::Error,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
