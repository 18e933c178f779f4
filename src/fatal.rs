//! Unrecoverable error escalation
//!
//! Library code never exits the process. [`check`] turns an optional failure
//! into a [`FatalError`] and the binary decides whether to escalate it with
//! [`fatal_if`].

use std::backtrace::Backtrace;
use std::fmt::Display;
use thiserror::Error;
use tracing::error;

/// Exit status used by [`fatal_if`]
pub const FATAL_EXIT_CODE: i32 = 255;

/// A failure the caller considers unrecoverable
#[derive(Error, Debug)]
#[error("Fatal error: {message}")]
pub struct FatalError {
    message: String,
    trace: String,
}

impl FatalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Backtrace::force_capture().to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic report: the error message followed by the captured trace
    pub fn report(&self) -> String {
        format!("Fatal error: {}\n{}", self.message, self.trace)
    }
}

/// Returns an error if a failure is present
pub fn check<E: Display>(err: Option<E>) -> Result<(), FatalError> {
    match err {
        Some(e) => Err(FatalError::new(e.to_string())),
        None => Ok(()),
    }
}

/// Report the failure and exit with [`FATAL_EXIT_CODE`] if one is present
pub fn fatal_if<E: Display>(err: Option<E>) {
    if let Err(fatal) = check(err) {
        eprintln!("{}", fatal.report());
        error!("{}", fatal.message());
        std::process::exit(FATAL_EXIT_CODE);
    }
}
