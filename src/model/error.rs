//! Error types for the country browser.
//!
//! Errors are grouped per concern using `thiserror` and compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - Offline JSON file could not be read
//!   - [`FetchError`] - The country list could not be loaded
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! A [`FetchError`] is **terminal for the session** but not for the process:
//! the UI switches to the error screen and shows [`FetchError::display_message`]
//! until the user quits. There is no retry path.
//!
//! Input and terminal errors raised before the event loop starts are fatal
//! and propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to open the offline input file.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to load the country list.
    #[error("Failed to load countries: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when opening a local JSON file source.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file passed with `--file` does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use country_browser::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O error while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons the country list could not be loaded.
///
/// The three variants mirror how a failed load is reported to the user:
///
/// - **Api**: the service answered with a `message` field. Shown verbatim.
/// - **Transport**: the request never produced a usable response (connect,
///   TLS, timeout, non-success status, unreadable body).
/// - **Decode**: a response arrived but it was not JSON, or not a shape that
///   can be flattened into country records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// API-reported error (`{"message": "..."}`).
    ///
    /// # Examples
    ///
    /// ```
    /// use country_browser::model::error::FetchError;
    ///
    /// let err = FetchError::Api { message: "rate limited".to_string() };
    /// assert_eq!(err.display_message(), "rate limited");
    /// ```
    #[error("API error: {message}")]
    Api {
        /// Message text as sent by the API.
        message: String,
    },

    /// Network or HTTP-level failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Body was not JSON or had an unusable top-level shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text shown on the error screen.
    ///
    /// API messages are surfaced verbatim; other variants use their
    /// `Display` form so the user sees what kind of failure occurred.
    pub fn display_message(&self) -> String {
        match self {
            FetchError::Api { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<InputError> for FetchError {
    fn from(err: InputError) -> Self {
        FetchError::Transport(err.to_string())
    }
}
