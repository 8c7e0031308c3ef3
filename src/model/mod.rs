//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod country;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use country::{value_text, Country};
pub use error::{AppError, FetchError, InputError};
pub use key_action::KeyAction;
