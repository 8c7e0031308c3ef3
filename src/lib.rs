//! Country Browser
//!
//! TUI application for browsing, searching and filtering the country list
//! served by countryapi.io.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and pure
//! transitions, `source` does the one-shot fetch, `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
