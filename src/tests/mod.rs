//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive `TuiApp<TestBackend>` through the harness with
//! real fixtures and the real background load path.
