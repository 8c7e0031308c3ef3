//! Integration test: the offline source through the public API.
//!
//! Loads the fixtures with `FileSource` on the background worker and
//! commits the outcome into `AppState`, the same path the TUI takes.

use country_browser::model::FetchError;
use country_browser::source::{spawn_load, FileSource, InputSource};
use country_browser::state::{AppState, LoadPhase, QueryState, SearchScope};
use std::time::Duration;

fn load(path: &str, scope: SearchScope) -> AppState {
    let source = InputSource::File(FileSource::new(path).expect("fixture exists"));
    let mut handle = spawn_load(source);
    let outcome = handle
        .wait(Duration::from_secs(5))
        .expect("load finishes");

    let mut state = AppState::new(scope);
    assert!(state.apply_load_outcome(outcome));
    state
}

#[test]
fn countries_fixture_loads_in_file_order() {
    let state = load("tests/fixtures/countries.json", SearchScope::All);

    let catalog = state.catalog().expect("ready");
    assert_eq!(catalog.len(), 20);
    assert_eq!(catalog.items()[0].name(), Some("Afghanistan"));
    assert_eq!(catalog.items()[19].name(), Some("Antarctica"));
    assert_eq!(
        state.region.options(),
        ["Asia", "Europe", "Africa", "Americas", "Oceania", "Polar"]
    );
}

#[test]
fn core_scope_ignores_subregion() {
    let mut all = load("tests/fixtures/countries.json", SearchScope::All);
    let mut core = load("tests/fixtures/countries.json", SearchScope::Core);

    all.set_query(QueryState::new("melanesia"));
    core.set_query(QueryState::new("melanesia"));

    assert_eq!(all.filtered().len(), 1);
    assert!(core.filtered().is_empty());
}

#[test]
fn message_body_becomes_api_error() {
    let source = InputSource::File(
        FileSource::new("tests/fixtures/rate_limited.json").expect("fixture exists"),
    );
    let outcome = spawn_load(source)
        .wait(Duration::from_secs(5))
        .expect("load finishes");

    assert!(matches!(
        outcome,
        Err(FetchError::Api { ref message }) if message == "You have exceeded the rate limit of your plan"
    ));

    let mut state = AppState::new(SearchScope::All);
    state.apply_load_outcome(outcome);
    assert!(matches!(state.phase(), LoadPhase::Failed(_)));
}
