//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod pagination;
pub mod query_input_handler;
pub mod region_filter;
pub mod scroll_handler;
pub mod search;

// Re-export for convenience
pub use app_state::{AppState, Catalog, FocusPane, LoadOutcome, LoadPhase};
pub use pagination::{PageWindow, INITIAL_PAGE_SIZE, PAGE_INCREMENT};
pub use query_input_handler::QueryState;
pub use region_filter::RegionFilter;
pub use scroll_handler::{handle_scroll_action, GridViewport};
pub use search::{distinct_regions, execute_search, SearchFields, SearchScope};
