//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are plain methods without I/O, following the Elm
//! architecture: the shell feeds events in, the view reads state out.

use crate::model::{Country, FetchError};
use crate::state::pagination::PageWindow;
use crate::state::query_input_handler::QueryState;
use crate::state::region_filter::RegionFilter;
use crate::state::search::{distinct_regions, execute_search, SearchFields, SearchScope};
use tracing::{debug, info, warn};

/// Result of the one-shot country load.
pub type LoadOutcome = Result<Vec<Country>, FetchError>;

// ===== Catalog =====

/// The loaded country list plus the field list the query runs against.
///
/// Built once when the load succeeds; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Country>,
    fields: SearchFields,
}

impl Catalog {
    /// Build a catalog and resolve its search fields for `scope`.
    pub fn new(items: Vec<Country>, scope: SearchScope) -> Self {
        let fields = SearchFields::for_scope(scope, &items);
        Self { items, fields }
    }

    /// Records in response order.
    pub fn items(&self) -> &[Country] {
        &self.items
    }

    /// Fields the query is matched against.
    pub fn fields(&self) -> &SearchFields {
        &self.fields
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the response held no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ===== LoadPhase =====

/// Which of the three screens is shown.
///
/// Transitions: `Loading → Failed` or `Loading → Ready`, each at most once.
/// Nothing returns to `Loading`.
#[derive(Debug, Clone)]
pub enum LoadPhase {
    /// Fetch in flight.
    Loading,
    /// Fetch failed; message shown instead of the UI.
    Failed(String),
    /// Countries loaded; interactive UI shown.
    Ready(Catalog),
}

// ===== FocusPane =====

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Card grid: keys are dispatched through key bindings.
    #[default]
    Grid,
    /// Search box: printable keys edit the query.
    Search,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Phase**: Loading, Failed or Ready (see [`LoadPhase`])
/// - **Focus**: Grid or Search
/// - **Filters**: query text and region selection, applied on every render
/// - **Window**: pagination prefix length, grows only
#[derive(Debug, Clone)]
pub struct AppState {
    phase: LoadPhase,

    /// Free-text query. Matched case-insensitively.
    pub query: QueryState,

    /// Region selector. Options are filled in when the load succeeds.
    pub region: RegionFilter,

    /// Pagination window over the filtered results.
    pub window: PageWindow,

    /// Which widget has keyboard focus.
    pub focus: FocusPane,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// First card row shown in the grid.
    pub grid_scroll: usize,

    search_scope: SearchScope,
    initial_region: Option<String>,
}

impl AppState {
    /// Fresh state in the Loading phase.
    pub fn new(search_scope: SearchScope) -> Self {
        Self {
            phase: LoadPhase::Loading,
            query: QueryState::default(),
            region: RegionFilter::default(),
            window: PageWindow::new(),
            focus: FocusPane::Grid,
            help_visible: false,
            grid_scroll: 0,
            search_scope,
            initial_region: None,
        }
    }

    /// Start with a pre-filled query (e.g. from `--search`).
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.query = QueryState::new(query);
        self
    }

    /// Region to select once options are known (e.g. from `--region`).
    pub fn with_initial_region(mut self, region: impl Into<String>) -> Self {
        self.initial_region = Some(region.into());
        self
    }

    /// Current load phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Still waiting for the load outcome.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// The list loaded and the browser is interactive.
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready(_))
    }

    /// Error message when in the Failed phase.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded records, once ready.
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.phase {
            LoadPhase::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Commit the load outcome.
    ///
    /// Only accepted while Loading. Returns `false` (and changes nothing)
    /// when an outcome arrives in any other phase.
    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome) -> bool {
        if !self.is_loading() {
            warn!("Ignoring load outcome: loading already finished");
            return false;
        }

        match outcome {
            Ok(items) => {
                info!(count = items.len(), "Countries loaded");
                let regions = distinct_regions(&items);
                self.region =
                    RegionFilter::with_initial(regions, self.initial_region.as_deref());
                self.phase = LoadPhase::Ready(Catalog::new(items, self.search_scope));
            }
            Err(err) => {
                warn!(error = %err, "Country load failed");
                self.phase = LoadPhase::Failed(err.display_message());
            }
        }
        true
    }

    /// Items passing the current query and region filter, in list order.
    ///
    /// Re-evaluated on every call. Empty unless Ready.
    pub fn filtered(&self) -> Vec<&Country> {
        match self.catalog() {
            Some(catalog) => execute_search(
                catalog.items(),
                catalog.fields(),
                self.query.as_str(),
                self.region.filter_str(),
            ),
            None => Vec::new(),
        }
    }

    /// Filtered items truncated to the pagination window.
    pub fn visible(&self) -> Vec<&Country> {
        let filtered = self.filtered();
        self.window.apply(&filtered).to_vec()
    }

    /// Grow the pagination window.
    pub fn load_more(&mut self) {
        self.window.load_more();
        debug!(page_size = self.window.size(), "Load more");
    }

    /// Replace the query. The pagination window is kept as is.
    pub fn set_query(&mut self, query: QueryState) {
        if query != self.query {
            self.grid_scroll = 0;
        }
        self.query = query;
    }

    /// Select the next region option. The pagination window is kept as is.
    pub fn next_region(&mut self) {
        self.region.next();
        self.grid_scroll = 0;
        debug!(region = self.region.filter_str(), "Region filter changed");
    }

    /// Select the previous region option. The pagination window is kept as is.
    pub fn prev_region(&mut self) {
        self.region.prev();
        self.grid_scroll = 0;
        debug!(region = self.region.filter_str(), "Region filter changed");
    }

    /// Move keyboard focus to the search box.
    pub fn focus_search(&mut self) {
        self.focus = FocusPane::Search;
    }

    /// Move keyboard focus back to the card grid.
    pub fn focus_grid(&mut self) {
        self.focus = FocusPane::Grid;
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
