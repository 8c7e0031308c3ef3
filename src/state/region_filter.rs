//! Region selector state.
//!
//! Options are "all regions" followed by the distinct regions of the
//! loaded list. Cycling wraps through "all".

/// Selected region option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    options: Vec<String>,
    /// `None` means "all regions".
    selected: Option<usize>,
}

impl RegionFilter {
    /// Selector over the given distinct regions, starting at "all".
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Selector starting at `initial` when it names one of the options.
    ///
    /// Unknown names fall back to "all".
    pub fn with_initial(options: Vec<String>, initial: Option<&str>) -> Self {
        let selected = initial.and_then(|name| options.iter().position(|o| o == name));
        Self { options, selected }
    }

    /// Selectable regions, excluding "all".
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Selected region name, `None` for "all".
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }

    /// Index into `options` of the selection, `None` for "all".
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Filter string for the search pipeline. Empty means no filter.
    pub fn filter_str(&self) -> &str {
        self.selected().unwrap_or("")
    }

    /// Move to the next option: all → first → ... → last → all.
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(idx) if idx + 1 < self.options.len() => Some(idx + 1),
            Some(_) => None,
        };
    }

    /// Move to the previous option: all → last → ... → first → all.
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(self.options.len() - 1),
            Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }

    /// Label for the selector, in the form the browser displays it.
    pub fn label(&self) -> String {
        match self.selected() {
            Some(region) => format!("Filter By {}", region),
            None => "Filter By Region".to_string(),
        }
    }
}
