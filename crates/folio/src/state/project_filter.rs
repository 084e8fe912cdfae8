//! Project filter state

use crate::content::FILTER_ALL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilterState {
    /// Filter buttons, `all` first
    pub filters: Vec<String>,
    /// Index of the active button
    pub active: usize,
}

impl Default for ProjectFilterState {
    fn default() -> Self {
        Self::new(vec![FILTER_ALL.to_string()])
    }
}

impl ProjectFilterState {
    pub fn new(filters: Vec<String>) -> Self {
        Self { filters, active: 0 }
    }

    /// The active filter name
    pub fn active_filter(&self) -> &str {
        self.filters
            .get(self.active)
            .map(String::as_str)
            .unwrap_or(FILTER_ALL)
    }
}
