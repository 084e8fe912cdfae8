//! Project filter actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilterAction {
    /// Activate the next filter button (wraps)
    Next,
    /// Activate the previous filter button (wraps)
    Previous,
    /// Activate the filter button at the given index
    Select(usize),
}
