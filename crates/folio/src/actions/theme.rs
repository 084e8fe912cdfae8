//! Theme actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// auto -> dark -> light -> auto
    Cycle,
}
