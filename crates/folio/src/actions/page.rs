//! Page scrolling actions

/// Actions for the page viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// Scroll by a number of lines (negative scrolls up)
    ScrollBy(i32),
    /// Scroll by a page (`true` = down)
    ScrollPage { down: bool },
    /// Scroll by half a page (`true` = down)
    ScrollHalfPage { down: bool },
    ScrollToTop,
    ScrollToBottom,
    /// Follow the nav link with the given index
    FollowLink(usize),
}
