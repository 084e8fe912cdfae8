//! Page reducer
//!
//! Manual scrolling and in-page links.

use crate::actions::PageAction;
use crate::content::Link;
use crate::state::PageState;

pub fn reduce(mut state: PageState, action: &PageAction, nav_links: &[Link]) -> PageState {
    match action {
        PageAction::ScrollBy(lines) => state.scroll_by(*lines),
        PageAction::ScrollPage { down } => {
            // Keep one line of context
            let lines = state.viewport_height.saturating_sub(1).max(1) as i32;
            state.scroll_by(if *down { lines } else { -lines });
        }
        PageAction::ScrollHalfPage { down } => {
            let lines = (state.viewport_height / 2).max(1) as i32;
            state.scroll_by(if *down { lines } else { -lines });
        }
        PageAction::ScrollToTop => state.scroll_to_top(),
        PageAction::ScrollToBottom => state.scroll_to_bottom(),
        PageAction::FollowLink(index) => match nav_links.get(*index) {
            Some(link) => {
                if !state.follow_anchor(&link.target) {
                    log::debug!("Nav link {} points nowhere: {}", link.label, link.target);
                }
            }
            None => log::debug!("No nav link at index {}", index),
        },
    }

    state
}
