//! Page viewport state
//!
//! Holds the laid out document and where the viewport currently sits in it.
//! Scrolling to an anchor is animated: `scroll_target` is set and every tick
//! moves `scroll_top` part of the way there.

use std::collections::HashSet;

use crate::content::{target_id, Portfolio};
use crate::document::Document;
use crate::state::command_palette::Viewport;

/// Share of the remaining distance covered per animation tick
const SMOOTH_SCROLL_FACTOR: f32 = 0.3;

/// Share of a section that must be on screen before it is revealed
pub const REVEAL_THRESHOLD: f32 = 0.12;

#[derive(Debug, Clone)]
pub struct PageState {
    pub document: Document,
    /// Body width the document was laid out for
    pub width: u16,
    pub viewport_height: u16,
    /// First visible line; fractional while animating
    pub scroll_top: f32,
    /// Destination of an in-flight smooth scroll
    pub scroll_target: Option<f32>,
    /// Ids of sections that have been scrolled into view at least once
    pub revealed: HashSet<String>,
    /// Fragment of the last followed nav link, e.g. `#about`
    pub location: Option<String>,
    /// Year shown in the footer
    pub year: i32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            document: Document::default(),
            width: 0,
            viewport_height: 0,
            scroll_top: 0.0,
            scroll_target: None,
            revealed: HashSet::new(),
            location: None,
            year: 1970,
        }
    }
}

impl PageState {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    /// Re-run the layout, e.g. after a resize or a filter change
    pub fn relayout(&mut self, portfolio: &Portfolio, filter: &str) {
        self.document = Document::layout(portfolio, filter, self.width, self.year);
        self.scroll_top = self.scroll_top.min(self.max_scroll());
        if let Some(target) = self.scroll_target {
            self.scroll_target = Some(target.min(self.max_scroll()));
        }
        self.update_reveals();
    }

    pub fn resize(&mut self, portfolio: &Portfolio, filter: &str, width: u16, height: u16) {
        self.width = width;
        self.viewport_height = height;
        self.relayout(portfolio, filter);
    }

    pub fn content_height(&self) -> usize {
        self.document.height()
    }

    pub fn max_scroll(&self) -> f32 {
        self.content_height()
            .saturating_sub(self.viewport_height as usize) as f32
    }

    /// First visible line as a whole line number
    pub fn top_line(&self) -> usize {
        self.scroll_top.round().max(0.0) as usize
    }

    /// Start a smooth scroll that puts `target` at the top of the viewport
    ///
    /// Returns `false` for targets that are not on the page.
    pub fn scroll_to(&mut self, target: &str) -> bool {
        let Some(anchor) = self.document.anchor(target) else {
            return false;
        };
        let destination = (anchor.line as f32).min(self.max_scroll());
        log::debug!("Smooth scroll to {} (line {})", target, destination);
        self.scroll_target = Some(destination);
        true
    }

    /// Follow an in-page link: scroll there and remember the fragment
    pub fn follow_anchor(&mut self, target: &str) -> bool {
        if !self.scroll_to(target) {
            return false;
        }
        self.location = Some(format!("#{}", target_id(target)));
        true
    }

    /// Jump by `lines`, cancelling any animation
    pub fn scroll_by(&mut self, lines: i32) {
        self.scroll_target = None;
        let next = (self.top_line() as f32 + lines as f32).clamp(0.0, self.max_scroll());
        self.scroll_top = next;
        self.update_reveals();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_target = None;
        self.scroll_top = 0.0;
        self.update_reveals();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_target = None;
        self.scroll_top = self.max_scroll();
        self.update_reveals();
    }

    /// Advance the smooth scroll animation by one tick
    pub fn animate(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let remaining = target - self.scroll_top;
        if remaining.abs() <= 0.5 {
            self.scroll_top = target;
            self.scroll_target = None;
        } else {
            let mut step = remaining * SMOOTH_SCROLL_FACTOR;
            if step.abs() < 1.0 {
                step = remaining.signum();
            }
            self.scroll_top += step;
        }
        self.update_reveals();
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Scroll progress in percent
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / max * 100.0).clamp(0.0, 100.0) as f64
    }

    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.revealed.contains(section_id)
    }

    /// Reveal every section that has enough lines inside the viewport
    ///
    /// Reveals are sticky: once shown a section never hides again.
    pub fn update_reveals(&mut self) {
        let top = self.top_line();
        let bottom = top + self.viewport_height as usize;
        for anchor in &self.document.anchors {
            if !anchor.reveal || anchor.height == 0 || self.revealed.contains(&anchor.id) {
                continue;
            }
            let start = anchor.line.max(top);
            let end = (anchor.line + anchor.height).min(bottom);
            let visible = end.saturating_sub(start);
            if visible as f32 / anchor.height as f32 >= REVEAL_THRESHOLD {
                log::trace!("Revealing section {}", anchor.id);
                self.revealed.insert(anchor.id.clone());
            }
        }
    }
}

impl Viewport for PageState {
    fn scroll_into_view(&mut self, target: &str) -> bool {
        self.scroll_to(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        let long_body = (0..40)
            .map(|i| format!("line{i}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        Portfolio::parse(&format!(
            r#"
            name = "Test"

            [[sections]]
            id = "home"
            title = "Home"
            reveal = false
            body = "welcome"

            [[sections]]
            id = "about"
            title = "About"
            body = """{long_body}"""

            [[sections]]
            id = "contact"
            title = "Contact"
            body = "mail"
            "#
        ))
        .unwrap()
    }

    fn page(height: u16) -> (PageState, Portfolio) {
        let portfolio = portfolio();
        let mut page = PageState::new(2026);
        page.resize(&portfolio, "all", 80, height);
        (page, portfolio)
    }

    fn settle(page: &mut PageState) {
        for _ in 0..200 {
            page.animate();
        }
    }

    #[test]
    fn test_scroll_to_known_target_animates_to_anchor() {
        let (mut page, _) = page(10);
        let line = page.document.anchor("#about").unwrap().line as f32;

        assert!(page.scroll_to("#about"));
        assert!(page.is_animating());
        page.animate();
        assert!(page.scroll_top > 0.0 && page.scroll_top < line);

        settle(&mut page);
        assert!(!page.is_animating());
        assert_eq!(page.scroll_top, line);
    }

    #[test]
    fn test_scroll_to_unknown_target_is_noop() {
        let (mut page, _) = page(10);
        assert!(!page.scroll_to("#nowhere"));
        assert!(!page.is_animating());
        assert_eq!(page.scroll_top, 0.0);
    }

    #[test]
    fn test_scroll_target_is_clamped_to_max_scroll() {
        let (mut page, _) = page(10);
        assert!(page.scroll_to("#contact"));
        settle(&mut page);
        assert_eq!(page.scroll_top, page.max_scroll());
    }

    #[test]
    fn test_follow_anchor_records_location() {
        let (mut page, _) = page(10);
        assert!(page.follow_anchor("about"));
        assert_eq!(page.location.as_deref(), Some("#about"));

        assert!(!page.follow_anchor("#nowhere"));
        assert_eq!(page.location.as_deref(), Some("#about"));
    }

    #[test]
    fn test_manual_scroll_cancels_animation_and_clamps() {
        let (mut page, _) = page(10);
        page.scroll_to("#contact");
        page.scroll_by(3);
        assert!(!page.is_animating());
        assert_eq!(page.scroll_top, 3.0);

        page.scroll_by(-100);
        assert_eq!(page.scroll_top, 0.0);

        page.scroll_by(10_000);
        assert_eq!(page.scroll_top, page.max_scroll());
    }

    #[test]
    fn test_progress() {
        let (mut page, _) = page(10);
        assert_eq!(page.progress(), 0.0);

        page.scroll_to_bottom();
        assert_eq!(page.progress(), 100.0);

        page.scroll_by(-(page.max_scroll() as i32 / 2));
        assert!(page.progress() > 0.0 && page.progress() < 100.0);
    }

    #[test]
    fn test_progress_zero_when_content_fits() {
        let (page, _) = page(500);
        assert_eq!(page.max_scroll(), 0.0);
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn test_reveal_is_sticky_and_respects_flag() {
        let (mut page, _) = page(10);
        // Home opts out of revealing; only a sliver of About is on screen
        assert!(!page.is_revealed("home"));
        assert!(!page.is_revealed("about"));
        assert!(!page.is_revealed("contact"));

        page.scroll_to_bottom();
        assert!(page.is_revealed("contact"));

        page.scroll_to_top();
        assert!(page.is_revealed("contact"));
        assert!(!page.is_revealed("home"));
    }

    #[test]
    fn test_relayout_clamps_scroll() {
        let (mut page, portfolio) = page(10);
        page.scroll_to_bottom();
        page.resize(&portfolio, "all", 80, 500);
        assert_eq!(page.scroll_top, 0.0);
    }
}
