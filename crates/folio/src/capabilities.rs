//! View capabilities
//!
//! Capabilities describe what kind of keyboard input a view wants, so the
//! keyboard middleware can route keys without knowing concrete views.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 0;

        /// View owns a text field; character keys are typed, not looked up
        const TEXT_INPUT = 1 << 1;
    }
}

impl PanelCapabilities {
    /// Whether character keys should go to a text field
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
