//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware
//! chain, it uses the Dispatcher. Dispatched actions are queued and only run once
//! the action currently being processed has been fully reduced.
//!
//! This enables patterns like:
//! - a raw key press is translated into `CommandPalette::Toggle`
//! - `CommandPalette::Toggle` opening the palette queues `CommandPalette::FocusInput`

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::actions::Action;

/// Queue of actions waiting to run through the middleware chain
#[derive(Debug, Default)]
pub struct Dispatcher {
    pending: RefCell<VecDeque<Action>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        self.pending.borrow_mut().push_back(action);
    }

    /// Take all queued actions, oldest first
    pub fn drain(&self) -> Vec<Action> {
        self.pending.borrow_mut().drain(..).collect()
    }
}
