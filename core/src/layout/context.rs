//! Replay context: which tab is current and which pane has focus.
//!
//! Lives for exactly one replay. Handlers receive it as `&mut` so every
//! mutation of the current tab or focus is visible at the call site.

use crate::layout::geometry::{Pane, Tab};


#[derive(Debug, Default)]
pub struct ReplayContext {
    pub(crate) tabs: Vec<Tab>,
    pub(crate) current_tab: Option<usize>,
    /// Index into the current tab's pane list.
    pub(crate) focused_pane: Option<usize>,
}

impl ReplayContext {
    pub fn new() -> Self {
        ReplayContext::default()
    }

    /// Tabs built so far, in creation order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn current_tab_index(&self) -> Option<usize> {
        self.current_tab
    }

    pub fn focused_pane_index(&self) -> Option<usize> {
        self.focused_pane
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.current_tab.and_then(|i| self.tabs.get(i))
    }

    pub fn focused_pane(&self) -> Option<&Pane> {
        let tab = self.current_tab()?;
        self.focused_pane.and_then(|i| tab.panes.get(i))
    }

    pub(crate) fn current_tab_mut(&mut self) -> Option<&mut Tab> {
        self.current_tab.and_then(|i| self.tabs.get_mut(i))
    }

    /// Consume the context, keeping only the tabs.
    pub fn into_tabs(self) -> Vec<Tab> {
        self.tabs
    }
}
