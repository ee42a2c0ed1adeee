//! View state construction for UI rendering.
//!
//! This module provides the `view_state()` method on App that constructs
//! an `AppViewState` containing all data needed for UI rendering.

use super::App;
use crate::input::ScreenKind;
use crate::view_state::{AppViewState, ScreenView};

impl App {
    /// Create a view state for UI rendering.
    ///
    /// Everything is borrowed from the app, so building one per frame is
    /// cheap. The UI imports the view state, never the App itself.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let view = app.view_state();
    /// ui::render(frame, &view);
    /// ```
    pub fn view_state(&self) -> AppViewState<'_> {
        let screen = self.nav.screen();
        let view = ScreenView::build(screen, &self.learnings, self.detail.as_ref());
        let hints = match self.modal {
            Some(_) => self.command_registry.config().modal_hints(),
            None => self.command_registry.config().hints(ScreenKind::from(screen)),
        };

        AppViewState {
            screen,
            view,
            selected_row: self.selected_row,
            pending_loads: self.in_flight,
            toast: self.toasts.current(),
            modal: self.modal.as_ref(),
            hints,
            tick_count: self.tick_count,
        }
    }
}
