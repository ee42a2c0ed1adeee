//! Navigation methods for the App.

use std::sync::Arc;

use super::{App, AppMessage};
use crate::state::{LoadRequest, NavEvent, TransitionError};

impl App {
    /// Feed `event` to the state machine and start the load it requires.
    ///
    /// The screen changes before the load starts, so a failed fetch never
    /// blocks navigation. Rejected events change nothing.
    pub fn dispatch(&mut self, event: NavEvent) -> Result<(), TransitionError> {
        let before = self.nav.screen().clone();
        let load = match self.nav.apply(event) {
            Ok(load) => load,
            Err(e) => {
                tracing::debug!("Ignored navigation: {}", e);
                return Err(e);
            }
        };
        if *self.nav.screen() != before {
            self.selected_row = 0;
        }
        self.mark_dirty();
        self.start_load(load);
        Ok(())
    }

    /// Spawn the fetch for `load`. The result arrives as an [`AppMessage`].
    pub fn start_load(&mut self, load: LoadRequest) {
        let gateway = Arc::clone(&self.gateway);
        let message_tx = self.message_tx.clone();
        self.in_flight += 1;

        match load {
            LoadRequest::AllLearnings => {
                tokio::spawn(async move {
                    let msg = match gateway.list_learnings().await {
                        Ok(learnings) => AppMessage::LearningsLoaded(learnings),
                        Err(error) => AppMessage::LearningsLoadFailed(error),
                    };
                    let _ = message_tx.send(msg);
                });
            }
            LoadRequest::LearningDetail(learning_id) => {
                tokio::spawn(async move {
                    let msg = match gateway.get_learning(&learning_id).await {
                        Ok(detail) => AppMessage::DetailLoaded(detail),
                        Err(error) => AppMessage::DetailLoadFailed { learning_id, error },
                    };
                    let _ = message_tx.send(msg);
                });
            }
        }
    }

    pub fn navigate_to_list(&mut self) {
        let _ = self.dispatch(NavEvent::NavigateToList);
    }

    pub fn navigate_to_dashboard(&mut self) {
        let _ = self.dispatch(NavEvent::NavigateToDashboard);
    }

    pub fn open_detail(&mut self, learning_id: impl Into<String>) {
        let _ = self.dispatch(NavEvent::OpenDetail(learning_id.into()));
    }

    /// Leave Detail for the list. No-op elsewhere.
    pub fn back(&mut self) {
        if self.screen().is_detail() {
            let _ = self.dispatch(NavEvent::Back);
        }
    }

    /// Open the highlighted row on Dashboard / List.
    pub fn open_selected(&mut self) {
        let id = self
            .view_state()
            .view
            .row(self.selected_row)
            .map(|learning| learning.id.clone());
        if let Some(id) = id {
            self.open_detail(id);
        }
    }

    /// Re-fetch whatever the current screen shows.
    pub fn reload(&mut self) {
        let load = self.nav.reload();
        self.start_load(load);
        self.mark_dirty();
    }

    pub fn move_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.mark_dirty();
        }
    }

    pub fn move_down(&mut self) {
        let rows = self.row_count();
        if rows > 0 && self.selected_row < rows - 1 {
            self.selected_row += 1;
            self.mark_dirty();
        }
    }

    /// Keep the highlight on an existing row after the snapshot changes.
    pub(super) fn clamp_selection(&mut self) {
        let rows = self.row_count();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
    }

    fn row_count(&self) -> usize {
        self.view_state().view.row_count()
    }
}
