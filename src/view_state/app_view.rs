//! Main view state struct for UI rendering
//!
//! [`AppViewState`] is built once per frame by `App::view_state()` and holds
//! everything the renderer needs, borrowed from the app.

use crate::models::{Learning, LearningDetail};
use crate::state::{Modal, Screen, Toast};

use super::{DashboardViewModel, DetailViewModel, ListViewModel};

/// View-model of the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView<'a> {
    Dashboard(DashboardViewModel<'a>),
    List(ListViewModel<'a>),
    Detail(DetailViewModel<'a>),
}

impl<'a> ScreenView<'a> {
    pub fn build(
        screen: &Screen,
        learnings: &'a [Learning],
        detail: Option<&'a LearningDetail>,
    ) -> Self {
        match screen {
            Screen::Dashboard => ScreenView::Dashboard(DashboardViewModel::from_learnings(learnings)),
            Screen::List => ScreenView::List(ListViewModel::from_learnings(learnings)),
            Screen::Detail { learning_id } => {
                ScreenView::Detail(DetailViewModel::new(learning_id, detail))
            }
        }
    }

    /// The learning at a selectable row; detail has none.
    pub fn row(&self, index: usize) -> Option<&'a Learning> {
        match self {
            ScreenView::Dashboard(view) => view.row(index),
            ScreenView::List(view) => view.row(index),
            ScreenView::Detail(_) => None,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            ScreenView::Dashboard(view) => view.row_count(),
            ScreenView::List(view) => view.row_count(),
            ScreenView::Detail(_) => 0,
        }
    }
}

/// Complete view state for one frame.
#[derive(Debug, Clone)]
pub struct AppViewState<'a> {
    /// Active screen
    pub screen: &'a Screen,
    /// Its view-model
    pub view: ScreenView<'a>,
    /// Highlighted row on Dashboard / List
    pub selected_row: usize,
    /// Number of fetches still outstanding
    pub pending_loads: usize,
    pub toast: Option<&'a Toast>,
    pub modal: Option<&'a Modal>,
    /// (key, action) pairs for the hint bar
    pub hints: Vec<(&'static str, &'static str)>,
    /// Drives the loading spinner
    pub tick_count: u64,
}

impl AppViewState<'_> {
    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }
}
