//! UI rendering for skillbridge
//!
//! Renders one [`AppViewState`] per frame:
//! - Header with the screen title and a loading spinner
//! - Body: Dashboard, List or Detail
//! - Toast line and key hints at the bottom
//! - The open modal form, drawn over everything
//!
//! Rendering never touches the App; it only reads the view state, so every
//! screen can be drawn into a `TestBackend` in tests.

mod components;
mod dashboard;
mod detail;
mod header;
mod helpers;
mod layout;
mod learning_row;
mod list;
mod modal;
mod theme;
mod toast;

pub use helpers::{format_date, truncate_to_width, PLACEHOLDER};
pub use layout::{breakpoints, LayoutContext};
pub use theme::{
    COLOR_ACCENT, COLOR_APPLIED, COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_HEADER,
    COLOR_PENDING, COLOR_PROGRESS,
};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::view_state::{AppViewState, ScreenView};
use dashboard::render_dashboard;
use detail::render_detail;
use header::{render_header, render_hint_bar};
use list::render_list;
use modal::render_modal;
use toast::render_toast;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, view: &AppViewState) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header_area, body_area, toast_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, view);
    match &view.view {
        ScreenView::Dashboard(dashboard) => {
            render_dashboard(frame, body_area, dashboard, view.selected_row, &ctx)
        }
        ScreenView::List(list) => render_list(frame, body_area, list, view.selected_row, &ctx),
        ScreenView::Detail(detail) => render_detail(frame, body_area, detail, view.is_loading()),
    }
    render_toast(frame, toast_area, view.toast);
    render_hint_bar(frame, hint_area, view);

    if let Some(modal) = view.modal {
        render_modal(frame, area, modal, &ctx);
    }
}
