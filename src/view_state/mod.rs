//! View state module for decoupling UI rendering from application state.
//!
//! The view-models here are derived on demand from what [`App`](crate::app::App)
//! owns and borrow from it. UI code renders them without touching `App`.
//!
//! ```text
//! App (owns snapshot) --view_state()--> AppViewState (borrows) --> ui::render
//! ```
//!
//! ## Components
//!
//! - [`AppViewState`]: everything one frame needs
//! - [`DashboardViewModel`]: counters, progress and focus items
//! - [`ListViewModel`]: the collection split by status
//! - [`DetailViewModel`]: the selected learning and its applied skills

mod app_view;
mod dashboard_view;
mod detail_view;
mod list_view;

pub use app_view::{AppViewState, ScreenView};
pub use dashboard_view::DashboardViewModel;
pub use detail_view::DetailViewModel;
pub use list_view::ListViewModel;
