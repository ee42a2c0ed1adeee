//! Application state management
//!
//! State containers owned by [`App`](crate::app::App):
//! - [`navigation`]: which screen is active and what each transition loads
//! - [`toast`]: the one visible notification
//! - [`form`]: the modal create forms

pub mod form;
pub mod navigation;
pub mod toast;

pub use form::{AppliedSkillField, AppliedSkillForm, LearningField, LearningForm, Modal, OptionField};
pub use navigation::{LoadRequest, NavEvent, Screen, TransitionError, ViewStateMachine};
pub use toast::{Toast, ToastKind, ToastState};
