//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the parts of the application state that
//! change how a key is interpreted: the active screen and whether a form is
//! open.

use crate::state::{Modal, Screen};

/// Screen kind without its payload, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenKind {
    #[default]
    Dashboard,
    List,
    Detail,
}

impl From<&Screen> for ScreenKind {
    fn from(screen: &Screen) -> Self {
        match screen {
            Screen::Dashboard => ScreenKind::Dashboard,
            Screen::List => ScreenKind::List,
            Screen::Detail { .. } => ScreenKind::Detail,
        }
    }
}

/// The type of modal dialog currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// No modal dialog is active
    #[default]
    None,
    AddLearning,
    AddAppliedSkill,
}

impl From<Option<&Modal>> for ModalType {
    fn from(modal: Option<&Modal>) -> Self {
        match modal {
            None => ModalType::None,
            Some(Modal::AddLearning(_)) => ModalType::AddLearning,
            Some(Modal::AddAppliedSkill(_)) => ModalType::AddAppliedSkill,
        }
    }
}

/// Context information for input handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub screen: ScreenKind,
    pub modal: ModalType,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the screen.
    pub fn with_screen(mut self, screen: ScreenKind) -> Self {
        self.screen = screen;
        self
    }

    /// Builder method to set the modal type.
    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_kind_from_screen() {
        assert_eq!(ScreenKind::from(&Screen::List), ScreenKind::List);
        assert_eq!(
            ScreenKind::from(&Screen::Detail {
                learning_id: "1".into()
            }),
            ScreenKind::Detail
        );
    }

    #[test]
    fn test_modal_active() {
        assert!(!InputContext::new().is_modal_active());
        assert!(InputContext::new()
            .with_modal(ModalType::AddLearning)
            .is_modal_active());
    }
}
