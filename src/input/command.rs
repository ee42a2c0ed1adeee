//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects on the
//! [`App`](crate::app::App).

/// Every user action a key can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Re-fetch the current screen (r)
    Reload,

    // =========================================================================
    // Screen Navigation
    // =========================================================================
    /// Show the dashboard (d)
    NavigateToDashboard,
    /// Show the full list (l)
    NavigateToList,
    /// Leave Detail for the list (Esc, b)
    Back,
    /// Move the highlight up (Up, k)
    MoveUp,
    /// Move the highlight down (Down, j)
    MoveDown,
    /// Open the highlighted learning (Enter)
    OpenSelected,

    // =========================================================================
    // Create Forms
    // =========================================================================
    /// Open the "add learning" form (a)
    OpenAddLearning,
    /// Open the "add applied skill" form on Detail (s)
    OpenAddAppliedSkill,

    // =========================================================================
    // Modal Editing
    // =========================================================================
    /// Type a character into the focused text field
    InsertChar(char),
    /// Delete the last character of the focused text field
    Backspace,
    /// Focus the next field (Tab)
    FocusNextField,
    /// Focus the previous field (Shift+Tab)
    FocusPrevField,
    /// Select the next option of the focused option field (Right)
    NextOption,
    /// Select the previous option of the focused option field (Left)
    PrevOption,
    /// Validate and submit the form (Enter)
    SubmitModal,
    /// Close the form without saving (Esc)
    CancelModal,
}

impl Command {
    /// Short label used in the key hint bar.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Reload => "reload",
            Command::NavigateToDashboard => "dashboard",
            Command::NavigateToList => "list",
            Command::Back => "back",
            Command::MoveUp => "up",
            Command::MoveDown => "down",
            Command::OpenSelected => "open",
            Command::OpenAddLearning => "add learning",
            Command::OpenAddAppliedSkill => "add applied skill",
            Command::InsertChar(_) => "type",
            Command::Backspace => "delete",
            Command::FocusNextField => "next field",
            Command::FocusPrevField => "previous field",
            Command::NextOption | Command::PrevOption => "choose",
            Command::SubmitModal => "save",
            Command::CancelModal => "cancel",
        }
    }

    /// Whether this command edits the open form.
    pub fn is_modal_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::FocusNextField
                | Command::FocusPrevField
                | Command::NextOption
                | Command::PrevOption
                | Command::SubmitModal
                | Command::CancelModal
        )
    }
}
