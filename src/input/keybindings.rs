//! Default keybindings for the application.
//!
//! Maps key combinations to commands, per screen and for the open form.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ScreenKind;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Label shown in the key hint bar.
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => "shift+tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            other => format!("{:?}", other).to_lowercase(),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("ctrl+{}", key)
        } else {
            key
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active on every screen while no form is open
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per screen
    pub screen: HashMap<ScreenKind, HashMap<KeyCombo, Command>>,
    /// Active while a form is open; unbound printable keys are typed
    pub modal: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            screen: HashMap::new(),
            modal: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_screen_bindings();
        config.setup_modal_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        let global = &mut self.global;
        global.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        global.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reload);
        global.insert(KeyCombo::plain(KeyCode::Char('d')), Command::NavigateToDashboard);
        global.insert(KeyCombo::plain(KeyCode::Char('l')), Command::NavigateToList);
    }

    fn setup_screen_bindings(&mut self) {
        let mut rows = HashMap::new();
        rows.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        rows.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        rows.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        rows.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        rows.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected);
        rows.insert(KeyCombo::plain(KeyCode::Char('a')), Command::OpenAddLearning);

        self.screen.insert(ScreenKind::Dashboard, rows.clone());
        self.screen.insert(ScreenKind::List, rows);

        let mut detail = HashMap::new();
        detail.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        detail.insert(KeyCombo::plain(KeyCode::Char('b')), Command::Back);
        detail.insert(KeyCombo::plain(KeyCode::Char('s')), Command::OpenAddAppliedSkill);
        self.screen.insert(ScreenKind::Detail, detail);
    }

    fn setup_modal_bindings(&mut self) {
        let modal = &mut self.modal;
        modal.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelModal);
        modal.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitModal);
        modal.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNextField);
        modal.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrevField);
        modal.insert(KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT), Command::FocusPrevField);
        modal.insert(KeyCombo::plain(KeyCode::Down), Command::FocusNextField);
        modal.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrevField);
        modal.insert(KeyCombo::plain(KeyCode::Right), Command::NextOption);
        modal.insert(KeyCombo::plain(KeyCode::Left), Command::PrevOption);
        modal.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
    }

    /// Key hints for the bar at the bottom of `screen`, in display order.
    pub fn hints(&self, screen: ScreenKind) -> Vec<(&'static str, &'static str)> {
        let mut hints = match screen {
            ScreenKind::Dashboard | ScreenKind::List => vec![
                ("↑/↓", "move"),
                ("enter", "open"),
                ("a", "add learning"),
            ],
            ScreenKind::Detail => vec![("esc", "back"), ("s", "add applied skill")],
        };
        match screen {
            ScreenKind::Dashboard => hints.push(("l", "list")),
            ScreenKind::List => hints.push(("d", "dashboard")),
            ScreenKind::Detail => {
                hints.push(("l", "list"));
                hints.push(("d", "dashboard"));
            }
        }
        hints.push(("r", "reload"));
        hints.push(("q", "quit"));
        hints
    }

    /// Key hints shown inside an open form.
    pub fn modal_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("tab", "next field"),
            ("←/→", "choose"),
            ("enter", "save"),
            ("esc", "cancel"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_combo_label() {
        assert_eq!(KeyCombo::plain(KeyCode::Char('a')).label(), "a");
        assert_eq!(KeyCombo::ctrl(KeyCode::Char('c')).label(), "ctrl+c");
        assert_eq!(KeyCombo::plain(KeyCode::Enter).label(), "enter");
    }

    #[test]
    fn test_detail_has_no_row_bindings() {
        let config = KeybindingConfig::new();
        let detail = &config.screen[&ScreenKind::Detail];
        assert!(!detail.contains_key(&KeyCombo::plain(KeyCode::Enter)));
        assert_eq!(
            detail.get(&KeyCombo::plain(KeyCode::Char('s'))),
            Some(&Command::OpenAddAppliedSkill)
        );
    }

    #[test]
    fn test_hints_end_with_quit() {
        let config = KeybindingConfig::new();
        for screen in [ScreenKind::Dashboard, ScreenKind::List, ScreenKind::Detail] {
            assert_eq!(config.hints(screen).last(), Some(&("q", "quit")));
        }
    }
}
