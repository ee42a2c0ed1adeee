//! Command registry for dispatching keyboard input to commands.
//!
//! The [`CommandRegistry`] maps key events to commands based on the current
//! [`InputContext`]:
//! 1. Ctrl+C always quits
//! 2. An open form takes every other key
//! 3. Screen bindings, then global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if context.is_modal_active() {
            return self.dispatch_modal(key);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        self.config
            .screen
            .get(&context.screen)
            .and_then(|bindings| bindings.get(&combo))
            .or_else(|| self.config.global.get(&combo))
            .cloned()
    }

    fn dispatch_modal(&self, key: KeyEvent) -> Option<Command> {
        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(cmd) = self.config.modal.get(&combo) {
            return Some(cmd.clone());
        }
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}
