//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then runs the previous
/// hook so the panic message is still printed.
///
/// Call before creating the `TerminalManager`. `color_eyre::install()` must
/// run first, since it replaces the hook.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
