//! CLI output utilities for the plain-text commands.
//!
//! Headers, rules and aligned fields used when printing outside the TUI.

mod boxes;

pub use boxes::*;
