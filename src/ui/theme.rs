//! Color theme constants for the skillbridge UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Progress gauge fill
pub const COLOR_PROGRESS: Color = Color::White;

// ============================================================================
// Status Colors
// ============================================================================

/// Applied learnings
pub const COLOR_APPLIED: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Pending learnings
pub const COLOR_PENDING: Color = Color::Rgb(255, 176, 0); // amber

/// Category badges
pub const COLOR_CATEGORY: Color = Color::Rgb(0, 122, 204); // blue #007ACC

// ============================================================================
// Dialog / Toast Colors
// ============================================================================

/// Background color for modal forms
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Focused form field
pub const COLOR_FIELD_FOCUS: Color = Color::Cyan;

/// Selected row highlight
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 60);

pub const COLOR_TOAST_INFO: Color = Color::Rgb(4, 181, 117);

pub const COLOR_TOAST_ERROR: Color = Color::Red;
