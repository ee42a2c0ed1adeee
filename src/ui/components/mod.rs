//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `InputField` - Labelled text input with focus handling
//! - `OptionSelector` - Horizontal selector for a fixed option list

mod dialog_frame;
mod input_field;
mod option_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use option_selector::{option_line, render_option_selector, OPTION_SELECTOR_HEIGHT};
