//! Input Field Component
//!
//! A labelled single-line text input with focus handling and placeholder.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FIELD_FOCUS};

/// Height of a rendered input field: label (1) + input box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text drawn inside the box, with a block cursor when focused.
    fn display_text(&self) -> (String, Style) {
        let mut style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let mut text = match self.placeholder {
            Some(placeholder) if self.value.is_empty() => {
                style = Style::default().fg(COLOR_DIM);
                placeholder.to_string()
            }
            _ => self.value.to_string(),
        };
        if self.focused {
            if self.value.is_empty() {
                text.clear();
            }
            text.push('\u{2588}');
        }
        (text, style)
    }
}

/// Render an input field with its label. Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.height < INPUT_FIELD_HEIGHT {
        return 0;
    }
    let label_style = if config.focused {
        Style::default().fg(COLOR_FIELD_FOCUS)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        y: area.y + 1,
        height: 3,
        ..area
    };
    let border_color = if config.focused {
        COLOR_FIELD_FOCUS
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let (text, style) = config.display_text();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).block(block),
        input_area,
    );

    INPUT_FIELD_HEIGHT
}
