//! Option Selector Component
//!
//! A labelled horizontal selector for a fixed option list. Uses a `▶` marker
//! for the selected item; nothing is marked until the user picks one.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_FIELD_FOCUS};

/// Height of a rendered selector: label (1) + options (1) + gap (1).
pub const OPTION_SELECTOR_HEIGHT: u16 = 3;

/// Build the options line.
pub fn option_line(options: &[String], selected: Option<usize>, focused: bool) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, option) in options.iter().enumerate() {
        if Some(idx) == selected {
            let marker_style = if focused {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            spans.push(Span::styled("▶ ", marker_style));
            spans.push(Span::styled(
                option.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(option.clone(), Style::default().fg(COLOR_DIM)));
        }
        if idx + 1 < options.len() {
            spans.push(Span::raw("  "));
        }
    }

    Line::from(spans)
}

/// Render a selector with its label. Returns the height consumed.
pub fn render_option_selector(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[String],
    selected: Option<usize>,
    focused: bool,
) -> u16 {
    if area.height == 0 {
        return 0;
    }
    let label_style = if focused {
        Style::default().fg(COLOR_FIELD_FOCUS)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let hint = if focused { "  ←/→" } else { "" };
    let lines = vec![
        Line::from(vec![
            Span::styled(label.to_string(), label_style),
            Span::styled(hint, Style::default().fg(COLOR_DIM)),
        ]),
        option_line(options, selected, focused),
    ];
    frame.render_widget(Paragraph::new(lines), area);
    OPTION_SELECTOR_HEIGHT
}
