//! Title bar and key hint bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::view_state::AppViewState;

/// `skillbridge · Dashboard` with a spinner while anything is loading.
pub fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let mut spans = vec![
        Span::styled(
            " skillbridge",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(COLOR_DIM)),
        Span::styled(view.screen.title(), Style::default().fg(COLOR_ACCENT)),
    ];
    if view.is_loading() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} loading", spinner_frame(view.tick_count)),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints built from the active bindings.
pub fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn render_hint_bar(frame: &mut Frame, area: Rect, view: &AppViewState) {
    frame.render_widget(Paragraph::new(hint_line(&view.hints)), area);
}
