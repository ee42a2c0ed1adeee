//! One learning as a single selectable line, shared by Dashboard and List.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::helpers::{format_date, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_APPLIED, COLOR_CATEGORY, COLOR_DIM, COLOR_PENDING, COLOR_SELECTED_BG,
};
use crate::models::{Learning, LearningStatus};

/// Badge color for a derived status.
pub fn status_color(status: LearningStatus) -> ratatui::style::Color {
    if status.is_applied() {
        COLOR_APPLIED
    } else {
        COLOR_PENDING
    }
}

/// `▶ topic  category  STATUS  Jan 2`
///
/// The status badge is omitted when `show_status` is false (the dashboard
/// focus list only ever shows pending items). Compact terminals drop the
/// category.
pub fn learning_row_line(
    learning: &Learning,
    selected: bool,
    show_status: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let topic_style = if selected {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            truncate_to_width(&learning.topic, ctx.max_topic_length()),
            topic_style,
        ),
    ];
    if !ctx.is_compact() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            learning.category.clone(),
            Style::default().fg(COLOR_CATEGORY),
        ));
    }
    if show_status {
        let status = learning.status();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.label(),
            Style::default().fg(status_color(status)),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format_date(learning.created_time.as_deref()),
        Style::default().fg(COLOR_DIM),
    ));

    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(COLOR_SELECTED_BG))
    } else {
        line
    }
}
