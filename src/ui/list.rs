//! List screen: every learning, pending first.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::layout::LayoutContext;
use super::learning_row::learning_row_line;
use super::theme::{COLOR_APPLIED, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PENDING};
use crate::models::Learning;
use crate::view_state::ListViewModel;

pub const NEEDS_EMPTY: &str = "Nothing needs application.";
pub const APPLIED_EMPTY: &str = "Nothing applied yet.";

fn section_header(title: &str, count: usize, color: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ({})", title, count),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn empty_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("   {}", message),
        Style::default().fg(COLOR_DIM),
    ))
}

/// All lines of the list, with `selected_row` counted across both sections.
pub fn list_lines(view: &ListViewModel, selected_row: usize, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let rows = |items: &[&Learning], offset: usize| -> Vec<Line<'static>> {
        items
            .iter()
            .enumerate()
            .map(|(i, learning)| learning_row_line(learning, offset + i == selected_row, true, ctx))
            .collect()
    };

    let mut lines = vec![section_header("Needs application", view.needs_count, COLOR_PENDING)];
    if view.needs_items.is_empty() {
        lines.push(empty_line(NEEDS_EMPTY));
    } else {
        lines.extend(rows(&view.needs_items, 0));
    }

    lines.push(Line::raw(""));
    lines.push(section_header("Applied", view.applied_count, COLOR_APPLIED));
    if view.applied_items.is_empty() {
        lines.push(empty_line(APPLIED_EMPTY));
    } else {
        lines.extend(rows(&view.applied_items, view.needs_count));
    }
    lines
}

pub fn render_list(
    frame: &mut Frame,
    area: Rect,
    view: &ListViewModel,
    selected_row: usize,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " All learnings ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                format!(" {} items tracked ", view.total()),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );

    let lines = list_lines(view, selected_row, ctx);
    // Keep the selected row visible: section header, then needs rows, then a
    // blank line and the applied header.
    let selected_line = if selected_row < view.needs_count {
        1 + selected_row
    } else {
        let needs_lines = view.needs_count.max(1);
        4 + needs_lines + (selected_row - view.needs_count)
    };
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (selected_line + 1).saturating_sub(visible);

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((scroll.min(u16::MAX as usize) as u16, 0)),
        area,
    );
}
