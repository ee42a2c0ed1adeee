//! Dashboard screen: stat tiles, progress gauge and the focus list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use super::layout::LayoutContext;
use super::learning_row::learning_row_line;
use super::theme::{
    COLOR_ACCENT, COLOR_APPLIED, COLOR_BORDER, COLOR_DIM, COLOR_PENDING, COLOR_PROGRESS,
};
use crate::view_state::DashboardViewModel;

pub const FOCUS_EMPTY: &str = "Nothing pending. Every learning has been applied.";
pub const NO_LEARNINGS: &str = "No learnings yet. Press a to add one.";

pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardViewModel,
    selected_row: usize,
    ctx: &LayoutContext,
) {
    let [tiles_area, gauge_area, focus_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(area);

    render_tiles(frame, tiles_area, view);
    render_gauge(frame, gauge_area, view.progress);
    render_focus(frame, focus_area, view, selected_row, ctx);
}

fn tile<'a>(label: &'a str, value: String, color: ratatui::style::Color) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(label, Style::default().fg(COLOR_DIM)));
    Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(block)
}

fn render_tiles(frame: &mut Frame, area: Rect, view: &DashboardViewModel) {
    let [total, applied, pending, progress] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);
    frame.render_widget(tile("Total", view.total.to_string(), COLOR_ACCENT), total);
    frame.render_widget(tile("Applied", view.applied.to_string(), COLOR_APPLIED), applied);
    frame.render_widget(tile("Pending", view.pending.to_string(), COLOR_PENDING), pending);
    frame.render_widget(
        tile("Progress", format!("{}%", view.progress), COLOR_PROGRESS),
        progress,
    );
}

fn render_gauge(frame: &mut Frame, area: Rect, progress: u8) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .gauge_style(Style::default().fg(COLOR_APPLIED))
        .percent(u16::from(progress.min(100)))
        .label(format!("{}% applied", progress));
    frame.render_widget(gauge, area);
}

fn render_focus(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardViewModel,
    selected_row: usize,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Focus ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                format!(" {} pending ", view.pending),
                Style::default().fg(COLOR_PENDING),
            ))
            .right_aligned(),
        );

    let lines: Vec<Line> = if view.has_focus_items() {
        view.focus_items
            .iter()
            .enumerate()
            .map(|(i, learning)| learning_row_line(learning, i == selected_row, false, ctx))
            .collect()
    } else {
        let message = if view.total == 0 { NO_LEARNINGS } else { FOCUS_EMPTY };
        vec![Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(COLOR_DIM),
        ))]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
