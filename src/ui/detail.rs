//! Detail screen: one learning and its applied skills.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::helpers::{format_date, PLACEHOLDER};
use super::learning_row::status_color;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_HEADER};
use crate::models::AppliedSkill;
use crate::view_state::DetailViewModel;

pub const NO_APPLIED_SKILLS: &str = "No applied skills yet. Press s to record one.";
pub const DETAIL_UNAVAILABLE: &str = "This learning could not be loaded. Press r to retry.";

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(COLOR_DIM))
}

fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn skill_lines(skill: &AppliedSkill) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("  ● ", Style::default().fg(COLOR_CATEGORY)),
            Span::styled(
                skill.kind.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            dim(format_date(skill.created_time.as_deref())),
        ]),
        Line::from(vec![
            dim("    Action: "),
            Span::raw(or_placeholder(skill.applied_action.as_deref())),
        ]),
        Line::from(vec![
            dim("    Notes:  "),
            Span::raw(or_placeholder(skill.notes.as_deref())),
        ]),
    ]
}

/// Lines of the detail body; `loading` picks the placeholder for a missing
/// snapshot.
pub fn detail_lines(view: &DetailViewModel, loading: bool) -> Vec<Line<'static>> {
    let Some(learning) = view.learning else {
        let message = if loading { "Loading…" } else { DETAIL_UNAVAILABLE };
        return vec![Line::from(dim(format!(" {}", message)))];
    };

    let status = learning.status();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", learning.topic),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(learning.category.clone(), Style::default().fg(COLOR_CATEGORY)),
            dim("  ·  "),
            Span::styled(status.label(), Style::default().fg(status_color(status))),
        ]),
        Line::from(dim(format!(
            " Started {}",
            format_date(learning.created_time.as_deref())
        ))),
        Line::from(dim(format!(
            " Source: {}",
            or_placeholder(learning.source.as_deref())
        ))),
        Line::raw(""),
        Line::from(Span::styled(
            format!(" Applied skills ({})", view.applied_skills.len()),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if view.applied_skills.is_empty() {
        lines.push(Line::from(dim(format!("   {}", NO_APPLIED_SKILLS))));
    } else {
        for (i, skill) in view.applied_skills.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            lines.extend(skill_lines(skill));
        }
    }
    lines
}

pub fn render_detail(frame: &mut Frame, area: Rect, view: &DetailViewModel, loading: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    frame.render_widget(
        Paragraph::new(detail_lines(view, loading))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
