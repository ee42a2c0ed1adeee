//! The one-line notification above the hint bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_TOAST_ERROR, COLOR_TOAST_INFO};
use crate::state::{Toast, ToastKind};

pub fn toast_line(toast: &Toast) -> Line<'static> {
    let (icon, color) = match toast.kind {
        ToastKind::Info => ("✓", COLOR_TOAST_INFO),
        ToastKind::Error => ("✗", COLOR_TOAST_ERROR),
    };
    Line::from(vec![
        Span::styled(
            format!(" {} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(toast.message.clone(), Style::default().fg(color)),
    ])
}

pub fn render_toast(frame: &mut Frame, area: Rect, toast: Option<&Toast>) {
    if let Some(toast) = toast {
        frame.render_widget(Paragraph::new(toast_line(toast)), area);
    }
}
