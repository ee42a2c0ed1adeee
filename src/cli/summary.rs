//! `--summary`: print the dashboard once, without the TUI.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::cli_output::{format_field, format_footer, format_header, format_line, format_section, icons};
use crate::gateway::LearningGateway;
use crate::models::Learning;
use crate::ui::format_date;
use crate::view_state::DashboardViewModel;

/// Render the dashboard statistics and focus items as plain text.
pub fn render_summary(learnings: &[Learning]) -> String {
    let view = DashboardViewModel::from_learnings(learnings);
    let mut out = format_header("SKILLBRIDGE SUMMARY");

    out.push_str(&format_field("Total", &view.total.to_string()));
    out.push_str(&format_field("Applied", &view.applied.to_string()));
    out.push_str(&format_field("Pending", &view.pending.to_string()));
    out.push_str(&format_field("Progress", &format!("{}%", view.progress)));
    out.push('\n');

    out.push_str(&format_section(&format!("FOCUS ({} pending)", view.pending)));
    if view.total == 0 {
        out.push_str(&format_line(icons::PENDING, "No learnings yet."));
    } else if view.focus_items.is_empty() {
        out.push_str(&format_line(icons::SUCCESS, "Nothing pending. Every learning has been applied."));
    } else {
        for learning in &view.focus_items {
            let line = format!(
                "{} [{}] {}",
                learning.topic,
                learning.category,
                format_date(learning.created_time.as_deref())
            );
            out.push_str(&format_line(icons::PENDING, &line));
        }
    }
    out.push_str(&format_footer());
    out
}

/// Fetch the collection and print the summary.
///
/// On failure nothing is printed; the returned error carries the
/// user-facing message for the caller to report.
pub async fn handle_summary_command(gateway: &dyn LearningGateway) -> Result<()> {
    match gateway.list_learnings().await {
        Ok(learnings) => {
            tracing::info!("Summary over {} learnings", learnings.len());
            crate::cli_output::print_block(&render_summary(&learnings));
            Ok(())
        }
        Err(err) => {
            tracing::warn!(category = %err.category(), "Summary fetch failed: {}", err);
            Err(eyre!(err.user_message("Failed to load learnings.")))
        }
    }
}
