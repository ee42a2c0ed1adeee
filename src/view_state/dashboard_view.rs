//! Dashboard-specific view state
//!
//! Counters and the focus list, computed from the collection snapshot.

use crate::models::Learning;
use crate::stats::{compute_stats, select_focus_items, LearningStats};

/// What the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardViewModel<'a> {
    pub total: usize,
    pub applied: usize,
    pub pending: usize,
    /// Percent applied, 0-100
    pub progress: u8,
    /// Oldest pending learnings, at most three
    pub focus_items: Vec<&'a Learning>,
}

impl<'a> DashboardViewModel<'a> {
    pub fn from_learnings(learnings: &'a [Learning]) -> Self {
        let LearningStats {
            total,
            applied,
            pending,
            progress,
        } = compute_stats(learnings);
        Self {
            total,
            applied,
            pending,
            progress,
            focus_items: select_focus_items(learnings),
        }
    }

    /// Selectable rows (the focus items).
    pub fn row(&self, index: usize) -> Option<&'a Learning> {
        self.focus_items.get(index).copied()
    }

    pub fn row_count(&self) -> usize {
        self.focus_items.len()
    }

    pub fn has_focus_items(&self) -> bool {
        !self.focus_items.is_empty()
    }
}
