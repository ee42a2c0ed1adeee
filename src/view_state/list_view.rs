use crate::models::Learning;
use crate::stats::partition_by_status;

/// The full list, pending first then applied, each in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewModel<'a> {
    pub needs_items: Vec<&'a Learning>,
    pub applied_items: Vec<&'a Learning>,
    pub needs_count: usize,
    pub applied_count: usize,
}

impl<'a> ListViewModel<'a> {
    pub fn from_learnings(learnings: &'a [Learning]) -> Self {
        let partition = partition_by_status(learnings);
        Self {
            needs_count: partition.needs.len(),
            applied_count: partition.applied.len(),
            needs_items: partition.needs,
            applied_items: partition.applied,
        }
    }

    pub fn total(&self) -> usize {
        self.needs_count + self.applied_count
    }

    /// Row `index` counting down through needs, then applied.
    pub fn row(&self, index: usize) -> Option<&'a Learning> {
        if index < self.needs_count {
            self.needs_items.get(index).copied()
        } else {
            self.applied_items.get(index - self.needs_count).copied()
        }
    }

    pub fn row_count(&self) -> usize {
        self.total()
    }
}
