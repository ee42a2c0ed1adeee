//! Aggregates and prioritized subsets over a learning collection.
//!
//! Every function here is pure: it borrows the collection, never mutates it,
//! and returns references into it. The dashboard and list view-models are
//! assembled from these results.

use crate::models::Learning;

/// Maximum number of focus items surfaced on the dashboard.
pub const FOCUS_LIMIT: usize = 3;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LearningStats {
    pub total: usize,
    pub applied: usize,
    pub pending: usize,
    /// Applied share of the collection, 0-100
    pub progress: u8,
}

/// Collection split by status, each side in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPartition<'a> {
    pub needs: Vec<&'a Learning>,
    pub applied: Vec<&'a Learning>,
}

/// Count learnings and compute the applied percentage.
///
/// `progress` is `applied / total * 100` rounded half-up, and `0` for an
/// empty collection.
pub fn compute_stats(learnings: &[Learning]) -> LearningStats {
    let total = learnings.len();
    let applied = learnings.iter().filter(|l| !l.is_pending()).count();
    LearningStats {
        total,
        applied,
        pending: total - applied,
        progress: progress_percent(applied, total),
    }
}

/// Half-up rounding in integers: `floor((200a + t) / 2t)`.
fn progress_percent(applied: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (applied * 200 + total) / (2 * total);
    percent.min(100) as u8
}

/// The oldest pending learnings, at most [`FOCUS_LIMIT`].
///
/// Sorted ascending by `created_time` with a missing timestamp first; equal
/// timestamps keep their collection order.
pub fn select_focus_items(learnings: &[Learning]) -> Vec<&Learning> {
    let mut pending: Vec<&Learning> = learnings.iter().filter(|l| l.is_pending()).collect();
    // sort_by is stable
    pending.sort_by(|a, b| a.created_sort_key().cmp(b.created_sort_key()));
    pending.truncate(FOCUS_LIMIT);
    pending
}

/// Split into pending (`needs`) and applied learnings without reordering.
pub fn partition_by_status(learnings: &[Learning]) -> StatusPartition<'_> {
    let (needs, applied) = learnings.iter().partition(|l| l.is_pending());
    StatusPartition { needs, applied }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learning(id: &str, applied_count: u32, created: Option<&str>) -> Learning {
        let learning = Learning::new(id, format!("Topic {}", id), "Programming")
            .with_applied_count(applied_count);
        match created {
            Some(created) => learning.with_created_time(created),
            None => learning,
        }
    }

    fn ids(items: &[&Learning]) -> Vec<String> {
        items.iter().map(|l| l.id.clone()).collect()
    }

    /// A spread of shapes used by the property checks below.
    fn sample_collections() -> Vec<Vec<Learning>> {
        let mut collections = vec![Vec::new()];
        for size in 1..=9u32 {
            let collection = (0..size)
                .map(|i| {
                    let created = match i % 4 {
                        0 => None,
                        1 => Some(format!("2024-0{}-01", 9 - (i % 9).min(8))),
                        2 => Some("2024-03-15".to_string()),
                        _ => Some(format!("2023-12-{:02}", 10 + i)),
                    };
                    learning(&i.to_string(), (i * size) % 3, created.as_deref())
                })
                .collect();
            collections.push(collection);
        }
        collections
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(
            compute_stats(&[]),
            LearningStats {
                total: 0,
                applied: 0,
                pending: 0,
                progress: 0
            }
        );
        assert!(select_focus_items(&[]).is_empty());
        let partition = partition_by_status(&[]);
        assert!(partition.needs.is_empty());
        assert!(partition.applied.is_empty());
    }

    #[test]
    fn test_mixed_collection() {
        let learnings = vec![
            learning("a", 0, Some("2024-01-02")),
            learning("b", 2, Some("2024-01-01")),
            learning("c", 0, Some("2024-01-01")),
        ];

        let stats = compute_stats(&learnings);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.progress, 33);

        assert_eq!(ids(&select_focus_items(&learnings)), vec!["c", "a"]);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        // 1/8 = 12.5%
        let mut learnings: Vec<Learning> = (0..8).map(|i| learning(&i.to_string(), 0, None)).collect();
        learnings[0].applied_count = 1;
        assert_eq!(compute_stats(&learnings).progress, 13);

        // 2/3 = 66.67%
        let learnings = vec![learning("a", 1, None), learning("b", 1, None), learning("c", 0, None)];
        assert_eq!(compute_stats(&learnings).progress, 67);

        // 1/200 = 0.5%
        let mut learnings: Vec<Learning> = (0..200).map(|i| learning(&i.to_string(), 0, None)).collect();
        learnings[10].applied_count = 4;
        assert_eq!(compute_stats(&learnings).progress, 1);
    }

    #[test]
    fn test_all_applied_is_full_progress() {
        let learnings = vec![learning("a", 1, None), learning("b", 5, None)];
        let stats = compute_stats(&learnings);
        assert_eq!(stats.progress, 100);
        assert_eq!(stats.pending, 0);
        assert!(select_focus_items(&learnings).is_empty());
    }

    #[test]
    fn test_focus_missing_timestamp_first() {
        let learnings = vec![
            learning("dated", 0, Some("2023-06-01")),
            learning("undated", 0, None),
            learning("blank", 0, Some("")),
        ];
        // "" and None share the smallest key; their relative order holds
        assert_eq!(ids(&select_focus_items(&learnings)), vec!["undated", "blank", "dated"]);
    }

    #[test]
    fn test_focus_limit_and_stable_ties() {
        let learnings = vec![
            learning("1", 0, Some("2024-05-05")),
            learning("2", 0, Some("2024-01-01")),
            learning("3", 1, Some("2020-01-01")),
            learning("4", 0, Some("2024-01-01")),
            learning("5", 0, Some("2024-01-01")),
            learning("6", 0, Some("2024-01-01")),
        ];
        assert_eq!(ids(&select_focus_items(&learnings)), vec!["2", "4", "5"]);
    }

    #[test]
    fn test_partition_keeps_order() {
        let learnings = vec![
            learning("1", 1, Some("2024-03-01")),
            learning("2", 0, Some("2024-01-01")),
            learning("3", 4, Some("2024-02-01")),
            learning("4", 0, Some("2023-01-01")),
        ];
        let partition = partition_by_status(&learnings);
        assert_eq!(ids(&partition.needs), vec!["2", "4"]);
        assert_eq!(ids(&partition.applied), vec!["1", "3"]);
    }

    #[test]
    fn test_stats_properties_hold() {
        for learnings in sample_collections() {
            let stats = compute_stats(&learnings);
            assert_eq!(stats.total, stats.applied + stats.pending);
            assert!(stats.progress <= 100);
            assert_eq!(stats, compute_stats(&learnings));
        }
    }

    #[test]
    fn test_focus_properties_hold() {
        for learnings in sample_collections() {
            let focus = select_focus_items(&learnings);
            assert!(focus.len() <= FOCUS_LIMIT);
            assert!(focus.iter().all(|l| l.applied_count == 0));
            assert!(focus
                .windows(2)
                .all(|w| w[0].created_sort_key() <= w[1].created_sort_key()));
            assert_eq!(ids(&focus), ids(&select_focus_items(&learnings)));
        }
    }

    #[test]
    fn test_partition_properties_hold() {
        for learnings in sample_collections() {
            let partition = partition_by_status(&learnings);
            assert_eq!(partition.needs.len() + partition.applied.len(), learnings.len());
            for l in &learnings {
                let in_needs = partition.needs.iter().any(|n| std::ptr::eq(*n, l));
                let in_applied = partition.applied.iter().any(|a| std::ptr::eq(*a, l));
                assert!(in_needs != in_applied);
            }
            assert_eq!(partition, partition_by_status(&learnings));
        }
    }
}
