//! Admin selection tracking
//!
//! Tracks the set of design ids an operator has chosen for bulk actions.
//! The set lives for one admin session only and is never persisted. Ids
//! of designs that disappear underneath it are harmless; they are
//! dropped silently when the selected subset is materialized.

use crate::store::DesignRecord;
use std::collections::HashSet;

/// Session-local set of selected design ids
#[derive(Debug, Default, Clone)]
pub struct SelectionTracker {
    selected: HashSet<i64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection state of one design. Returns the new state.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Select every design currently in the collection.
    pub fn select_all(&mut self, records: &[DesignRecord]) {
        self.selected.extend(records.iter().map(|r| r.id));
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected ids, shown to the operator.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected designs in collection order.
    ///
    /// This is the only place stale ids are reconciled: ids without a
    /// live record are simply not part of the result.
    pub fn selected_subset(&self, records: &[DesignRecord]) -> Vec<DesignRecord> {
        records
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: i64, name: &str) -> DesignRecord {
        DesignRecord {
            id,
            student_name: name.to_string(),
            student_class: "1A".to_string(),
            student_comment: None,
            image_data: "data:image/png;base64,AA==".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_toggle() {
        let mut tracker = SelectionTracker::new();

        assert!(tracker.toggle(7));
        assert!(tracker.is_selected(7));
        assert_eq!(tracker.len(), 1);

        assert!(!tracker.toggle(7));
        assert!(!tracker.is_selected(7));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_select_all_and_deselect_all() {
        let records = vec![record(1, "A"), record(2, "B"), record(3, "C")];
        let mut tracker = SelectionTracker::new();

        tracker.select_all(&records);
        assert_eq!(tracker.len(), 3);
        assert!(records.iter().all(|r| tracker.is_selected(r.id)));

        tracker.deselect_all();
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_selected_subset_keeps_collection_order() {
        let records = vec![record(1, "A"), record(2, "B"), record(3, "C")];
        let mut tracker = SelectionTracker::new();
        tracker.toggle(3);
        tracker.toggle(1);

        let subset = tracker.selected_subset(&records);
        let ids: Vec<i64> = subset.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_stale_ids_dropped_silently() {
        let mut records = vec![record(1, "A"), record(2, "B"), record(3, "C")];
        let mut tracker = SelectionTracker::new();
        tracker.select_all(&records);

        // A record vanishing underneath the selection must not break anything
        records.remove(1);

        let subset = tracker.selected_subset(&records);
        let ids: Vec<i64> = subset.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(tracker.len(), 3);
    }
}
