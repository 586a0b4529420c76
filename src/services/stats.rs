//! Summary statistics
//!
//! Tallies of the design collection shown in the gallery and admin
//! views and embedded in the archive summary document.

use crate::store::DesignRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// Aggregate counts over a design collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignSummary {
    pub total: usize,
    pub unique_class_count: usize,
    /// Count per class, keyed by the exact class string. Keys appear in
    /// first-occurrence order of the collection. Whitespace and case are
    /// not normalized; "3A" and "3a" count as different classes.
    pub per_class_count: IndexMap<String, usize>,
}

/// Summarize a design collection.
pub fn summarize(records: &[DesignRecord]) -> DesignSummary {
    let mut per_class_count: IndexMap<String, usize> = IndexMap::new();

    for record in records {
        *per_class_count
            .entry(record.student_class.clone())
            .or_insert(0) += 1;
    }

    DesignSummary {
        total: records.len(),
        unique_class_count: per_class_count.len(),
        per_class_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(name: &str, class: &str) -> DesignRecord {
        DesignRecord {
            id: 1,
            student_name: name.to_string(),
            student_class: class.to_string(),
            student_comment: None,
            image_data: "data:image/png;base64,AA==".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.unique_class_count, 0);
        assert!(summary.per_class_count.is_empty());
    }

    #[test]
    fn test_single_class() {
        let records = vec![
            record("A", "5B"),
            record("B", "5B"),
            record("C", "5B"),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.unique_class_count, 1);
        assert_eq!(summary.per_class_count.get("5B"), Some(&3));
    }

    #[test]
    fn test_mixed_classes() {
        let records = vec![
            record("أحمد", "3A"),
            record("سارة", "3B"),
            record("منى", "3A"),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.unique_class_count, 2);
        assert_eq!(summary.per_class_count.get("3A"), Some(&2));
        assert_eq!(summary.per_class_count.get("3B"), Some(&1));
    }

    #[test]
    fn test_first_occurrence_key_order() {
        let records = vec![
            record("A", "9Z"),
            record("B", "1A"),
            record("C", "9Z"),
            record("D", "4C"),
        ];

        let summary = summarize(&records);
        let keys: Vec<&String> = summary.per_class_count.keys().collect();
        assert_eq!(keys, vec!["9Z", "1A", "4C"]);
    }

    #[test]
    fn test_grouping_is_exact_string_equality() {
        let records = vec![record("A", "3A"), record("B", "3a"), record("C", " 3A")];

        let summary = summarize(&records);
        assert_eq!(summary.unique_class_count, 3);
    }
}
