//! Gallery view derivation
//!
//! Pure projections of the design collection for display: search and
//! class filtering, sorting, and the class-filter option list. All
//! functions are stateless; identical inputs yield identical views.

use crate::config;
use crate::store::DesignRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort order of a derived gallery view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending by submission time.
    #[default]
    Newest,
    /// Ascending by submission time.
    Oldest,
    /// Ascending by student name, Arabic-aware.
    Name,
}

/// Inputs of a derived gallery view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryQuery {
    /// Case-insensitive substring matched against name, class and comment.
    #[serde(default)]
    pub search_term: String,
    /// Exact class to show, or the `"all"` sentinel.
    #[serde(default = "default_class_filter")]
    pub class_filter: String,
    #[serde(default)]
    pub sort_key: SortKey,
}

fn default_class_filter() -> String {
    config::CLASS_FILTER_ALL.to_string()
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            class_filter: default_class_filter(),
            sort_key: SortKey::default(),
        }
    }
}

/// Derive the gallery view of `records` under `query`.
///
/// Filtering happens before sorting; all sorts are stable, so records
/// with equal keys keep their collection order.
pub fn derive_view(records: &[DesignRecord], query: &GalleryQuery) -> Vec<DesignRecord> {
    let needle = query.search_term.to_lowercase();

    let mut view: Vec<DesignRecord> = records
        .iter()
        .filter(|r| matches_search(r, &needle) && matches_class(r, &query.class_filter))
        .cloned()
        .collect();

    match query.sort_key {
        SortKey::Newest => view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortKey::Oldest => view.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortKey::Name => view.sort_by_cached_key(|r| collation_key(&r.student_name)),
    }

    tracing::debug!(
        "Derived gallery view: {} of {} designs",
        view.len(),
        records.len()
    );

    view
}

/// Distinct classes present in the collection, sorted ascending, with
/// the permanent `"all"` sentinel first.
pub fn class_options(records: &[DesignRecord]) -> Vec<String> {
    let classes: BTreeSet<&str> = records.iter().map(|r| r.student_class.as_str()).collect();

    std::iter::once(config::CLASS_FILTER_ALL)
        .chain(classes)
        .map(str::to_string)
        .collect()
}

fn matches_search(record: &DesignRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.student_name.to_lowercase().contains(needle)
        || record.student_class.to_lowercase().contains(needle)
        || record
            .student_comment
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

fn matches_class(record: &DesignRecord, class_filter: &str) -> bool {
    class_filter == config::CLASS_FILTER_ALL || record.student_class == class_filter
}

/// Collation key for name sorting.
///
/// Strips Arabic harakat, tatweel and the dagger alef, folds alef and
/// teh-marbuta/alef-maqsura variants, and lowercases the rest. For the
/// Arabic base alphabet, codepoint order is alphabetical order.
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\u{0640}' | '\u{064B}'..='\u{0652}' | '\u{0670}' => {}
            '\u{0622}' | '\u{0623}' | '\u{0625}' => key.push('\u{0627}'),
            '\u{0629}' => key.push('\u{0647}'),
            '\u{0649}' => key.push('\u{064A}'),
            _ => key.extend(c.to_lowercase()),
        }
    }
    key
}
