//! Store models
//!
//! Rust structs representing the persisted collection entities.
//! Field names follow the collection document format, so a serialized
//! record reads exactly like one entry of the stored JSON array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted design.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    /// Unique id, derived from the creation instant at submission time.
    /// Never reused; the canonical key for selection and file naming.
    pub id: i64,
    pub student_name: String,
    pub student_class: String,
    /// Absent is distinct from empty; empty submitted comments are
    /// normalized to absent before a record is constructed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_comment: Option<String>,
    /// Self-describing encoded image payload (`data:image/...;base64,...`),
    /// embeddable directly as a displayable image source.
    pub image_data: String,
    /// Creation instant; immutable after creation.
    pub timestamp: DateTime<Utc>,
}

/// Create design request, produced by the submission UI.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSubmission {
    pub student_name: String,
    pub student_class: String,
    #[serde(default)]
    pub student_comment: Option<String>,
    pub image_data: String,
}
