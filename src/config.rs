//! Application configuration constants
//!
//! Central location for configuration constants, resource limits,
//! and validation boundaries used throughout the crate.

// ===== Persistence =====

/// File name of the persisted design collection inside the data directory.
/// The collection is always read and written as a whole.
pub const COLLECTION_FILE: &str = "designs.json";

/// File name prefix for exported archive bundles; the export date is appended.
pub const EXPORT_FILE_PREFIX: &str = "designs_export";

/// Name of the textual summary entry inside an exported archive.
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

// ===== Gallery =====

/// Sentinel class-filter value that matches every record.
pub const CLASS_FILTER_ALL: &str = "all";

// ===== Submission Limits =====

/// Maximum length of a student name in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a class name in characters.
pub const MAX_CLASS_LENGTH: usize = 50;

/// Maximum length of an optional comment in characters.
pub const MAX_COMMENT_LENGTH: usize = 500;

// ===== Image Payloads =====

/// Required prefix of a submitted image payload (a self-describing data URL).
pub const DATA_URL_IMAGE_PREFIX: &str = "data:image/";

/// Separator between the data URL header and the base64 payload.
pub const BASE64_MARKER: &str = ";base64,";
