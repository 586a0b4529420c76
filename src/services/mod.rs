//! Services module
//!
//! Business logic built on top of the record store: submissions,
//! gallery view derivation, admin selection, statistics and export.

pub mod export;
pub mod gallery;
pub mod selection;
pub mod stats;
pub mod submissions;

pub use export::ArchiveExporter;
pub use selection::SelectionTracker;
pub use submissions::SubmissionsService;
