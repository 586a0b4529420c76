//! Store module
//!
//! This module owns the durable design collection:
//! - Model definitions
//! - The single-document record store

pub mod models;
pub mod record_store;

pub use models::*;
pub use record_store::RecordStore;
