//! Error types for the DesignVault core
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the UI shell.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Image payload of design {id} could not be decoded: {reason}")]
    ImageDecode { id: i64, reason: String },

    #[error("There are no designs in the collection")]
    EmptyCollection,

    #[error("No designs are selected")]
    EmptySelection,
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
