//! Submissions service
//!
//! High-level business logic for design submissions. Validates and
//! normalizes incoming submissions before they reach the store, and
//! guards destructive operations on the collection.

use crate::config;
use crate::error::{AppError, Result};
use crate::store::{DesignRecord, DesignSubmission, RecordStore};

/// Service for managing design submissions
#[derive(Clone)]
pub struct SubmissionsService {
    store: RecordStore,
}

impl SubmissionsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Validate and store a new submission.
    ///
    /// Name and class are trimmed and must be non-empty; an empty or
    /// whitespace-only comment is normalized to absent.
    pub async fn submit(&self, submission: DesignSubmission) -> Result<DesignRecord> {
        let submission = normalize(submission);
        validate(&submission)?;

        tracing::info!(
            "Submitting design by {} ({})",
            submission.student_name,
            submission.student_class
        );

        let record = self.store.append(submission).await?;

        tracing::info!("Design stored successfully: {}", record.id);

        Ok(record)
    }

    /// List the full collection in insertion order.
    pub async fn list(&self) -> Vec<DesignRecord> {
        self.store.load().await
    }

    /// Clear the whole collection. Refuses on an empty collection and
    /// performs no side effect in that case; returns the removed count.
    pub async fn clear_all(&self) -> Result<usize> {
        let records = self.store.load().await;
        if records.is_empty() {
            return Err(AppError::EmptyCollection);
        }

        self.store.clear().await?;

        tracing::info!("Cleared {} designs", records.len());

        Ok(records.len())
    }
}

fn normalize(submission: DesignSubmission) -> DesignSubmission {
    DesignSubmission {
        student_name: submission.student_name.trim().to_string(),
        student_class: submission.student_class.trim().to_string(),
        student_comment: submission
            .student_comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty()),
        image_data: submission.image_data,
    }
}

fn validate(submission: &DesignSubmission) -> Result<()> {
    if submission.student_name.is_empty() {
        return Err(AppError::Validation("student name is required".to_string()));
    }
    if submission.student_name.chars().count() > config::MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "student name exceeds {} characters",
            config::MAX_NAME_LENGTH
        )));
    }

    if submission.student_class.is_empty() {
        return Err(AppError::Validation("student class is required".to_string()));
    }
    if submission.student_class.chars().count() > config::MAX_CLASS_LENGTH {
        return Err(AppError::Validation(format!(
            "student class exceeds {} characters",
            config::MAX_CLASS_LENGTH
        )));
    }

    if let Some(comment) = &submission.student_comment {
        if comment.chars().count() > config::MAX_COMMENT_LENGTH {
            return Err(AppError::Validation(format!(
                "comment exceeds {} characters",
                config::MAX_COMMENT_LENGTH
            )));
        }
    }

    if !submission.image_data.starts_with(config::DATA_URL_IMAGE_PREFIX)
        || !submission.image_data.contains(config::BASE64_MARKER)
    {
        return Err(AppError::Validation(
            "image payload is not a base64 image data URL".to_string(),
        ));
    }

    Ok(())
}
