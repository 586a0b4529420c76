//! Single-document record store
//!
//! Persists the design collection as one JSON array that is always read
//! and written as a whole. There is no partial update: every mutation is
//! a full read-modify-write of the collection file.
//!
//! Concurrent writers are not coordinated; the last whole-file write
//! wins. Acceptable for the single-operator deployments this targets.

use crate::config;
use crate::error::Result;
use crate::store::models::{DesignRecord, DesignSubmission};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Store for the persisted design collection
#[derive(Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store backed by the collection file inside `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(config::COLLECTION_FILE),
        }
    }

    /// Load the full collection.
    ///
    /// Fails soft: a missing or unparsable collection file yields an
    /// empty collection and never an error. Corruption is logged and the
    /// damaged file is left in place until the next successful save.
    pub async fn load(&self) -> Vec<DesignRecord> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read collection file {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Collection file {:?} is not valid JSON ({}), starting empty",
                    self.path,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append one submission to the collection.
    ///
    /// Assigns the record id and creation timestamp, then persists the
    /// whole collection. The id is derived from the creation instant and
    /// bumped past the newest existing id, so two submissions within the
    /// same millisecond still get distinct ids.
    pub async fn append(&self, submission: DesignSubmission) -> Result<DesignRecord> {
        let mut records = self.load().await;

        let now = Utc::now();
        let candidate = now.timestamp_millis();
        let id = match records.iter().map(|r| r.id).max() {
            Some(max_id) => candidate.max(max_id + 1),
            None => candidate,
        };

        let record = DesignRecord {
            id,
            student_name: submission.student_name,
            student_class: submission.student_class,
            student_comment: submission.student_comment,
            image_data: submission.image_data,
            timestamp: now,
        };

        records.push(record.clone());
        self.save(&records).await?;

        tracing::debug!("Appended design {} ({} total)", id, records.len());

        Ok(record)
    }

    /// Remove the persisted collection entirely. Atomic and immediate;
    /// an already-missing collection file is not an error. Confirming
    /// intent with the operator is the calling layer's concern.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        tracing::info!("Cleared design collection at {:?}", self.path);
        Ok(())
    }

    /// Persist the whole collection, replacing the previous document.
    ///
    /// Writes to a temp file and renames it into place so a crash mid-write
    /// never leaves a truncated collection behind.
    async fn save(&self, records: &[DesignRecord]) -> Result<()> {
        let content = serde_json::to_string(records)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }

    /// Path of the collection file (for backup tooling and tests).
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn submission(name: &str, class: &str) -> DesignSubmission {
        DesignSubmission {
            student_name: name.to_string(),
            student_class: class.to_string(),
            student_comment: None,
            image_data: "data:image/png;base64,AA==".to_string(),
        }
    }

    fn create_test_store() -> (RecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let (store, _temp) = create_test_store();

        let records = store.load().await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_append_round_trip() {
        let (store, _temp) = create_test_store();

        let before = store.load().await;
        let record = store.append(submission("Lina", "3A")).await.unwrap();

        assert!(before.iter().all(|r| r.id != record.id));

        let after = store.load().await;
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, record.id);
        assert_eq!(after[0].student_name, "Lina");
    }

    #[tokio::test]
    async fn test_append_assigns_distinct_ids() {
        let (store, _temp) = create_test_store();

        let first = store.append(submission("A", "1")).await.unwrap();
        let second = store.append(submission("B", "1")).await.unwrap();
        let third = store.append(submission("C", "2")).await.unwrap();

        assert!(second.id > first.id);
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_empty() {
        let (store, _temp) = create_test_store();

        store.append(submission("A", "1")).await.unwrap();
        fs::write(store.path(), b"{not json").await.unwrap();

        let records = store.load().await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_collection() {
        let (store, _temp) = create_test_store();

        for i in 0..5 {
            store.append(submission(&format!("S{}", i), "1")).await.unwrap();
        }
        assert_eq!(store.load().await.len(), 5);

        store.clear().await.unwrap();
        assert_eq!(store.load().await.len(), 0);

        // Clearing an already-empty store is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let (store, _temp) = create_test_store();

        store.append(submission("First", "1")).await.unwrap();
        store.append(submission("Second", "1")).await.unwrap();
        store.append(submission("Third", "1")).await.unwrap();

        let names: Vec<String> = store
            .load()
            .await
            .into_iter()
            .map(|r| r.student_name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_comment_absent_not_serialized() {
        let (store, _temp) = create_test_store();

        store.append(submission("A", "1")).await.unwrap();

        let content = fs::read_to_string(store.path()).await.unwrap();
        assert!(!content.contains("studentComment"));
        assert!(content.contains("studentName"));
    }
}
