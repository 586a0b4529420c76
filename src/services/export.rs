//! Archive export
//!
//! Packages a resolved set of designs as a ZIP bundle: one decoded
//! image per design plus a single textual summary document. The caller
//! passes the already-resolved subset (the full collection or the
//! selected subset); this service never consults the store itself.
//!
//! A design whose image payload fails to decode is skipped and noted in
//! the summary instead of aborting the whole export.

use crate::config;
use crate::error::{AppError, Result};
use crate::services::stats;
use crate::store::DesignRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use std::io::{Cursor, Write};
use std::path::PathBuf;
use tokio::fs;
use zip::write::FileOptions;
use zip::ZipWriter;

/// A decoded design image ready for download or packaging.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Archive export service
#[derive(Clone)]
pub struct ArchiveExporter {
    export_dir: PathBuf,
}

impl ArchiveExporter {
    pub fn new(export_dir: PathBuf) -> Self {
        Self { export_dir }
    }

    /// Build the archive bundle in memory.
    ///
    /// Produces one image entry per design, named from the student name,
    /// class and id, and exactly one summary entry. Refuses an empty
    /// input set.
    pub fn build_archive(&self, records: &[DesignRecord]) -> Result<Vec<u8>> {
        if records.is_empty() {
            return Err(AppError::EmptySelection);
        }

        let exported_at = Utc::now();
        let mut skipped: Vec<(&DesignRecord, String)> = Vec::new();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            FileOptions::<()>::default().compression_method(zip::CompressionMethod::Deflated);

        for record in records {
            match decode_image(record) {
                Ok(image) => {
                    zip.start_file(image.filename.as_str(), options)?;
                    zip.write_all(&image.bytes)?;
                }
                Err(e) => {
                    tracing::warn!("Skipping design {} in archive: {}", record.id, e);
                    skipped.push((record, e.to_string()));
                }
            }
        }

        let summary = summary_text(records, exported_at, &skipped);
        zip.start_file(config::SUMMARY_FILE_NAME, options)?;
        zip.write_all(summary.as_bytes())?;

        let cursor = zip.finish()?;

        tracing::info!(
            "Built archive: {} images, {} skipped, {} bytes",
            records.len() - skipped.len(),
            skipped.len(),
            cursor.get_ref().len()
        );

        Ok(cursor.into_inner())
    }

    /// Build the archive and write it to the export directory as a
    /// date-stamped ZIP file. Returns the path of the written bundle.
    pub async fn export(&self, records: &[DesignRecord]) -> Result<PathBuf> {
        let data = self.build_archive(records)?;

        fs::create_dir_all(&self.export_dir).await?;

        let filename = format!(
            "{}_{}.zip",
            config::EXPORT_FILE_PREFIX,
            Utc::now().format("%Y-%m-%d")
        );
        let path = self.export_dir.join(filename);

        fs::write(&path, &data).await?;

        tracing::info!("Archive written to {:?}", path);

        Ok(path)
    }
}

/// Decode one design's image payload into raw bytes plus a
/// deterministic file name.
pub fn decode_image(record: &DesignRecord) -> Result<DecodedImage> {
    let (header, payload) = record
        .image_data
        .split_once(config::BASE64_MARKER)
        .ok_or_else(|| AppError::ImageDecode {
            id: record.id,
            reason: "payload is not a base64 data URL".to_string(),
        })?;

    if !header.starts_with(config::DATA_URL_IMAGE_PREFIX) {
        return Err(AppError::ImageDecode {
            id: record.id,
            reason: format!("unexpected payload header '{}'", header),
        });
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| AppError::ImageDecode {
            id: record.id,
            reason: e.to_string(),
        })?;

    let ext = match &header[config::DATA_URL_IMAGE_PREFIX.len()..] {
        "jpeg" | "jpg" => "jpg",
        "gif" => "gif",
        "webp" => "webp",
        _ => "png",
    };

    Ok(DecodedImage {
        filename: format!(
            "{}_{}_{}.{}",
            sanitize_component(&record.student_name),
            sanitize_component(&record.student_class),
            record.id,
            ext
        ),
        bytes,
    })
}

/// Replace path separators and other characters that are unsafe in
/// archive entry names. Unicode (including Arabic) passes through.
fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// The plain-text summary document embedded in every archive: export
/// instant, aggregate counts, per-class breakdown and a per-design
/// listing in the order the records were passed in.
fn summary_text(
    records: &[DesignRecord],
    exported_at: DateTime<Utc>,
    skipped: &[(&DesignRecord, String)],
) -> String {
    let summary = stats::summarize(records);

    let mut text = String::new();
    text.push_str("Design Submissions Summary\n");
    text.push_str(&format!(
        "Exported: {}\n\n",
        exported_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    text.push_str(&format!("Total designs: {}\n", summary.total));
    text.push_str(&format!(
        "Participating classes: {}\n\n",
        summary.unique_class_count
    ));

    text.push_str("Designs per class:\n");
    for (class, count) in &summary.per_class_count {
        text.push_str(&format!("- {}: {}\n", class, count));
    }

    text.push_str("\nDesign details:\n");
    text.push_str(&"=".repeat(50));
    text.push('\n');

    for (index, record) in records.iter().enumerate() {
        text.push_str(&format!("\n{}. {}\n", index + 1, record.student_name));
        text.push_str(&format!("   Class: {}\n", record.student_class));
        text.push_str(&format!(
            "   Date: {}\n",
            record.timestamp.format("%Y-%m-%d")
        ));
        text.push_str(&format!(
            "   Time: {}\n",
            record.timestamp.format("%H:%M:%S")
        ));
        if let Some(comment) = &record.student_comment {
            text.push_str(&format!("   Comment: {}\n", comment));
        }
        text.push_str(&format!("   ID: {}\n", record.id));
    }

    if !skipped.is_empty() {
        text.push_str("\nSkipped entries (image payload could not be decoded):\n");
        for (record, reason) in skipped {
            text.push_str(&format!(
                "- design {} ({}, {}): {}\n",
                record.id, record.student_name, record.student_class, reason
            ));
        }
    }

    text
}
