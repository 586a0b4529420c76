//! Application wiring
//!
//! Composition root for the UI shell: builds the record store and the
//! services around one data directory, and bootstraps logging.

use crate::error::Result;
use crate::services::{ArchiveExporter, SubmissionsService};
use crate::store::RecordStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Central application state holding the store and all services
#[derive(Clone)]
pub struct App {
    pub data_dir: PathBuf,
    pub store: RecordStore,
    pub submissions: SubmissionsService,
    pub exporter: ArchiveExporter,
}

impl App {
    /// Initialize the application around `data_dir`, creating it if needed.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        tracing::info!("Initializing application");
        tracing::info!("Data directory: {:?}", data_dir);

        std::fs::create_dir_all(&data_dir)?;

        let store = RecordStore::new(&data_dir);
        let submissions = SubmissionsService::new(store.clone());
        let exporter = ArchiveExporter::new(data_dir.join("exports"));

        tracing::info!("Application initialized successfully");

        Ok(Self {
            data_dir,
            store,
            submissions,
            exporter,
        })
    }
}

/// Initialize logging for the hosting shell. Call once on startup.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "designvault=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
