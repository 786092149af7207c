//! Snapshot store for parsed yards
//!
//! A snapshot is one parsed upload together with its statistics. Callers save
//! snapshots after parsing and later reload the most recent one instead of
//! re-reading the spreadsheet. Every save is announced on a broadcast channel
//! so long-running consumers can refresh.

use crate::app::models::Container;
use crate::app::services::yard_parser::{ParseResult, ParseStats};
use crate::constants::CHANGE_CHANNEL_CAPACITY;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::broadcast;
use tracing::{debug, info};

/// One stored parse of an uploaded file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YardSnapshot {
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub containers: Vec<Container>,
    pub vessels: Vec<String>,
    pub stats: ParseStats,
}

impl YardSnapshot {
    /// Snapshot of a parse result taken now
    pub fn from_parse(filename: impl Into<String>, result: ParseResult) -> Self {
        Self {
            filename: filename.into(),
            uploaded_at: Utc::now(),
            containers: result.containers,
            vessels: result.vessels,
            stats: result.stats,
        }
    }
}

/// Notification sent after the store changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YardChange {
    SnapshotSaved {
        filename: String,
        container_count: usize,
    },
}

/// Narrow persistence interface for yard snapshots
pub trait YardRepository {
    /// Store a snapshot and notify subscribers
    fn save(&self, snapshot: YardSnapshot) -> Result<()>;

    /// Most recent snapshot by upload time
    fn load_latest(&self) -> Result<Option<YardSnapshot>>;

    /// Container records of the most recent snapshot, empty if none
    fn load(&self) -> Result<Vec<Container>> {
        Ok(self
            .load_latest()?
            .map(|snapshot| snapshot.containers)
            .unwrap_or_default())
    }

    /// Receive a [`YardChange`] for every later save
    fn subscribe(&self) -> broadcast::Receiver<YardChange>;
}

fn latest(snapshots: &[YardSnapshot]) -> Option<YardSnapshot> {
    snapshots.iter().max_by_key(|s| s.uploaded_at).cloned()
}

fn notify(changes: &broadcast::Sender<YardChange>, snapshot: &YardSnapshot) {
    let change = YardChange::SnapshotSaved {
        filename: snapshot.filename.clone(),
        container_count: snapshot.stats.created_containers,
    };
    // No subscribers is not an error
    let receivers = changes.send(change).unwrap_or(0);
    debug!("Announced snapshot '{}' to {} subscribers", snapshot.filename, receivers);
}

fn lock(snapshots: &Mutex<Vec<YardSnapshot>>) -> Result<MutexGuard<'_, Vec<YardSnapshot>>> {
    snapshots
        .lock()
        .map_err(|_| Error::repository("snapshot store lock poisoned"))
}

/// Snapshots kept in memory only
pub struct InMemoryRepository {
    snapshots: Mutex<Vec<YardSnapshot>>,
    changes: broadcast::Sender<YardChange>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            snapshots: Mutex::new(Vec::new()),
            changes,
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl YardRepository for InMemoryRepository {
    fn save(&self, snapshot: YardSnapshot) -> Result<()> {
        lock(&self.snapshots)?.push(snapshot.clone());
        notify(&self.changes, &snapshot);
        Ok(())
    }

    fn load_latest(&self) -> Result<Option<YardSnapshot>> {
        Ok(latest(&lock(&self.snapshots)?))
    }

    fn subscribe(&self) -> broadcast::Receiver<YardChange> {
        self.changes.subscribe()
    }
}

/// Snapshots stored together in a single JSON file
///
/// The whole file is rewritten on every save.
pub struct JsonFileRepository {
    store_path: PathBuf,
    snapshots: Mutex<Vec<YardSnapshot>>,
    changes: broadcast::Sender<YardChange>,
}

impl JsonFileRepository {
    /// Open the store at `store_path`, creating nothing until the first save
    pub fn open(store_path: impl Into<PathBuf>) -> Result<Self> {
        let store_path = store_path.into();

        let snapshots = if store_path.exists() {
            let file = File::open(&store_path).map_err(|e| {
                Error::io(format!("Failed to open store {}", store_path.display()), e)
            })?;
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                Error::repository(format!(
                    "Store {} is corrupted: {}",
                    store_path.display(),
                    e
                ))
            })?
        } else {
            Vec::new()
        };

        debug!(
            "Opened snapshot store {} with {} snapshots",
            store_path.display(),
            snapshots.len()
        );

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self {
            store_path,
            snapshots: Mutex::new(snapshots),
            changes,
        })
    }

    /// Location of the backing file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    fn persist(&self, snapshots: &[YardSnapshot]) -> Result<()> {
        if let Some(parent) = self.store_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(format!("Failed to create store directory {}", parent.display()), e)
            })?;
        }

        let write_error = |e: std::io::Error| {
            Error::io(format!("Failed to write store {}", self.store_path.display()), e)
        };

        let file = File::create(&self.store_path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshots)
            .map_err(|e| Error::json("Failed to encode snapshots", e))?;
        writer.flush().map_err(write_error)?;
        writer
            .into_inner()
            .map_err(|e| write_error(e.into_error()))?
            .sync_all()
            .map_err(write_error)?;
        Ok(())
    }
}

impl YardRepository for JsonFileRepository {
    fn save(&self, snapshot: YardSnapshot) -> Result<()> {
        let mut snapshots = lock(&self.snapshots)?;
        snapshots.push(snapshot.clone());

        if let Err(e) = self.persist(&snapshots) {
            snapshots.pop();
            return Err(e);
        }
        drop(snapshots);

        info!(
            "Saved snapshot '{}' ({} containers) to {}",
            snapshot.filename,
            snapshot.stats.created_containers,
            self.store_path.display()
        );
        notify(&self.changes, &snapshot);
        Ok(())
    }

    fn load_latest(&self) -> Result<Option<YardSnapshot>> {
        Ok(latest(&lock(&self.snapshots)?))
    }

    fn subscribe(&self) -> broadcast::Receiver<YardChange> {
        self.changes.subscribe()
    }
}
