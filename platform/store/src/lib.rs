//! Durable slot primitives backed by the local filesystem.
//!
//! A slot is a single named JSON file holding one serialized value. Reads
//! are lenient (an absent or unparsable slot reads as nothing); writes are
//! strict and overwrite the whole slot.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no usable state directory; set ROSTER_STATE_DIR")]
    RootUnavailable,
    #[error("slot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("slot encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Environment-driven settings for slot placement.
#[derive(Clone, Debug)]
pub struct StoreSettings {
    root: PathBuf,
}

impl StoreSettings {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the state directory: `ROSTER_STATE_DIR`, else the platform
    /// data dir under `roster`.
    pub fn from_env() -> StoreResult<Self> {
        if let Ok(dir) = std::env::var("ROSTER_STATE_DIR") {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return Ok(Self::with_root(trimmed));
            }
        }
        let base = dirs::data_dir().ok_or(StoreError::RootUnavailable)?;
        Ok(Self::with_root(base.join("roster")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot(&self, name: &str) -> Slot {
        Slot::new(&self.root, name)
    }
}

/// A single named durable slot.
#[derive(Clone, Debug)]
pub struct Slot {
    path: PathBuf,
}

impl Slot {
    pub fn new(root: impl AsRef<Path>, name: &str) -> Self {
        Self {
            path: root.as_ref().join(format!("{name}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the slot. An absent, unreadable or unparsable slot
    /// yields `None`; a parse failure is logged but never surfaced.
    pub fn read<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(slot = %self.path.display(), %err, "slot unreadable, treating as empty");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(slot = %self.path.display(), %err, "slot unparsable, treating as empty");
                None
            }
        }
    }

    /// Serialize and overwrite the whole slot. The overwrite is not atomic;
    /// concurrent writers race last-write-wins.
    pub fn write<T: Serialize>(&self, value: &T) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(value).map_err(StoreError::Encode)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
