//! Persistence collaborator for saved simulations
//!
//! The engine itself never persists anything: a caller hands a finished
//! [`SimulationResult`] to the store, which stamps identity and timestamps
//! and keeps the collection in a single JSON file, newest first.

use crate::error::StorageError;
use crate::projection::SimulationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A simulation saved by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSimulation {
    pub id: Uuid,
    pub user_id: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub saved_at: DateTime<Utc>,
    pub result: SimulationResult,
}

/// JSON-file-backed store for saved simulations
#[derive(Debug, Clone)]
pub struct SimulationStore {
    path: PathBuf,
}

impl SimulationStore {
    /// Create a store backed by the given JSON file
    ///
    /// The file is created on first save; a missing file reads as an empty
    /// collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save a result for a user, stamping id and timestamps
    ///
    /// Monetary amounts are rounded to cents before persisting so stored
    /// JSON stays stable across re-serialization.
    pub fn save(
        &self,
        result: &SimulationResult,
        user_id: &str,
        label: &str,
    ) -> Result<SavedSimulation, StorageError> {
        let now = Utc::now();
        let saved = SavedSimulation {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            label: label.to_string(),
            created_at: now,
            saved_at: now,
            result: result.rounded_to_cents(),
        };

        let mut all = self.load_all()?;
        all.insert(0, saved.clone());
        self.write_all(&all)?;

        log::info!("saved simulation {} for user {user_id}", saved.id);

        Ok(saved)
    }

    /// List a user's saved simulations, newest first
    pub fn list(&self, user_id: &str) -> Result<Vec<SavedSimulation>, StorageError> {
        let all = self.load_all()?;
        Ok(all.into_iter().filter(|s| s.user_id == user_id).collect())
    }

    /// Delete a saved simulation by id
    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut all = self.load_all()?;
        let before = all.len();
        all.retain(|s| s.id != id);
        if all.len() == before {
            return Err(StorageError::NotFound(id));
        }
        self.write_all(&all)
    }

    fn load_all(&self) -> Result<Vec<SavedSimulation>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, all: &[SavedSimulation]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(all)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
