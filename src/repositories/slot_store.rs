//! Storage backends for journal slots. A slot is a single opaque document
//! per record kind; writes replace the whole document. Typed decoding and
//! schema checks live in the journal service, keeping this layer dumb.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::{AppError, AppResult};
use crate::models::domain::journal::SlotKind;

pub trait SlotRepository: Send + Sync {
    /// Returns the stored document for the slot, or `None` if it was never
    /// written.
    fn load_raw(&self, kind: SlotKind) -> AppResult<Option<String>>;

    /// Replaces the slot's document in its entirety.
    fn save_raw(&self, kind: SlotKind, document: &str) -> AppResult<()>;
}

/// One JSON file per slot under a data directory.
pub struct FileSlotRepository {
    data_dir: PathBuf,
}

impl FileSlotRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path(&self, kind: SlotKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

impl SlotRepository for FileSlotRepository {
    fn load_raw(&self, kind: SlotKind) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path(kind)) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::StorageError(e.to_string())),
        }
    }

    fn save_raw(&self, kind: SlotKind, document: &str) -> AppResult<()> {
        fs::write(self.path(kind), document)?;
        Ok(())
    }
}

/// Map-backed store for tests and ephemeral deployments.
#[derive(Default)]
pub struct InMemorySlotRepository {
    slots: Mutex<HashMap<SlotKind, String>>,
}

impl InMemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotRepository for InMemorySlotRepository {
    fn load_raw(&self, kind: SlotKind) -> AppResult<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| AppError::StorageError("slot store lock poisoned".to_string()))?;
        Ok(slots.get(&kind).cloned())
    }

    fn save_raw(&self, kind: SlotKind, document: &str) -> AppResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::StorageError("slot store lock poisoned".to_string()))?;
        slots.insert(kind, document.to_string());
        Ok(())
    }
}
