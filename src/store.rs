// Employee record store over an injected key-value backend

use crate::models::{Employee, EmployeeDraft};
use crate::storage::{FileBackend, MemoryBackend, StorageBackend};
use eyre::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Key holding the serialized employee collection.
const ROSTER_KEY: &str = "employees";
/// Key holding the session flag; present exactly while logged in.
const SESSION_KEY: &str = "isAuthenticated";
/// The literal stored under `SESSION_KEY`.
const SESSION_PRESENT: &str = "true";

/// Subdirectory created under the store root for file-backed stores.
const STORE_DIR: &str = ".staffstore";

/// Employee roster store plus session flag, over a swappable storage backend.
///
/// The collection persists as one JSON blob under a single key, so every
/// mutation here is a full read-modify-write of the whole roster. There is
/// no incremental update path and no merge: the last writer wins.
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl Store<FileBackend> {
    /// Open or create a file-backed store.
    ///
    /// Entries live in a `.staffstore` subdirectory of the given path.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let backend = FileBackend::open(root.as_ref().join(STORE_DIR))?;
        info!(dir = ?backend.dir(), "opened roster store");
        Ok(Self { backend })
    }
}

impl Store<MemoryBackend> {
    /// Store over a fresh in-memory backend. Nothing persists.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }
}

impl<B: StorageBackend> Store<B> {
    /// Store over an explicit backend instance.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    // ========================================================================
    // Collection blob
    // ========================================================================

    /// Read the full collection.
    ///
    /// An absent or unparseable blob degrades to an empty roster; reads never
    /// surface an error to the caller.
    pub fn all(&self) -> Vec<Employee> {
        let blob = match self.backend.read(ROSTER_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = ?e, "failed to read roster entry, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = ?e, "corrupt roster entry, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serialize and overwrite the entire collection unconditionally.
    ///
    /// No partial update, no merge, no concurrency check: concurrent writers
    /// clobber each other and the last write wins.
    pub fn save_all(&mut self, records: &[Employee]) -> Result<()> {
        let blob = serde_json::to_string(records).context("Failed to serialize roster")?;
        self.backend.write(ROSTER_KEY, &blob)
    }

    /// Load-or-default init: write an empty roster blob when the collection
    /// is empty, so the entry exists from first run.
    pub fn ensure_seeded(&mut self) -> Result<()> {
        if self.all().is_empty() {
            debug!("seeding empty roster entry");
            self.save_all(&[])?;
        }
        Ok(())
    }

    // ========================================================================
    // Session flag
    // ========================================================================

    /// Whether a login has occurred. Unreadable session state counts as
    /// logged out.
    pub fn is_authenticated(&self) -> bool {
        match self.backend.read(SESSION_KEY) {
            Ok(flag) => flag.as_deref() == Some(SESSION_PRESENT),
            Err(e) => {
                warn!(error = ?e, "failed to read session flag, treating as logged out");
                false
            }
        }
    }

    /// Set the session flag. No identity, no expiry: the flag is the entire
    /// authentication state.
    pub fn login(&mut self) -> Result<()> {
        self.backend.write(SESSION_KEY, SESSION_PRESENT)
    }

    /// Clear the session flag. Logging out while logged out is a no-op.
    pub fn logout(&mut self) -> Result<()> {
        self.backend.remove(SESSION_KEY)
    }

    // ========================================================================
    // Read-modify-write mutations
    // ========================================================================

    /// Validate `draft`, assign a fresh id, and append the record.
    /// Returns the stored record.
    pub fn add(&mut self, draft: EmployeeDraft) -> Result<Employee> {
        draft.validate()?;

        let mut roster = self.all();
        let employee = draft.into_employee(next_id());
        roster.push(employee.clone());
        self.save_all(&roster)?;

        debug!(id = %employee.id, "added employee");
        Ok(employee)
    }

    /// Replace every field of the record with `id` from `draft`, keeping the
    /// id itself. Returns false when no record matched; the blob is written
    /// back either way.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<bool> {
        draft.validate()?;

        let mut roster = self.all();
        let replaced = match roster.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = draft.into_employee(id.to_string());
                true
            }
            None => false,
        };
        self.save_all(&roster)?;

        if replaced {
            debug!(id, "updated employee");
        } else {
            debug!(id, "update targeted an unknown id");
        }
        Ok(replaced)
    }

    /// Drop the record with `id`. Returns false when no record matched; the
    /// blob is written back either way.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let mut roster = self.all();
        let before = roster.len();
        roster.retain(|e| e.id != id);
        let removed = roster.len() != before;
        self.save_all(&roster)?;

        if removed {
            debug!(id, "removed employee");
        }
        Ok(removed)
    }

    /// Flip only the `active` flag of the record with `id`, leaving every
    /// other field untouched. Returns the new state, or `None` when no
    /// record matched; the blob is written back either way.
    pub fn toggle_active(&mut self, id: &str) -> Result<Option<bool>> {
        let mut roster = self.all();
        let mut toggled = None;
        if let Some(slot) = roster.iter_mut().find(|e| e.id == id) {
            slot.active = !slot.active;
            toggled = Some(slot.active);
        }
        self.save_all(&roster)?;

        if let Some(active) = toggled {
            debug!(id, active, "toggled employee");
        }
        Ok(toggled)
    }

    /// Linear lookup of one record by id.
    pub fn find(&self, id: &str) -> Option<Employee> {
        self.all().into_iter().find(|e| e.id == id)
    }
}

/// Fresh record id: UUIDv7, timestamp-ordered and unique.
fn next_id() -> String {
    Uuid::now_v7().to_string()
}
