//! Note storage backed by a single JSON object file
//!
//! Notes are free-form text values keyed by caller-supplied names. The whole
//! collection is one JSON object; every operation re-reads the file and
//! writes it back wholesale, so the file on disk is always the source of
//! truth and external edits are picked up immediately. There is no locking
//! and no partial update — last writer wins.

use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default notes file name used when the store is configured by directory
pub const DEFAULT_NOTES_FILE: &str = "my_notes.json";

/// Outcome of deleting a note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The note existed and was removed
    Deleted,
    /// No note with the given name was stored
    Missing,
}

/// Filesystem-backed note store
pub struct NoteStore {
    notes_file: PathBuf,
}

impl NoteStore {
    /// Create a store backed by [`DEFAULT_NOTES_FILE`] in the given directory
    pub fn new_in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_NOTES_FILE))
    }

    /// Create a store backed by the given file path
    pub fn new(notes_file: PathBuf) -> Self {
        Self { notes_file }
    }

    /// Path to the backing file
    pub fn notes_file(&self) -> &Path {
        &self.notes_file
    }

    /// Load the whole collection, treating a missing file as empty.
    ///
    /// A present-but-unparseable file is an error rather than silent data
    /// loss: the next save would otherwise clobber whatever is in it.
    async fn load(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.notes_file).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Serialize the whole collection and overwrite the backing file,
    /// creating it and its parent directory on first save.
    async fn save(&self, notes: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.notes_file.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(notes)?;
        tokio::fs::write(&self.notes_file, content).await?;
        Ok(())
    }

    /// Insert or overwrite a note
    pub async fn add(&self, name: &str, content: &str) -> Result<()> {
        let mut notes = self.load().await?;
        notes.insert(name.to_string(), content.to_string());
        self.save(&notes).await?;
        tracing::debug!("Stored note '{}'", name);
        Ok(())
    }

    /// Look up a note's content by name
    pub async fn get(&self, name: &str) -> Result<Option<String>> {
        let notes = self.load().await?;
        Ok(notes.get(name).cloned())
    }

    /// Remove a note, reporting whether it existed
    pub async fn delete(&self, name: &str) -> Result<DeleteOutcome> {
        let mut notes = self.load().await?;
        if notes.remove(name).is_some() {
            self.save(&notes).await?;
            tracing::debug!("Deleted note '{}'", name);
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::Missing)
        }
    }

    /// List all stored note names
    pub async fn list(&self) -> Result<Vec<String>> {
        let notes = self.load().await?;
        Ok(notes.keys().cloned().collect())
    }
}
