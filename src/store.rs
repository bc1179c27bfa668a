//! The snippet list and its persistence.

use crate::config::STORAGE_KEY;
use crate::error::{ClipmemoError, Result};
use crate::models::{next_id, now_millis, seed_snippets, Snippet, SnippetId};
use crate::storage::KeyValueStorage;
use std::collections::HashSet;
use tracing::{debug, info};

/// Ordered snippet list mirrored to a single storage key.
///
/// Every mutation rewrites the whole list, so the stored value always
/// matches what [`SnippetStore::snippets`] returns.
#[derive(Debug)]
pub struct SnippetStore<S: KeyValueStorage> {
    storage: S,
    snippets: Vec<Snippet>,
}

impl<S: KeyValueStorage> SnippetStore<S> {
    /// Load the list from `storage`, seeding it on first run
    pub fn load(storage: S) -> Result<Self> {
        let mut store = Self {
            storage,
            snippets: Vec::new(),
        };

        // A blank value counts as never written
        match store.storage.get_item(STORAGE_KEY)? {
            Some(raw) if !raw.trim().is_empty() => {
                store.snippets = parse_snippets(&raw)?;
                debug!(count = store.snippets.len(), "loaded snippets");
            }
            _ => {
                store.snippets = seed_snippets(now_millis());
                store.persist()?;
                info!("no stored snippets, wrote seed data");
            }
        }

        Ok(store)
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, id: SnippetId) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: SnippetId) -> Option<usize> {
        self.snippets.iter().position(|s| s.id == id)
    }

    /// Add a snippet at the head of the list
    pub fn create(&mut self, label: &str, content: &str) -> Result<&[Snippet]> {
        let (label, content) = validate(label, content)?;

        let max_id = self.snippets.iter().map(|s| s.id).max();
        let id = next_id(max_id, now_millis()).ok_or_else(|| {
            ClipmemoError::Corrupt(format!("no id left after {}", SnippetId::MAX))
        })?;
        self.snippets.insert(0, Snippet::new(id, label, content));
        self.persist()?;

        info!(id, "created snippet");
        Ok(&self.snippets)
    }

    /// Replace label and content of `id` in place.
    ///
    /// Returns `false` without touching storage when `id` is unknown.
    pub fn update(&mut self, id: SnippetId, label: &str, content: &str) -> Result<bool> {
        let (label, content) = validate(label, content)?;

        let Some(entry) = self.snippets.iter_mut().find(|s| s.id == id) else {
            debug!(id, "update skipped, no such snippet");
            return Ok(false);
        };
        entry.label = label;
        entry.content = content;
        self.persist()?;

        info!(id, "updated snippet");
        Ok(true)
    }

    /// Remove `id` if present. Returns whether anything was removed.
    pub fn delete(&mut self, id: SnippetId) -> Result<bool> {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.id != id);
        let removed = self.snippets.len() != before;
        self.persist()?;

        if removed {
            info!(id, "deleted snippet");
        } else {
            debug!(id, "delete skipped, no such snippet");
        }
        Ok(removed)
    }

    /// Move the element at `from` so it ends up at `to`
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.snippets.len();
        for index in [from, to] {
            if index >= len {
                return Err(ClipmemoError::IndexOutOfRange { index, len });
            }
        }

        let item = self.snippets.remove(from);
        self.snippets.insert(to, item);
        self.persist()?;

        info!(from, to, "reordered snippets");
        Ok(())
    }

    /// Move `id` one place towards the head. Returns whether it moved.
    pub fn move_up(&mut self, id: SnippetId) -> Result<bool> {
        match self.position(id) {
            Some(pos) if pos > 0 => self.reorder(pos, pos - 1).map(|_| true),
            _ => Ok(false),
        }
    }

    /// Move `id` one place towards the tail. Returns whether it moved.
    pub fn move_down(&mut self, id: SnippetId) -> Result<bool> {
        match self.position(id) {
            Some(pos) if pos + 1 < self.snippets.len() => {
                self.reorder(pos, pos + 1).map(|_| true)
            }
            _ => Ok(false),
        }
    }

    /// Overwrite the storage key with the whole list
    pub fn persist(&mut self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.snippets)?;
        self.storage.set_item(STORAGE_KEY, &serialized)?;
        debug!(count = self.snippets.len(), "persisted snippets");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Trim both fields, rejecting either one being blank
fn validate(label: &str, content: &str) -> Result<(String, String)> {
    let label = label.trim();
    let content = content.trim();
    if label.is_empty() || content.is_empty() {
        return Err(ClipmemoError::Validation);
    }
    Ok((label.to_string(), content.to_string()))
}

fn parse_snippets(raw: &str) -> Result<Vec<Snippet>> {
    let snippets: Vec<Snippet> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(snippets.len());
    for snippet in &snippets {
        if !seen.insert(snippet.id) {
            return Err(ClipmemoError::Corrupt(format!(
                "duplicate snippet id {}",
                snippet.id
            )));
        }
    }

    Ok(snippets)
}
