//! In-memory inventory list.
//!
//! The store owns an ordered `Vec` of items for the lifetime of the process.
//! Lookups are linear scans by id. Every operation takes the lock exactly
//! once and never awaits while holding it, so each call is an atomic unit
//! with respect to other requests.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::{FieldUpdate, InventoryItem};

#[derive(Default)]
struct Inner {
    items: Vec<InventoryItem>,
    last_id: i64,
}

/// Shared handle to the inventory list. Clones point at the same list.
#[derive(Clone, Default)]
pub struct InventoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item at the end of the list.
    pub async fn append(&self, item: InventoryItem) {
        let mut inner = self.inner.write().await;
        if let Ok(n) = item.id.parse::<i64>() {
            inner.last_id = inner.last_id.max(n);
        }
        inner.items.push(item);
    }

    /// Allocates an id from the current millisecond timestamp and appends a new item.
    ///
    /// Ids only move forward: two creations inside the same millisecond get
    /// consecutive values.
    pub async fn create(&self, name: String, description: String, photo: Option<String>) -> InventoryItem {
        let now = chrono::Utc::now().timestamp_millis();
        let mut inner = self.inner.write().await;
        let id = if now > inner.last_id { now } else { inner.last_id + 1 };
        inner.last_id = id;
        let item = InventoryItem { id: id.to_string(), name, description, photo };
        inner.items.push(item.clone());
        item
    }

    pub async fn find_by_id(&self, id: &str) -> Option<InventoryItem> {
        self.inner.read().await.items.iter().find(|i| i.id == id).cloned()
    }

    /// Removes the first item with `id`; the rest keep their order.
    pub async fn remove_by_id(&self, id: &str) -> Option<InventoryItem> {
        let mut inner = self.inner.write().await;
        let pos = inner.items.iter().position(|i| i.id == id)?;
        Some(inner.items.remove(pos))
    }

    /// Snapshot of all items in insertion order.
    pub async fn all(&self) -> Vec<InventoryItem> {
        self.inner.read().await.items.clone()
    }

    pub async fn update(&self, id: &str, name: FieldUpdate, description: FieldUpdate) -> Option<InventoryItem> {
        let mut inner = self.inner.write().await;
        let item = inner.items.iter_mut().find(|i| i.id == id)?;
        name.apply(&mut item.name);
        description.apply(&mut item.description);
        Some(item.clone())
    }

    /// Points the item at a new photo file. The previous file stays on disk.
    pub async fn set_photo(&self, id: &str, filename: String) -> Option<InventoryItem> {
        let mut inner = self.inner.write().await;
        let item = inner.items.iter_mut().find(|i| i.id == id)?;
        item.photo = Some(filename);
        Some(item.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
