//! # Inventory Handler
//!
//! Applies the five item operations to the store. Each operation takes the
//! store lock once and does its whole check-and-mutate step under it.

use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::observability::MetricsRegistry;

use super::errors::{InventoryError, InventoryResult};
use super::item::{Item, ItemFields, ItemPayload};
use super::store::ItemStore;
use super::validation::validate;

/// Item operations backed by an in-memory store
pub struct InventoryHandler {
    store: Mutex<ItemStore>,
    metrics: Arc<MetricsRegistry>,
}

impl InventoryHandler {
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(MetricsRegistry::new()))
    }

    /// Create a handler that records into a shared registry
    pub fn with_metrics(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            store: Mutex::new(ItemStore::new()),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    fn lock(&self) -> InventoryResult<MutexGuard<'_, ItemStore>> {
        self.store
            .lock()
            .map_err(|_| InventoryError::Internal("Lock poisoned".to_string()))
    }

    fn check(&self, payload: &ItemPayload) -> InventoryResult<ItemFields> {
        validate(payload).map_err(|err| {
            self.metrics.increment_validation_failures();
            tracing::debug!(kind = err.kind(), "item payload rejected");
            InventoryError::from(err)
        })
    }

    fn not_found(&self, id: &str) -> InventoryError {
        self.metrics.increment_not_found();
        tracing::debug!(item_id = %id, "item not found");
        InventoryError::NotFound
    }

    /// Validate and store a new item under a fresh id
    pub fn create(&self, payload: &ItemPayload) -> InventoryResult<Item> {
        let fields = self.check(payload)?;
        let id = Uuid::new_v4().to_string();
        let item = Item::from_fields(id.clone(), fields);

        self.lock()?.put(&id, item.clone());

        self.metrics.increment_created();
        tracing::info!(item_id = %id, "item created");
        Ok(item)
    }

    /// All items, possibly empty
    pub fn list(&self) -> InventoryResult<Vec<Item>> {
        Ok(self.lock()?.list())
    }

    pub fn get(&self, id: &str) -> InventoryResult<Item> {
        let store = self.lock()?;
        match store.get(id) {
            Some(item) => Ok(item.clone()),
            None => Err(self.not_found(id)),
        }
    }

    /// Replace every field of an existing item. The id is checked before
    /// the payload.
    pub fn update(&self, id: &str, payload: &ItemPayload) -> InventoryResult<Item> {
        let mut store = self.lock()?;
        if !store.contains(id) {
            return Err(self.not_found(id));
        }

        let fields = self.check(payload)?;
        let item = Item::from_fields(id, fields);
        store.put(id, item.clone());
        drop(store);

        self.metrics.increment_updated();
        tracing::info!(item_id = %id, "item updated");
        Ok(item)
    }

    pub fn delete(&self, id: &str) -> InventoryResult<()> {
        let removed = self.lock()?.delete(id);
        if removed.is_none() {
            return Err(self.not_found(id));
        }

        self.metrics.increment_deleted();
        tracing::info!(item_id = %id, "item deleted");
        Ok(())
    }
}

impl Default for InventoryHandler {
    fn default() -> Self {
        Self::new()
    }
}
