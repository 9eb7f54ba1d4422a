//! Inventory state container

use chrono::Utc;
use std::sync::Arc;

use crate::error::Error;
use crate::inventory::{InventoryClient, InventoryItem, InventoryQuery, NewInventoryItem};
use crate::state::resource::{ResourceAction, ResourceState, Store};

/// State container for the cached inventory list
#[derive(Clone)]
pub struct InventoryContainer {
    api: InventoryClient,
    store: Arc<Store<Vec<InventoryItem>>>,
}

impl InventoryContainer {
    pub(crate) fn new(api: InventoryClient) -> Self {
        Self {
            api,
            store: Arc::new(Store::new()),
        }
    }

    /// Fetch the inventory list and commit it
    ///
    /// Overlapping loads each issue a request, but only the latest one's
    /// response is committed.
    pub async fn load(&self, query: &InventoryQuery) -> Result<(), Error> {
        let ticket = self.store.begin();

        match self.api.list(query).await {
            Ok(items) => {
                self.store.settle(ticket, Ok(items));
                Ok(())
            }
            Err(err) => {
                self.store.settle(ticket, Err(err.to_string()));
                Err(err)
            }
        }
    }

    /// Create or update an item, keyed by sku
    ///
    /// An item whose sku is already in the cache goes through update,
    /// anything else through create. The server's version of the record is
    /// committed back into the cache.
    pub async fn save(&self, item: &NewInventoryItem) -> Result<InventoryItem, Error> {
        let exists = self
            .store
            .snapshot()
            .data
            .map(|items| items.iter().any(|existing| existing.sku == item.sku))
            .unwrap_or(false);

        let result = if exists {
            self.api.update(&item.sku, &item.as_patch()).await
        } else {
            self.api.create(item).await
        };

        match result {
            Ok(saved) => {
                self.commit_item(saved.clone());
                Ok(saved)
            }
            Err(err) => {
                self.store.dispatch(ResourceAction::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Delete an item and drop it from the cache
    pub async fn remove(&self, sku: &str) -> Result<(), Error> {
        match self.api.delete(sku).await {
            Ok(()) => {
                self.store.mutate(|state| {
                    if let Some(items) = &mut state.data {
                        items.retain(|item| item.sku != sku);
                    }
                    state.error = None;
                    state.last_updated = Some(Utc::now());
                });
                Ok(())
            }
            Err(err) => {
                self.store.dispatch(ResourceAction::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    fn commit_item(&self, saved: InventoryItem) {
        self.store.mutate(|state| {
            let items = state.data.get_or_insert_with(Vec::new);
            match items.iter_mut().find(|existing| existing.sku == saved.sku) {
                Some(existing) => *existing = saved,
                None => items.push(saved),
            }
            state.error = None;
            state.last_updated = Some(Utc::now());
        });
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> ResourceState<Vec<InventoryItem>> {
        self.store.snapshot()
    }
}
