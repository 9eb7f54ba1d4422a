//! Orders state container

use chrono::Utc;
use std::sync::Arc;

use crate::error::Error;
use crate::orders::{Order, OrderQuery, OrdersClient};
use crate::state::resource::{ResourceAction, ResourceState, Store};

/// State container for the cached order list
#[derive(Clone)]
pub struct OrdersContainer {
    api: OrdersClient,
    store: Arc<Store<Vec<Order>>>,
}

impl OrdersContainer {
    pub(crate) fn new(api: OrdersClient) -> Self {
        Self {
            api,
            store: Arc::new(Store::new()),
        }
    }

    /// Fetch the order list and commit it
    pub async fn load(&self, query: &OrderQuery) -> Result<(), Error> {
        let ticket = self.store.begin();

        match self.api.list(query).await {
            Ok(orders) => {
                self.store.settle(ticket, Ok(orders));
                Ok(())
            }
            Err(err) => {
                self.store.settle(ticket, Err(err.to_string()));
                Err(err)
            }
        }
    }

    /// Request a status transition and re-commit the updated order
    pub async fn set_status(&self, order_id: i64, status: &str) -> Result<Order, Error> {
        match self.api.set_status(order_id, status).await {
            Ok(updated) => {
                let committed = updated.clone();
                self.store.mutate(|state| {
                    if let Some(orders) = &mut state.data {
                        if let Some(existing) = orders
                            .iter_mut()
                            .find(|order| order.order_id == committed.order_id)
                        {
                            *existing = committed;
                        }
                    }
                    state.error = None;
                    state.last_updated = Some(Utc::now());
                });
                Ok(updated)
            }
            Err(err) => {
                self.store.dispatch(ResourceAction::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> ResourceState<Vec<Order>> {
        self.store.snapshot()
    }
}
