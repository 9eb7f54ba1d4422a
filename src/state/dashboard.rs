//! Dashboard state container

use std::sync::Arc;

use crate::dashboard::{DashboardClient, DashboardSnapshot};
use crate::error::Error;
use crate::state::resource::{ResourceState, Store};

/// State container for the dashboard aggregate
///
/// Each refresh replaces the snapshot wholesale; there is no merging.
#[derive(Clone)]
pub struct DashboardContainer {
    api: DashboardClient,
    store: Arc<Store<DashboardSnapshot>>,
}

impl DashboardContainer {
    pub(crate) fn new(api: DashboardClient) -> Self {
        Self {
            api,
            store: Arc::new(Store::new()),
        }
    }

    /// Fetch the aggregate for a month/year and commit it
    pub async fn refresh(&self, month: u32, year: i32) -> Result<(), Error> {
        let ticket = self.store.begin();

        match self.api.snapshot(month, year).await {
            Ok(snapshot) => {
                self.store.settle(ticket, Ok(snapshot));
                Ok(())
            }
            Err(err) => {
                self.store.settle(ticket, Err(err.to_string()));
                Err(err)
            }
        }
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> ResourceState<DashboardSnapshot> {
        self.store.snapshot()
    }
}
