//! Dashboard reporting for the Stockroom API
//!
//! The dashboard is a read-only aggregate the server computes per
//! month/year; each fetch replaces the previous snapshot wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Error;
use crate::transport::Transport;

/// Aggregated inventory counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTotals {
    /// Number of distinct items
    pub total_items: i64,

    /// Total stock value at current unit prices
    pub total_value: f64,

    /// Items with no stock on hand
    pub out_of_stock: i64,

    /// Items at or below their reorder level
    pub low_stock: i64,
}

/// Aggregated sales counts for the selected period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    /// Orders placed in the period
    pub order_count: i64,

    /// Revenue for the period
    pub revenue: f64,

    /// Orders still awaiting fulfilment
    pub pending_orders: i64,
}

/// One bucket of the activity breakdown (e.g. per day or per category)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityBucket {
    /// Bucket label as the server names it
    pub label: String,

    /// Count within the bucket
    pub count: i64,
}

/// The dashboard aggregate for one month/year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// The month the snapshot covers (1-12)
    pub month: u32,

    /// The year the snapshot covers
    pub year: i32,

    /// Inventory totals
    pub inventory: InventoryTotals,

    /// Sales totals
    pub sales: SalesTotals,

    /// Activity breakdown
    #[serde(default)]
    pub activity: Vec<ActivityBucket>,
}

/// Client for dashboard reporting
#[derive(Clone)]
pub struct DashboardClient {
    transport: Transport,
}

impl DashboardClient {
    /// Create a new DashboardClient
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the aggregate for a month/year
    pub async fn snapshot(&self, month: u32, year: i32) -> Result<DashboardSnapshot, Error> {
        let mut params = HashMap::new();
        params.insert("month".to_string(), month.to_string());
        params.insert("year".to_string(), year.to_string());

        let request = self.transport.get("/dashboard").query(params);
        self.transport.run(request).await
    }
}
