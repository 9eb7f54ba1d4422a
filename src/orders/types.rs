//! Types for orders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An order as the server reports it
///
/// `status` is a server-defined string; the client displays it and requests
/// transitions but never computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The order ID
    pub order_id: i64,

    /// Name of the customer the order belongs to
    pub customer_name: String,

    /// Total cost as computed by the server
    pub total_cost: f64,

    /// When the order was placed
    pub order_date: DateTime<Utc>,

    /// Server-defined status string
    pub status: String,
}

/// One line of a new order
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    /// The item being ordered
    pub sku: String,

    /// Quantity ordered, in the item's unit of measure
    pub quantity: f64,
}

/// Payload for creating an order; pricing and totals are server side
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    /// The customer placing the order
    pub customer_id: i64,

    /// The order lines
    pub items: Vec<OrderLine>,

    /// Optional free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Server-side filters for listing orders
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    /// Restrict to a month (1-12); meaningful together with `year`
    pub month: Option<u32>,

    /// Restrict to a year
    pub year: Option<i32>,

    /// Restrict to one status
    pub status: Option<String>,
}

impl OrderQuery {
    pub(crate) fn to_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(month) = self.month {
            params.insert("month".to_string(), month.to_string());
        }
        if let Some(year) = self.year {
            params.insert("year".to_string(), year.to_string());
        }
        if let Some(status) = &self.status {
            params.insert("status".to_string(), status.clone());
        }
        params
    }
}
