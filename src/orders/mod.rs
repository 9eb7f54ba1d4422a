//! Order operations for the Stockroom API

mod types;

use serde_json::json;

use crate::error::Error;
use crate::transport::Transport;

pub use types::*;

/// Client for order operations
#[derive(Clone)]
pub struct OrdersClient {
    transport: Transport,
}

impl OrdersClient {
    /// Create a new OrdersClient
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List orders, optionally filtered server side
    pub async fn list(&self, query: &OrderQuery) -> Result<Vec<Order>, Error> {
        let request = self.transport.get("/orders").query(query.to_params());
        self.transport.run(request).await
    }

    /// Fetch a single order
    pub async fn get(&self, order_id: i64) -> Result<Order, Error> {
        let request = self.transport.get(&format!("/orders/{}", order_id));
        self.transport.run(request).await
    }

    /// Create a new order
    pub async fn create(&self, order: &NewOrder) -> Result<Order, Error> {
        let request = self.transport.post("/orders").json(order)?;
        self.transport.run(request).await
    }

    /// Request a status transition
    ///
    /// The server validates the transition and responds with the order in
    /// its resulting state.
    pub async fn set_status(&self, order_id: i64, status: &str) -> Result<Order, Error> {
        let request = self
            .transport
            .patch(&format!("/orders/{}/status", order_id))
            .json(&json!({ "status": status }))?;
        self.transport.run(request).await
    }

    /// Delete an order
    pub async fn delete(&self, order_id: i64) -> Result<(), Error> {
        let request = self.transport.delete(&format!("/orders/{}", order_id));
        self.transport.run_empty(request).await
    }
}
