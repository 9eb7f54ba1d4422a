//! Inventory operations for the Stockroom API
//!
//! All stock math (adjustments, valuations, reorder levels) happens on the
//! server; this client only requests it and caches the results.

mod types;

use reqwest::multipart;
use serde_json::json;

use crate::error::Error;
use crate::fetch::{decode_payload, error_from_body};
use crate::transport::{Transport, CLIENT_INFO};

pub use types::*;

/// Client for inventory operations
#[derive(Clone)]
pub struct InventoryClient {
    transport: Transport,
}

impl InventoryClient {
    /// Create a new InventoryClient
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List inventory items, optionally filtered server side
    pub async fn list(&self, query: &InventoryQuery) -> Result<Vec<InventoryItem>, Error> {
        let request = self.transport.get("/inventory").query(query.to_params());
        self.transport.run(request).await
    }

    /// Fetch a single item by sku
    pub async fn get(&self, sku: &str) -> Result<InventoryItem, Error> {
        let request = self.transport.get(&format!("/inventory/{}", sku));
        self.transport.run(request).await
    }

    /// Create a new item
    pub async fn create(&self, item: &NewInventoryItem) -> Result<InventoryItem, Error> {
        let request = self.transport.post("/inventory").json(item)?;
        self.transport.run(request).await
    }

    /// Update an existing item
    pub async fn update(&self, sku: &str, patch: &InventoryPatch) -> Result<InventoryItem, Error> {
        let request = self
            .transport
            .put(&format!("/inventory/{}", sku))
            .json(patch)?;
        self.transport.run(request).await
    }

    /// Delete an item
    pub async fn delete(&self, sku: &str) -> Result<(), Error> {
        let request = self.transport.delete(&format!("/inventory/{}", sku));
        self.transport.run_empty(request).await
    }

    /// Ask the server to adjust an item's quantity by a signed delta
    ///
    /// Returns the item as the server sees it after the adjustment.
    pub async fn adjust_quantity(&self, sku: &str, delta: f64) -> Result<InventoryItem, Error> {
        let request = self
            .transport
            .post(&format!("/inventory/{}/adjust", sku))
            .json(&json!({ "delta": delta }))?;
        self.transport.run(request).await
    }

    /// Upload an item image as `multipart/form-data`
    pub async fn upload_image(
        &self,
        sku: &str,
        file_data: Vec<u8>,
        file_name: &str,
    ) -> Result<InventoryItem, Error> {
        let url = self.transport.endpoint(&format!("/inventory/{}/image", sku));

        let form = multipart::Form::new().part(
            "image",
            multipart::Part::bytes(file_data).file_name(file_name.to_string()),
        );

        let mut request = self
            .transport
            .http()
            .post(&url)
            .header("X-Client-Info", CLIENT_INFO)
            .multipart(form);
        if let Some(token) = self.transport.bearer_token() {
            request = request.bearer_auth(&token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return self.transport.intercept(Err(error_from_body(status, &body)));
        }

        decode_payload(status, &body)
    }
}
