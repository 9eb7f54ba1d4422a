//! Supplier operations for the Stockroom API

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::transport::Transport;

/// A supplier record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// The supplier ID
    pub supplier_id: i64,

    /// Company name
    pub name: String,

    /// Name of the contact person
    #[serde(default)]
    pub contact_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// Payload for creating or updating a supplier
#[derive(Debug, Clone, Serialize)]
pub struct NewSupplier {
    /// Company name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Client for supplier operations
#[derive(Clone)]
pub struct SuppliersClient {
    transport: Transport,
}

impl SuppliersClient {
    /// Create a new SuppliersClient
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List all suppliers
    pub async fn list(&self) -> Result<Vec<Supplier>, Error> {
        let request = self.transport.get("/suppliers");
        self.transport.run(request).await
    }

    /// Fetch a single supplier
    pub async fn get(&self, supplier_id: i64) -> Result<Supplier, Error> {
        let request = self.transport.get(&format!("/suppliers/{}", supplier_id));
        self.transport.run(request).await
    }

    /// Create a new supplier
    pub async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, Error> {
        let request = self.transport.post("/suppliers").json(supplier)?;
        self.transport.run(request).await
    }

    /// Update an existing supplier
    pub async fn update(&self, supplier_id: i64, supplier: &NewSupplier) -> Result<Supplier, Error> {
        let request = self
            .transport
            .put(&format!("/suppliers/{}", supplier_id))
            .json(supplier)?;
        self.transport.run(request).await
    }

    /// Delete a supplier
    pub async fn delete(&self, supplier_id: i64) -> Result<(), Error> {
        let request = self.transport.delete(&format!("/suppliers/{}", supplier_id));
        self.transport.run_empty(request).await
    }
}
