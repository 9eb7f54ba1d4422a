//! Customer operations for the Stockroom API

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::transport::Transport;

/// A customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// The customer ID
    pub customer_id: i64,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// Payload for creating or updating a customer
#[derive(Debug, Clone, Serialize)]
pub struct NewCustomer {
    /// Display name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Client for customer operations
#[derive(Clone)]
pub struct CustomersClient {
    transport: Transport,
}

impl CustomersClient {
    /// Create a new CustomersClient
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List all customers
    pub async fn list(&self) -> Result<Vec<Customer>, Error> {
        let request = self.transport.get("/customers");
        self.transport.run(request).await
    }

    /// Fetch a single customer
    pub async fn get(&self, customer_id: i64) -> Result<Customer, Error> {
        let request = self.transport.get(&format!("/customers/{}", customer_id));
        self.transport.run(request).await
    }

    /// Create a new customer
    pub async fn create(&self, customer: &NewCustomer) -> Result<Customer, Error> {
        let request = self.transport.post("/customers").json(customer)?;
        self.transport.run(request).await
    }

    /// Update an existing customer
    pub async fn update(&self, customer_id: i64, customer: &NewCustomer) -> Result<Customer, Error> {
        let request = self
            .transport
            .put(&format!("/customers/{}", customer_id))
            .json(customer)?;
        self.transport.run(request).await
    }

    /// Delete a customer
    pub async fn delete(&self, customer_id: i64) -> Result<(), Error> {
        let request = self.transport.delete(&format!("/customers/{}", customer_id));
        self.transport.run_empty(request).await
    }
}
