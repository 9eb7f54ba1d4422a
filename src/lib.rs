//! Stockroom Rust Client Library
//!
//! A Rust client library for the Stockroom inventory and order management
//! backend. It wraps the REST API behind typed per-resource clients (auth,
//! inventory, orders, customers, suppliers, dashboard) and layers
//! reducer-backed state containers on top for callers that want cached
//! `{data, loading, error}` snapshots instead of raw calls.
//!
//! The server owns all business logic; this crate translates domain calls
//! into HTTP, attaches the bearer token, normalizes the response envelope,
//! and keeps the session in the device key-value store.

pub mod auth;
pub mod config;
pub mod customers;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod orders;
pub mod selectors;
pub mod state;
pub mod suppliers;
pub mod vault;

mod fetch;
mod transport;

use std::sync::Arc;

use reqwest::Client;

use crate::auth::Auth;
use crate::config::ClientOptions;
use crate::customers::CustomersClient;
use crate::dashboard::DashboardClient;
use crate::error::Error;
use crate::inventory::InventoryClient;
use crate::orders::OrdersClient;
use crate::state::{AuthContainer, DashboardContainer, InventoryContainer, OrdersContainer};
use crate::suppliers::SuppliersClient;
use crate::transport::Transport;
use crate::vault::{MemoryVault, SessionVault, KEY_DARK_MODE};

/// The main entry point for the Stockroom Rust client
pub struct Stockroom {
    /// The base URL of the Stockroom backend
    pub url: String,
    /// Client options
    pub options: ClientOptions,
    transport: Transport,
    auth: Auth,
}

impl Stockroom {
    /// Create a new Stockroom client with an in-memory session store
    ///
    /// # Example
    ///
    /// ```
    /// use stockroom_client::Stockroom;
    ///
    /// let stockroom = Stockroom::new("https://stockroom.example.com");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new Stockroom client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use stockroom_client::{config::ClientOptions, Stockroom};
    ///
    /// let options = ClientOptions::default().with_persist_session(false);
    /// let stockroom = Stockroom::new_with_options("https://stockroom.example.com", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        Self::new_with_vault(base_url, Arc::new(MemoryVault::new()), options)
    }

    /// Create a new Stockroom client over a specific device store
    ///
    /// When `persist_session` is enabled and the vault holds the auth keys
    /// from an earlier run, the session is rehydrated immediately.
    pub fn new_with_vault(
        base_url: &str,
        vault: Arc<dyn SessionVault>,
        options: ClientOptions,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().unwrap_or_default();

        let transport = Transport::new(base_url, http_client, vault, options.clone());
        let auth = Auth::new(transport.clone());
        if options.persist_session {
            auth.restore_session();
        }

        Self {
            url: base_url.trim_end_matches('/').to_string(),
            options,
            transport,
            auth,
        }
    }

    /// Get a reference to the auth client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Create a client for inventory operations
    pub fn inventory(&self) -> InventoryClient {
        InventoryClient::new(self.transport.clone())
    }

    /// Create a client for order operations
    pub fn orders(&self) -> OrdersClient {
        OrdersClient::new(self.transport.clone())
    }

    /// Create a client for customer operations
    pub fn customers(&self) -> CustomersClient {
        CustomersClient::new(self.transport.clone())
    }

    /// Create a client for supplier operations
    pub fn suppliers(&self) -> SuppliersClient {
        SuppliersClient::new(self.transport.clone())
    }

    /// Create a client for dashboard reporting
    pub fn dashboard(&self) -> DashboardClient {
        DashboardClient::new(self.transport.clone())
    }

    /// Create a state container for authentication
    pub fn auth_container(&self) -> AuthContainer {
        AuthContainer::new(self.auth.clone())
    }

    /// Create a state container for the inventory list
    pub fn inventory_container(&self) -> InventoryContainer {
        InventoryContainer::new(self.inventory())
    }

    /// Create a state container for the order list
    pub fn orders_container(&self) -> OrdersContainer {
        OrdersContainer::new(self.orders())
    }

    /// Create a state container for the dashboard aggregate
    pub fn dashboard_container(&self) -> DashboardContainer {
        DashboardContainer::new(self.dashboard())
    }

    /// Read the persisted dark-mode preference
    pub fn is_dark_mode(&self) -> bool {
        self.transport
            .vault()
            .get(KEY_DARK_MODE)
            .map(|value| value == "true")
            .unwrap_or(false)
    }

    /// Persist the dark-mode preference
    pub fn set_dark_mode(&self, enabled: bool) -> Result<(), Error> {
        self.transport
            .vault()
            .set(KEY_DARK_MODE, if enabled { "true" } else { "false" })
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::Stockroom;
}
