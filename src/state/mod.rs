//! State containers over the cached API data
//!
//! One container per resource, each a `{data, loading, error}` snapshot
//! mutated through a pure reducer. Containers are plain injected instances
//! built from the client, not module-level singletons.

mod auth;
mod dashboard;
mod inventory;
mod orders;
mod resource;

pub use auth::{AuthContainer, AuthSnapshot};
pub use dashboard::DashboardContainer;
pub use inventory::InventoryContainer;
pub use orders::OrdersContainer;
pub use resource::{reduce, ResourceAction, ResourceState};
