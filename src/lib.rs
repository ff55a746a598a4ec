//! Movie Shop Server Library
//!
//! In-memory movie shop inventory exposed over a JSON HTTP API.

pub mod config;
pub mod server;
pub mod shop_store;

// Re-export commonly used types for convenience
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use shop_store::{InMemoryShopStore, ShopStore};
