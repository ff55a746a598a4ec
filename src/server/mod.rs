pub mod api_error;
pub mod config;
mod http_layers;
pub mod metrics;
mod movie_routes;
mod search;
#[allow(clippy::module_inception)]
pub mod server;
mod shop_routes;
pub mod state;

pub use api_error::ApiError;
pub use config::ServerConfig;
pub use http_layers::*;
pub use server::{make_app, run_server};
