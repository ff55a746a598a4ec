use anyhow::{Context, Result};
use std::time::Duration;

use axum::{
    extract::State,
    middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{error, info};

use super::api_error::ApiError;
use super::metrics::{self, metrics_handler};
use super::movie_routes::make_movie_routes;
use super::search::make_search_routes;
use super::shop_routes::make_shop_routes;
use super::state::{GuardedShopStore, ServerState};
use super::{log_requests, ServerConfig};
use crate::config::AppConfig;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub movies: usize,
    pub shops: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        movies: state.shop_store.movies_count(),
        shops: state.shop_store.shops_count(),
    };
    Json(stats)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub fn make_app(config: ServerConfig, shop_store: GuardedShopStore) -> Router {
    let state = ServerState::new(config, shop_store);

    let home_router: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone());

    home_router
        .merge(make_movie_routes(state.clone()))
        .merge(make_shop_routes(state.clone()))
        .merge(make_search_routes(state.clone()))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}

async fn run_metrics_server(listener: TcpListener) {
    let app = Router::new().route("/metrics", get(metrics_handler));
    if let Err(err) = axum::serve(listener, app).await {
        error!("Metrics server failed: {}", err);
    }
}

pub async fn run_server(shop_store: GuardedShopStore, app_config: &AppConfig) -> Result<()> {
    let config = ServerConfig {
        requests_logging_level: app_config.logging_level.clone(),
        port: app_config.port,
    };

    metrics::update_store_metrics(shop_store.movies_count(), shop_store.shops_count());

    if let Some(metrics_addr) = app_config.metrics_addr() {
        let metrics_listener = TcpListener::bind(metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!("Metrics available at {}/metrics", metrics_addr);
        tokio::spawn(run_metrics_server(metrics_listener));
    }

    let app = make_app(config, shop_store);

    let addr = app_config.server_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind server listener on {}", addr))?;
    info!("Ready to serve at {}!", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
