use axum::extract::FromRef;

use crate::shop_store::ShopStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedShopStore = Arc<dyn ShopStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub shop_store: GuardedShopStore,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, shop_store: GuardedShopStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            shop_store,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedShopStore {
    fn from_ref(input: &ServerState) -> Self {
        input.shop_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
