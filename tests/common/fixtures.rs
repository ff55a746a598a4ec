//! Catalog seeding through the public API

use super::client::TestClient;
use super::constants::*;
use reqwest::StatusCode;
use serde_json::Value;

/// Ids assigned to the seeded entities.
///
/// Shop 1 holds Inception and Memento, shop 2 holds Alien.
pub struct SeededCatalog {
    pub shop_1: i64,
    pub shop_2: i64,
    pub inception: i64,
    pub memento: i64,
    pub alien: i64,
}

async fn created_id(response: reqwest::Response) -> i64 {
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Invalid JSON body");
    body["id"].as_i64().expect("Missing id in created entity")
}

pub async fn seed_catalog(client: &TestClient) -> SeededCatalog {
    let shop_1 = created_id(client.create_shop(SHOP_1_ADDRESS, SHOP_1_MANAGER).await).await;
    let shop_2 = created_id(client.create_shop(SHOP_2_ADDRESS, SHOP_2_MANAGER).await).await;

    let inception = created_id(
        client
            .create_movie(INCEPTION_NAME, INCEPTION_DIRECTOR, INCEPTION_GENRES, shop_1)
            .await,
    )
    .await;
    let memento = created_id(
        client
            .create_movie(MEMENTO_NAME, MEMENTO_DIRECTOR, MEMENTO_GENRES, shop_1)
            .await,
    )
    .await;
    let alien = created_id(
        client
            .create_movie(ALIEN_NAME, ALIEN_DIRECTOR, ALIEN_GENRES, shop_2)
            .await,
    )
    .await;

    SeededCatalog {
        shop_1,
        shop_2,
        inception,
        memento,
        alien,
    }
}
