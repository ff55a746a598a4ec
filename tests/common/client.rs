//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per movie shop endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::{Method, Response};
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends an arbitrary request without a body.
    pub async fn request(&self, method: Method, path: &str) -> Response {
        self.client
            .request(method, self.url(path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Sends an arbitrary request with a JSON body.
    pub async fn request_json(&self, method: Method, path: &str, body: &Value) -> Response {
        self.client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    /// Sends an arbitrary request with a raw body and `application/json` content type.
    pub async fn request_raw(&self, method: Method, path: &str, body: &str) -> Response {
        self.client
            .request(method, self.url(path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.request(Method::GET, "/").await
    }

    // ========================================================================
    // Shop Endpoints
    // ========================================================================

    /// GET /shops
    pub async fn list_shops(&self) -> Response {
        self.request(Method::GET, "/shops").await
    }

    /// GET /shops/{id}
    pub async fn get_shop(&self, id: i64) -> Response {
        self.request(Method::GET, &format!("/shops/{}", id)).await
    }

    /// POST /shops
    pub async fn create_shop(&self, address: &str, manager: &str) -> Response {
        self.request_json(
            Method::POST,
            "/shops",
            &json!({ "address": address, "manager": manager }),
        )
        .await
    }

    /// PUT /shops/{id}
    pub async fn update_shop(&self, id: i64, address: &str, manager: &str) -> Response {
        self.request_json(
            Method::PUT,
            &format!("/shops/{}", id),
            &json!({ "address": address, "manager": manager }),
        )
        .await
    }

    /// DELETE /shops/{id}
    pub async fn delete_shop(&self, id: i64) -> Response {
        self.request(Method::DELETE, &format!("/shops/{}", id)).await
    }

    /// GET /shops/{id}/movies
    pub async fn list_shop_movies(&self, id: i64) -> Response {
        self.request(Method::GET, &format!("/shops/{}/movies", id))
            .await
    }

    /// GET /shops/{id}/movies/available
    pub async fn list_available_shop_movies(&self, id: i64) -> Response {
        self.request(Method::GET, &format!("/shops/{}/movies/available", id))
            .await
    }

    // ========================================================================
    // Movie Endpoints
    // ========================================================================

    /// GET /movies
    pub async fn list_movies(&self) -> Response {
        self.request(Method::GET, "/movies").await
    }

    /// GET /movies/{id}
    pub async fn get_movie(&self, id: i64) -> Response {
        self.request(Method::GET, &format!("/movies/{}", id)).await
    }

    /// POST /movies
    pub async fn create_movie(
        &self,
        name: &str,
        director: &str,
        genres: &[&str],
        shop: i64,
    ) -> Response {
        self.request_json(
            Method::POST,
            "/movies",
            &json!({
                "name": name,
                "director": director,
                "genres": genres,
                "shop": shop,
            }),
        )
        .await
    }

    /// PUT /movies/{id}
    pub async fn update_movie(
        &self,
        id: i64,
        name: &str,
        director: &str,
        genres: &[&str],
    ) -> Response {
        self.request_json(
            Method::PUT,
            &format!("/movies/{}", id),
            &json!({ "name": name, "director": director, "genres": genres }),
        )
        .await
    }

    /// PATCH /movies/{id}/rent
    pub async fn set_rent(&self, id: i64, rent: bool) -> Response {
        self.request_json(
            Method::PATCH,
            &format!("/movies/{}/rent", id),
            &json!({ "rent": rent }),
        )
        .await
    }

    /// PATCH /movies/{id}/move
    pub async fn move_movie(&self, id: i64, shop: i64) -> Response {
        self.request_json(
            Method::PATCH,
            &format!("/movies/{}/move", id),
            &json!({ "shop": shop }),
        )
        .await
    }

    /// DELETE /movies/{id}
    pub async fn delete_movie(&self, id: i64) -> Response {
        self.request(Method::DELETE, &format!("/movies/{}", id)).await
    }

    // ========================================================================
    // Search Endpoints
    // ========================================================================

    /// GET /search/movies
    ///
    /// Every genre is sent as its own `genres` parameter.
    pub async fn search_movies(
        &self,
        name: Option<&str>,
        director: Option<&str>,
        genres: &[&str],
    ) -> Response {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(name) = name {
            query.push(("name", name));
        }
        if let Some(director) = director {
            query.push(("director", director));
        }
        for genre in genres {
            query.push(("genres", genre));
        }

        self.client
            .get(self.url("/search/movies"))
            .query(&query)
            .send()
            .await
            .expect("Search request failed")
    }
}
