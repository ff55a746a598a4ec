//! Shop API routes

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::api_error::{ApiError, ApiJson, ApiPath};
use super::state::{GuardedShopStore, ServerState};
use crate::shop_store::{Movie, NewShop, Shop, ShopId, ShopUpdate};

async fn list_shops(State(store): State<GuardedShopStore>) -> Result<Json<Vec<Shop>>, ApiError> {
    Ok(Json(store.list_shops()?))
}

async fn get_shop(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<ShopId>,
) -> Result<Json<Shop>, ApiError> {
    Ok(Json(store.get_shop(id)?))
}

async fn post_shop(
    State(store): State<GuardedShopStore>,
    ApiJson(body): ApiJson<NewShop>,
) -> Result<impl IntoResponse, ApiError> {
    let shop = store.create_shop(body)?;
    Ok((StatusCode::CREATED, Json(shop)))
}

async fn put_shop(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<ShopId>,
    ApiJson(body): ApiJson<ShopUpdate>,
) -> Result<Json<Shop>, ApiError> {
    Ok(Json(store.update_shop(id, body)?))
}

async fn delete_shop(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<ShopId>,
) -> Result<StatusCode, ApiError> {
    store.delete_shop(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_shop_movies(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<ShopId>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(store.list_shop_movies(id)?))
}

async fn get_shop_available_movies(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<ShopId>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(store.list_available_shop_movies(id)?))
}

pub fn make_shop_routes(state: ServerState) -> Router {
    Router::new()
        .route("/shops", get(list_shops).post(post_shop))
        .route(
            "/shops/{id}",
            get(get_shop).put(put_shop).delete(delete_shop),
        )
        .route("/shops/{id}/movies", get(get_shop_movies))
        .route("/shops/{id}/movies/available", get(get_shop_available_movies))
        .with_state(state)
}
