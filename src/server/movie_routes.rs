//! Movie API routes

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;

use super::api_error::{ApiError, ApiJson, ApiPath};
use super::state::{GuardedShopStore, ServerState};
use crate::shop_store::{Movie, MovieId, MovieUpdate, NewMovie, ShopId};

#[derive(Deserialize, Debug)]
struct RentBody {
    pub rent: bool,
}

#[derive(Deserialize, Debug)]
struct MoveBody {
    pub shop: ShopId,
}

async fn list_movies(State(store): State<GuardedShopStore>) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(store.list_movies()?))
}

async fn get_movie(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<MovieId>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(store.get_movie(id)?))
}

async fn post_movie(
    State(store): State<GuardedShopStore>,
    ApiJson(body): ApiJson<NewMovie>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = store.create_movie(body)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn put_movie(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<MovieId>,
    ApiJson(body): ApiJson<MovieUpdate>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(store.update_movie(id, body)?))
}

async fn patch_movie_rent(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<MovieId>,
    ApiJson(body): ApiJson<RentBody>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(store.set_movie_rent(id, body.rent)?))
}

async fn patch_movie_move(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<MovieId>,
    ApiJson(body): ApiJson<MoveBody>,
) -> Result<Json<Movie>, ApiError> {
    Ok(Json(store.move_movie(id, body.shop)?))
}

async fn delete_movie(
    State(store): State<GuardedShopStore>,
    ApiPath(id): ApiPath<MovieId>,
) -> Result<StatusCode, ApiError> {
    store.delete_movie(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn make_movie_routes(state: ServerState) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(post_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(put_movie).delete(delete_movie),
        )
        .route("/movies/{id}/rent", patch(patch_movie_rent))
        .route("/movies/{id}/move", patch(patch_movie_move))
        .with_state(state)
}
