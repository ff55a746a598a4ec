//! Search API routes

use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use super::api_error::{ApiError, ApiQuery};
use super::state::{GuardedShopStore, ServerState};
use crate::shop_store::{Movie, MovieSearch};

/// `GET /search/movies?name=&director=&genres=&genres=`
async fn search_movies(
    State(store): State<GuardedShopStore>,
    ApiQuery(search): ApiQuery<MovieSearch>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let results = store.search_movies(&search)?;
    debug!("Search {:?} matched {} movies", search, results.len());
    Ok(Json(results))
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new()
        .route("/search/movies", get(search_movies))
        .with_state(state)
}
