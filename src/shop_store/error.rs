use super::models::{MovieId, ShopId};
use super::validation::ValidationError;
use thiserror::Error;

/// Message carried by every "movie not found" error.
pub const MOVIE_NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Message carried by every "shop not found" error.
pub const SHOP_NOT_FOUND_MESSAGE: &str = "Shop not found";

/// Errors returned by shop store operations.
///
/// A failed operation never mutates the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}", MOVIE_NOT_FOUND_MESSAGE)]
    MovieNotFound(MovieId),

    #[error("{}", SHOP_NOT_FOUND_MESSAGE)]
    ShopNotFound(ShopId),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;
