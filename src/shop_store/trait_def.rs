//! ShopStore trait definition.
//!
//! The server only talks to the store through this trait, so handlers and
//! tests can run against any backend holding the two registries.

use super::error::StoreResult;
use super::models::{Movie, MovieId, MovieUpdate, NewMovie, NewShop, Shop, ShopId, ShopUpdate};
use super::search::MovieSearch;

/// Storage backend for shops and the movies they hold.
///
/// Implementations must keep every movie's `shop` field and its shop's
/// movie list consistent after each operation, and must apply each
/// operation atomically with respect to other callers.
pub trait ShopStore: Send + Sync {
    // =========================================================================
    // Shops
    // =========================================================================

    /// Create a shop with no movies.
    fn create_shop(&self, shop: NewShop) -> StoreResult<Shop>;

    fn get_shop(&self, id: ShopId) -> StoreResult<Shop>;

    /// All shops, in creation order.
    fn list_shops(&self) -> StoreResult<Vec<Shop>>;

    /// Replace address and manager. The shop's movies are left untouched.
    fn update_shop(&self, id: ShopId, update: ShopUpdate) -> StoreResult<Shop>;

    /// Delete a shop and every movie it owns.
    fn delete_shop(&self, id: ShopId) -> StoreResult<()>;

    // =========================================================================
    // Movies
    // =========================================================================

    /// Create a movie, not rented, and append it to its shop's movies.
    fn create_movie(&self, movie: NewMovie) -> StoreResult<Movie>;

    fn get_movie(&self, id: MovieId) -> StoreResult<Movie>;

    /// All movies, in creation order.
    fn list_movies(&self) -> StoreResult<Vec<Movie>>;

    /// Replace name, director and genres. Shop and rent flag are kept.
    fn update_movie(&self, id: MovieId, update: MovieUpdate) -> StoreResult<Movie>;

    fn set_movie_rent(&self, id: MovieId, rent: bool) -> StoreResult<Movie>;

    /// Delete a movie and drop it from its shop's movies.
    fn delete_movie(&self, id: MovieId) -> StoreResult<()>;

    /// Transfer a movie to another shop, appending it to that shop's movies.
    fn move_movie(&self, id: MovieId, new_shop: ShopId) -> StoreResult<Movie>;

    // =========================================================================
    // Derived queries
    // =========================================================================

    /// Movies owned by a shop, in the order they joined it.
    fn list_shop_movies(&self, shop: ShopId) -> StoreResult<Vec<Movie>>;

    /// Movies owned by a shop that are not rented.
    fn list_available_shop_movies(&self, shop: ShopId) -> StoreResult<Vec<Movie>> {
        Ok(self
            .list_shop_movies(shop)?
            .into_iter()
            .filter(Movie::is_available)
            .collect())
    }

    /// Movies across all shops matching every supplied filter.
    fn search_movies(&self, search: &MovieSearch) -> StoreResult<Vec<Movie>>;

    // =========================================================================
    // Counts (for metrics)
    // =========================================================================

    fn movies_count(&self) -> usize;

    fn shops_count(&self) -> usize;
}
