mod error;
mod in_memory;
mod models;
mod search;
mod trait_def;
mod validation;

pub use error::{StoreError, StoreResult, MOVIE_NOT_FOUND_MESSAGE, SHOP_NOT_FOUND_MESSAGE};
pub use in_memory::InMemoryShopStore;
pub use models::*;
pub use search::MovieSearch;
pub use trait_def::ShopStore;
pub use validation::ValidationError;
