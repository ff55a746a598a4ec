//! Shop and movie records.
//!
//! `Movie` is stored as-is in the movie registry. Shops are stored as
//! `ShopRecord` (scalar fields only) and materialized into `Shop`, with the
//! owned movies resolved from the shop's movie index, whenever they are read.

use serde::{Deserialize, Serialize};

pub type MovieId = i64;
pub type ShopId = i64;

// =============================================================================
// Entities
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub director: String,
    pub genres: Vec<String>,
    /// Id of the owning shop.
    pub shop: ShopId,
    /// `true` while the movie is rented out.
    pub rent: bool,
}

impl Movie {
    pub fn is_available(&self) -> bool {
        !self.rent
    }
}

/// Shop as returned to callers, with its movies in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub address: String,
    pub manager: String,
    pub movies: Vec<Movie>,
}

/// Shop as held by the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopRecord {
    pub id: ShopId,
    pub address: String,
    pub manager: String,
}

// =============================================================================
// Inputs
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub director: String,
    pub genres: Vec<String>,
    pub shop: ShopId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MovieUpdate {
    pub name: String,
    pub director: String,
    pub genres: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewShop {
    pub address: String,
    pub manager: String,
}

/// Replaces a shop's scalar fields. It carries no movie list: a shop's
/// movies only change through movie operations.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShopUpdate {
    pub address: String,
    pub manager: String,
}
