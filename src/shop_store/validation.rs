//! Validation for shop and movie inputs.
//!
//! Runs before any registry mutation so that a rejected input leaves the
//! store untouched.

use super::models::{MovieUpdate, NewMovie, NewShop, ShopUpdate};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn require_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

pub fn validate_new_movie(movie: &NewMovie) -> ValidationResult<()> {
    require_text("name", &movie.name)?;
    require_text("director", &movie.director)
}

pub fn validate_movie_update(update: &MovieUpdate) -> ValidationResult<()> {
    require_text("name", &update.name)?;
    require_text("director", &update.director)
}

pub fn validate_new_shop(shop: &NewShop) -> ValidationResult<()> {
    require_text("address", &shop.address)?;
    require_text("manager", &shop.manager)
}

pub fn validate_shop_update(update: &ShopUpdate) -> ValidationResult<()> {
    require_text("address", &update.address)?;
    require_text("manager", &update.manager)
}
