//! Movie search filters.
//!
//! A movie matches when every supplied, non-empty filter holds:
//! - `name` and `director` are case-insensitive substring matches
//! - every non-empty `genres` term must appear verbatim in the movie's genres

use super::models::Movie;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovieSearch {
    pub name: Option<String>,
    pub director: Option<String>,
    pub genres: Vec<String>,
}

impl MovieSearch {
    pub fn by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn by_director(director: &str) -> Self {
        Self {
            director: Some(director.to_string()),
            ..Default::default()
        }
    }

    pub fn by_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genres: genres.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Returns the compiled form of this search, with lowercased text terms
    /// and empty terms dropped.
    pub fn compile(&self) -> CompiledSearch<'_> {
        CompiledSearch {
            name: non_empty(self.name.as_deref()).map(str::to_lowercase),
            director: non_empty(self.director.as_deref()).map(str::to_lowercase),
            genres: self
                .genres
                .iter()
                .map(String::as_str)
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub struct CompiledSearch<'a> {
    name: Option<String>,
    director: Option<String>,
    genres: Vec<&'a str>,
}

impl CompiledSearch<'_> {
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none() && self.director.is_none() && self.genres.is_empty()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(name) = &self.name {
            if !movie.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(director) = &self.director {
            if !movie.director.to_lowercase().contains(director.as_str()) {
                return false;
            }
        }
        self.genres
            .iter()
            .all(|genre| movie.genres.iter().any(|g| g == genre))
    }
}
