//! Shared constants for end-to-end tests
//!
//! When fixture data changes, update only this file.

// ============================================================================
// Error messages
// ============================================================================

pub use movie_shop_server::shop_store::{MOVIE_NOT_FOUND_MESSAGE, SHOP_NOT_FOUND_MESSAGE};

// ============================================================================
// Shops
// ============================================================================

pub const SHOP_1_ADDRESS: &str = "Cine Center";
pub const SHOP_1_MANAGER: &str = "Eva";

pub const SHOP_2_ADDRESS: &str = "Video Club";
pub const SHOP_2_MANAGER: &str = "Max";

// ============================================================================
// Movies
// ============================================================================

pub const INCEPTION_NAME: &str = "Inception";
pub const INCEPTION_DIRECTOR: &str = "Christopher Nolan";
pub const INCEPTION_GENRES: &[&str] = &["Sci-Fi", "Thriller"];

pub const MEMENTO_NAME: &str = "Memento";
pub const MEMENTO_DIRECTOR: &str = "Christopher Nolan";
pub const MEMENTO_GENRES: &[&str] = &["Thriller", "Mystery"];

pub const ALIEN_NAME: &str = "Alien";
pub const ALIEN_DIRECTOR: &str = "Ridley Scott";
pub const ALIEN_GENRES: &[&str] = &["Sci-Fi", "Horror"];

/// An id no fixture ever reaches.
pub const MISSING_ID: i64 = 999;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to answer `GET /`
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Per-request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
