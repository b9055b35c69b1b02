pub mod favorite;
pub mod property;
pub mod types;

pub use favorite::FavoriteService;
pub use property::{PropertyService, DEFAULT_SIMILAR_LIMIT};
pub use types::{FavoritePatch, NewFavorite, SearchFilters};

use std::time::Duration;

/// Simulated network latency. The dataset lives in memory, so this exists
/// only to give consumers realistic loading states to render against.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Per-operation latencies, in milliseconds.
pub(crate) mod latency {
    pub const PROPERTY_GET_ALL: u64 = 300;
    pub const PROPERTY_GET_BY_ID: u64 = 200;
    pub const SEARCH: u64 = 400;
    pub const GET_SIMILAR: u64 = 250;

    pub const FAVORITE_GET_ALL: u64 = 200;
    pub const FAVORITE_GET_BY_ID: u64 = 150;
    pub const CREATE: u64 = 250;
    pub const UPDATE: u64 = 200;
    pub const DELETE: u64 = 200;
    pub const IS_FAVORITE: u64 = 100;
}
