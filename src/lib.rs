//! In-process core for a property-listing browser: an immutable listing
//! store with search and similarity queries, a favorites store that
//! broadcasts every mutation to subscribed views, and the pure
//! sorting/filter-normalization logic those views apply on top.
//!
//! The dataset is static and lives in memory for the life of the process;
//! service calls simulate network latency so consumers can exercise their
//! loading states.

pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod views;

pub use error::{Error, Result};
pub use models::{Favorite, Property, PropertyType};
pub use services::{
    delay, FavoritePatch, FavoriteService, NewFavorite, PropertyService, SearchFilters,
    DEFAULT_SIMILAR_LIMIT,
};
