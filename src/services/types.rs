use crate::models::PropertyType;
use serde::{Deserialize, Serialize};

/// Search criteria for property queries.
///
/// Every field is optional; an absent field imposes no constraint. All
/// predicates are AND-composed, numeric bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Matched case-insensitively as a substring of the address or MLS number
    pub search_location: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub bedrooms_min: Option<i32>,
    pub bathrooms_min: Option<i32>,
    pub square_feet_min: Option<i32>,
    /// Listing type must be a member when non-empty
    #[serde(default)]
    pub property_types: Vec<PropertyType>,
}

impl SearchFilters {
    /// True when no field constrains the result set.
    pub fn is_unconstrained(&self) -> bool {
        self.search_location.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.bedrooms_min.is_none()
            && self.bathrooms_min.is_none()
            && self.square_feet_min.is_none()
            && self.property_types.is_empty()
    }
}

/// Payload for bookmarking a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFavorite {
    pub property_id: String,
    pub notes: Option<String>,
}

/// Partial update for a favorite. The record id is not patchable; the
/// type simply has no field for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritePatch {
    pub notes: Option<String>,
}
