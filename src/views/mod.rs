//! Derived view logic: pure sorting, filter normalization and the
//! favorites join, applied client-side to collections the services have
//! already returned.

use crate::models::{Favorite, Property, PropertyType};
use crate::services::SearchFilters;
use std::str::FromStr;
use tracing::warn;

/// Sort orders a browse view offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySort {
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    BedsHigh,
    SqftHigh,
}

/// Sort in place. Stable, so ties keep their incoming relative order.
pub fn sort_properties(properties: &mut [Property], sort: PropertySort) {
    match sort {
        PropertySort::Newest => {
            properties.sort_by(|a, b| b.listing_date.cmp(&a.listing_date));
        }
        PropertySort::Oldest => {
            properties.sort_by(|a, b| a.listing_date.cmp(&b.listing_date));
        }
        PropertySort::PriceLow => properties.sort_by(|a, b| a.price.cmp(&b.price)),
        PropertySort::PriceHigh => properties.sort_by(|a, b| b.price.cmp(&a.price)),
        PropertySort::BedsHigh => properties.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms)),
        PropertySort::SqftHigh => {
            properties.sort_by(|a, b| b.square_feet.cmp(&a.square_feet));
        }
    }
}

/// A favorite joined with the listing it references.
#[derive(Debug, Clone)]
pub struct SavedListing {
    pub property: Property,
    pub favorite: Favorite,
}

/// Join favorites against the property collection by parsed `property_id`.
/// Dangling references are tolerated by contract and simply dropped.
pub fn join_favorites(properties: &[Property], favorites: &[Favorite]) -> Vec<SavedListing> {
    favorites
        .iter()
        .filter_map(|favorite| {
            let matched = favorite
                .property_id
                .parse::<i64>()
                .ok()
                .and_then(|id| properties.iter().find(|p| p.id == id));
            match matched {
                Some(property) => Some(SavedListing {
                    property: property.clone(),
                    favorite: favorite.clone(),
                }),
                None => {
                    warn!(
                        "favorite {} references unknown property {:?}",
                        favorite.id, favorite.property_id
                    );
                    None
                }
            }
        })
        .collect()
}

/// Sort orders the favorites page offers, keyed on when the bookmark was
/// saved rather than on listing fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteSort {
    RecentlySaved,
    OldestSaved,
}

pub fn sort_saved(saved: &mut [SavedListing], sort: FavoriteSort) {
    match sort {
        FavoriteSort::RecentlySaved => {
            saved.sort_by(|a, b| b.favorite.saved_date.cmp(&a.favorite.saved_date));
        }
        FavoriteSort::OldestSaved => {
            saved.sort_by(|a, b| a.favorite.saved_date.cmp(&b.favorite.saved_date));
        }
    }
}

/// String-typed filter inputs as a form control holds them, before
/// normalization.
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    pub search_location: String,
    pub price_min: String,
    pub price_max: String,
    pub bedrooms_min: String,
    pub bathrooms_min: String,
    pub square_feet_min: String,
    pub property_types: Vec<PropertyType>,
}

impl FilterForm {
    /// Produce the filters a search accepts: empty fields impose no
    /// constraint, numeric-looking text parses to integers, and text that
    /// fails to parse is treated as unset.
    pub fn normalize(&self) -> SearchFilters {
        SearchFilters {
            search_location: non_empty(&self.search_location),
            price_min: parse_numeric(&self.price_min),
            price_max: parse_numeric(&self.price_max),
            bedrooms_min: parse_numeric(&self.bedrooms_min),
            bathrooms_min: parse_numeric(&self.bathrooms_min),
            square_feet_min: parse_numeric(&self.square_feet_min),
            property_types: self.property_types.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_numeric<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}
