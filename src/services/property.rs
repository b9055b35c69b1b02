use crate::error::{Error, Result};
use crate::models::Property;
use crate::services::{delay, latency, SearchFilters};
use tracing::debug;

/// How many similar listings a detail view shows by default
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Read-only store for the listing collection.
///
/// The collection is provided at construction and never mutated; every
/// query returns owned copies so callers can sort and filter freely.
pub struct PropertyService {
    properties: Vec<Property>,
}

impl PropertyService {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Full collection, in load order.
    pub async fn get_all(&self) -> Vec<Property> {
        delay(latency::PROPERTY_GET_ALL).await;
        self.properties.clone()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Property> {
        delay(latency::PROPERTY_GET_BY_ID).await;
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found("property", id))
    }

    /// Apply the AND-composed filter predicates, preserving load order.
    pub async fn search(&self, filters: &SearchFilters) -> Vec<Property> {
        delay(latency::SEARCH).await;
        let results: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| Self::matches(p, filters))
            .cloned()
            .collect();
        debug!(
            "search matched {} of {} listings",
            results.len(),
            self.properties.len()
        );
        results
    }

    fn matches(property: &Property, filters: &SearchFilters) -> bool {
        if let Some(term) = &filters.search_location {
            let term = term.to_lowercase();
            if !property.address.to_lowercase().contains(&term)
                && !property.mls_number.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if let Some(min) = filters.price_min {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = filters.price_max {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = filters.bedrooms_min {
            if property.bedrooms < min {
                return false;
            }
        }
        if let Some(min) = filters.bathrooms_min {
            if property.bathrooms < min as f32 {
                return false;
            }
        }
        if let Some(min) = filters.square_feet_min {
            if property.square_feet < min {
                return false;
            }
        }
        if !filters.property_types.is_empty()
            && !filters.property_types.contains(&property.property_type)
        {
            return false;
        }
        true
    }

    /// Listings comparable to `id`: same type, price within 20% of the
    /// source, bedroom count within 1. Filter-then-truncate in load order,
    /// no ranking. An unknown `id` yields an empty result, not an error.
    pub async fn get_similar(&self, id: i64, limit: usize) -> Vec<Property> {
        delay(latency::GET_SIMILAR).await;
        let Some(source) = self.properties.iter().find(|p| p.id == id) else {
            debug!("get_similar: no listing with id {id}");
            return Vec::new();
        };

        let price_band = source.price as f64 * 0.2;
        self.properties
            .iter()
            .filter(|p| {
                p.id != source.id
                    && p.property_type == source.property_type
                    && (p.price - source.price).abs() as f64 <= price_band
                    && (p.bedrooms - source.bedrooms).abs() <= 1
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// "$1,234,567" — grouped, no decimals
    pub fn format_price(price: i64) -> String {
        if price < 0 {
            format!("-${}", group_thousands(price.unsigned_abs()))
        } else {
            format!("${}", group_thousands(price as u64))
        }
    }

    /// "1,234" — grouped integer
    pub fn format_square_feet(square_feet: i32) -> String {
        let grouped = group_thousands(square_feet.unsigned_abs() as u64);
        if square_feet < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use chrono::{TimeZone, Utc};

    fn listing(id: i64, price: i64, bedrooms: i32, property_type: PropertyType) -> Property {
        Property {
            id,
            address: format!("{id} Test Street, Portside, CA"),
            price,
            bedrooms,
            bathrooms: 2.0,
            square_feet: 1500,
            property_type,
            listing_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            images: vec![format!("https://images.example/{id}.jpg")],
            description: String::new(),
            features: vec![],
            mls_number: format!("MLS-{id:04}"),
            latitude: 37.5,
            longitude: -122.2,
        }
    }

    fn mixed_dataset() -> Vec<Property> {
        vec![
            listing(1, 500_000, 3, PropertyType::Condo),
            listing(2, 540_000, 3, PropertyType::Condo),
            listing(3, 700_000, 3, PropertyType::Condo),
            listing(4, 850_000, 4, PropertyType::SingleFamilyHome),
            listing(5, 620_000, 3, PropertyType::Townhouse),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_all_returns_load_order() {
        let service = PropertyService::new(mixed_dataset());
        let all = service.get_all().await;
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_by_id_missing_is_not_found() {
        let service = PropertyService::new(mixed_dataset());
        assert_eq!(service.get_by_id(2).await.unwrap().id, 2);
        let err = service.get_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_unconstrained_returns_everything() {
        let service = PropertyService::new(mixed_dataset());
        let results = service.search(&SearchFilters::default()).await;
        assert_eq!(results.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_price_bounds_inclusive() {
        let service = PropertyService::new(mixed_dataset());
        let filters = SearchFilters {
            price_min: Some(540_000),
            price_max: Some(700_000),
            ..Default::default()
        };
        let results = service.search(&filters).await;
        assert!(results
            .iter()
            .all(|p| p.price >= 540_000 && p.price <= 700_000));
        let ids: Vec<i64> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_price_and_type_keeps_relative_order() {
        let service = PropertyService::new(mixed_dataset());
        let filters = SearchFilters {
            price_min: Some(600_000),
            property_types: vec![PropertyType::Condo],
            ..Default::default()
        };
        let results = service.search(&filters).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 3);
        assert!(results
            .iter()
            .all(|p| p.property_type == PropertyType::Condo && p.price >= 600_000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_location_matches_address_or_mls() {
        let mut dataset = mixed_dataset();
        dataset[3].address = "42 Maple Hollow Drive, Cedar Falls, CA".to_string();
        let service = PropertyService::new(dataset);

        let by_address = service
            .search(&SearchFilters {
                search_location: Some("cedar falls".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].id, 4);

        let by_mls = service
            .search(&SearchFilters {
                search_location: Some("mls-0002".to_string()),
                ..Default::default()
            })
            .await;
        assert_eq!(by_mls.len(), 1);
        assert_eq!(by_mls[0].id, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_bedrooms_and_sqft_lower_bounds() {
        let mut dataset = mixed_dataset();
        dataset[4].square_feet = 2200;
        let service = PropertyService::new(dataset);
        let filters = SearchFilters {
            bedrooms_min: Some(3),
            square_feet_min: Some(2200),
            ..Default::default()
        };
        let results = service.search(&filters).await;
        assert!(results
            .iter()
            .all(|p| p.bedrooms >= 3 && p.square_feet >= 2200));
        assert_eq!(results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_bathrooms_min_against_fractional_counts() {
        let mut dataset = mixed_dataset();
        dataset[0].bathrooms = 1.5;
        let service = PropertyService::new(dataset);
        let filters = SearchFilters {
            bathrooms_min: Some(2),
            ..Default::default()
        };
        let results = service.search(&filters).await;
        assert!(results.iter().all(|p| p.bathrooms >= 2.0));
        assert!(!results.iter().any(|p| p.id == 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_similar_price_band_and_bedrooms() {
        // 540k is 8% from 500k, in band; 700k is 40% out, excluded
        let service = PropertyService::new(mixed_dataset());
        let similar = service.get_similar(1, DEFAULT_SIMILAR_LIMIT).await;
        let ids: Vec<i64> = similar.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        for p in &similar {
            assert_eq!(p.property_type, PropertyType::Condo);
            assert!((p.price - 500_000).abs() as f64 <= 0.2 * 500_000.0);
            assert!((p.bedrooms - 3).abs() <= 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_similar_excludes_source_and_truncates() {
        let dataset = vec![
            listing(1, 500_000, 3, PropertyType::Condo),
            listing(2, 510_000, 3, PropertyType::Condo),
            listing(3, 520_000, 4, PropertyType::Condo),
            listing(4, 530_000, 2, PropertyType::Condo),
            listing(5, 540_000, 3, PropertyType::Condo),
        ];
        let service = PropertyService::new(dataset);
        let similar = service.get_similar(1, 2).await;
        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|p| p.id != 1));
        // load order, filter-then-truncate
        let ids: Vec<i64> = similar.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_similar_unknown_id_is_empty() {
        let service = PropertyService::new(mixed_dataset());
        assert!(service.get_similar(99, DEFAULT_SIMILAR_LIMIT).await.is_empty());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(PropertyService::format_price(500_000), "$500,000");
        assert_eq!(PropertyService::format_price(1_234_567), "$1,234,567");
        assert_eq!(PropertyService::format_price(950), "$950");
        assert_eq!(PropertyService::format_price(0), "$0");
    }

    #[test]
    fn test_format_square_feet() {
        assert_eq!(PropertyService::format_square_feet(1480), "1,480");
        assert_eq!(PropertyService::format_square_feet(980), "980");
        assert_eq!(PropertyService::format_square_feet(0), "0");
    }
}
