use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a listed property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    #[serde(rename = "Single Family Home")]
    SingleFamilyHome,
    Condo,
    Townhouse,
    #[serde(rename = "Multi-Family")]
    MultiFamily,
    Land,
}

impl PropertyType {
    /// All known types, in the order filter UIs present them
    pub const ALL: [PropertyType; 5] = [
        PropertyType::SingleFamilyHome,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::MultiFamily,
        PropertyType::Land,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::SingleFamilyHome => "Single Family Home",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Land => "Land",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Core listing data model, immutable once loaded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: i64,
    pub address: String,
    pub price: i64,
    pub bedrooms: i32,
    /// Half-bath counts make this fractional in .5 steps
    pub bathrooms: f32,
    pub square_feet: i32,
    pub property_type: PropertyType,
    pub listing_date: DateTime<Utc>,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub mls_number: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A user bookmark referencing a listing by id.
///
/// `property_id` is a foreign reference, not ownership: the favorites store
/// never validates it against the property collection, so a dangling
/// reference simply yields no match when joined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: i64,
    pub property_id: String,
    pub saved_date: DateTime<Utc>,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_serde_names_carry_spaces() {
        let json = serde_json::to_string(&PropertyType::SingleFamilyHome).unwrap();
        assert_eq!(json, "\"Single Family Home\"");
        let back: PropertyType = serde_json::from_str("\"Multi-Family\"").unwrap();
        assert_eq!(back, PropertyType::MultiFamily);
    }

    #[test]
    fn test_property_type_label_matches_serde() {
        for ty in PropertyType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.label()));
        }
    }
}
