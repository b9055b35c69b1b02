use crate::error::Result;
use crate::models::{Favorite, Property};
use async_trait::async_trait;
use tracing::debug;

/// The two static record collections loaded once at process start.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub properties: Vec<Property>,
    pub favorites: Vec<Favorite>,
}

/// Common trait for dataset providers.
/// This allows swapping the bundled seed for a real feed later without
/// touching the services, which only see the loaded collections.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full dataset from the source
    async fn load(&self) -> Result<Dataset>;

    /// Get the name of the dataset source
    fn source_name(&self) -> &'static str;
}

/// The bundled seed dataset, embedded at compile time.
pub struct SeedData;

static PROPERTIES_JSON: &str = include_str!("properties.json");
static FAVORITES_JSON: &str = include_str!("favorites.json");

/// Parse the embedded seed records.
pub fn seed() -> Result<Dataset> {
    let properties: Vec<Property> = serde_json::from_str(PROPERTIES_JSON)?;
    let favorites: Vec<Favorite> = serde_json::from_str(FAVORITES_JSON)?;
    debug!(
        "Loaded seed dataset: {} properties, {} favorites",
        properties.len(),
        favorites.len()
    );
    Ok(Dataset {
        properties,
        favorites,
    })
}

#[async_trait]
impl ListingSource for SeedData {
    async fn load(&self) -> Result<Dataset> {
        seed()
    }

    fn source_name(&self) -> &'static str {
        "seed"
    }
}
