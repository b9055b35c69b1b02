use openhouse::data::{ListingSource, SeedData};
use openhouse::views::{self, PropertySort};
use openhouse::{
    FavoriteService, NewFavorite, PropertyService, PropertyType, SearchFilters,
    DEFAULT_SIMILAR_LIMIT,
};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Openhouse - Property Listing Browser");
    info!("==========================================");
    info!("");

    // Load the bundled dataset and stand up the stores
    let source = SeedData;
    let dataset = source.load().await?;
    info!(
        "Loaded {} listings and {} favorites from {} data",
        dataset.properties.len(),
        dataset.favorites.len(),
        source.source_name()
    );

    let properties = PropertyService::new(dataset.properties);
    let favorites = FavoriteService::new(dataset.favorites);
    let mut updates = favorites.subscribe();

    // Browse: filtered search, then client-side sort
    let filters = SearchFilters {
        price_min: Some(500_000),
        property_types: vec![PropertyType::Condo, PropertyType::Townhouse],
        ..Default::default()
    };
    let mut results = properties.search(&filters).await;
    views::sort_properties(&mut results, PropertySort::PriceLow);

    info!("\n✅ Found {} matching listings\n", results.len());

    for (i, property) in results.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            property.address,
            PropertyService::format_price(property.price)
        );
        println!(
            "   {} bed, {} bath, {} sqft",
            property.bedrooms,
            property.bathrooms,
            PropertyService::format_square_feet(property.square_feet)
        );
        println!("   {} · MLS {}", property.property_type, property.mls_number);
        println!("   Features: {}", property.features.join(", "));
        println!();
    }

    // Bookmark the cheapest match and watch the subscription fire
    if let Some(pick) = results.first() {
        let saved = favorites
            .create(NewFavorite {
                property_id: pick.id.to_string(),
                notes: Some("Tour this weekend".to_string()),
            })
            .await;
        info!("⭐ Saved favorite {} for {}", saved.id, pick.address);

        let snapshot = updates.recv().await?;
        info!("Subscription now tracks {} favorites", snapshot.len());

        let similar = properties.get_similar(pick.id, DEFAULT_SIMILAR_LIMIT).await;
        info!("\nSimilar to {}:\n", pick.address);
        for property in &similar {
            println!(
                "   {} ({})",
                property.address,
                PropertyService::format_price(property.price)
            );
        }
    }

    Ok(())
}
