use crate::app_config::AppConfig;
use crate::bing::{BingMapsApi, EntitySearch};
use crate::domain::{EntitySet, GeoPoint};
use crate::proximity::ProximityCalculator;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::info;

mod app_config;
mod bing;
mod domain;
mod export;
mod proximity;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let client = bing::new_client(&config)?;
    let api = BingMapsApi::new(client, &config);

    let home = home_location(&api, &config).await?;
    info!("✅  Search centered on {}", home);

    let export_dir = Path::new(config.export().directory());
    fs::create_dir_all(export_dir)?;

    let entity1 = config.search().entity1();
    let entity2 = config.search().entity2();
    let set_a = fetch_entity_set(&api, &config, entity1, &home).await?;
    let set_b = fetch_entity_set(&api, &config, entity2, &home).await?;

    export::write_entity_set(export_dir, entity1, &set_a)?;
    export::write_entity_set(export_dir, entity2, &set_b)?;
    let entities_path = export_dir.join("entities.csv");
    export::write_combined_entities(&entities_path, &[&set_a, &set_b])?;
    info!("✅  Exported entity tables to {}", export_dir.display());

    let mut calculator = ProximityCalculator::new();
    let ranked = calculator.compute(&set_a, &set_b);
    let distances_path = export_dir.join("distances.csv");
    export::write_distances(&distances_path, ranked)?;
    info!("✅  Exported {} ranked pairs to {}", ranked.len(), distances_path.display());

    if let Some(closest) = ranked.first() {
        info!("🔥 Closest pair: {} and {} at {:.2} miles", closest.entity1, closest.entity2, closest.distance);
    }

    Ok(())
}

/// The home coordinate the searches center on, taken verbatim from the
/// configuration or geocoded from a configured street address.
async fn home_location(api: &BingMapsApi, config: &AppConfig) -> Result<GeoPoint, Box<dyn Error>> {
    if let Some((latitude, longitude)) = config.location().coordinates() {
        return Ok(GeoPoint::new(latitude, longitude)?);
    }

    match config.location().address() {
        Some(address) => Ok(api.geocode(address, config.location().postal_code()).await?),
        None => Err("the [location] section must set latitude/longitude or an address".into()),
    }
}

async fn fetch_entity_set(
    api: &impl EntitySearch,
    config: &AppConfig,
    query: &str,
    home: &GeoPoint,
) -> Result<EntitySet, Box<dyn Error>> {
    api.search(query, config.bing().max_results(), home)
        .await
        .map_err(|e| format!("fetching the entity set for '{query}' failed: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::bing::BingError;
    use async_trait::async_trait;

    struct FailingSearch;

    #[async_trait]
    impl EntitySearch for FailingSearch {
        async fn search(&self, _query: &str, _max_results: u8, _near: &GeoPoint) -> Result<EntitySet, BingError> {
            Err(BingError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn fetch_entity_set_names_the_failing_query() {
        let config = AppConfigBuilder::new().build();
        let home = GeoPoint::new(38.8966, -77.0262).unwrap();

        let error = fetch_entity_set(&FailingSearch, &config, "chipotle", &home).await.unwrap_err();

        let message = error.to_string();
        assert!(message.contains("'chipotle'"), "got: {message}");
        assert!(message.contains("no resource sets"), "got: {message}");
    }
}
