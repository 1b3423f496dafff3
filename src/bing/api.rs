use crate::app_config::AppConfig;
use crate::bing::domain::{GeocodeResponse, LocalSearchResponse};
use crate::domain::{CoordinateError, EntitySet, GeoPoint, LocatedEntity};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

/// The one search interface the rest of the tool depends on: a query term, a
/// result cap and a reference coordinate in, a fully geocoded entity set out.
#[async_trait]
pub trait EntitySearch {
    async fn search(&self, query: &str, max_results: u8, near: &GeoPoint) -> Result<EntitySet, BingError>;
}

/// Typed access to the Bing Maps REST API. The key is an explicit
/// constructor-time value taken from configuration and travels as a query
/// parameter on every call.
pub struct BingMapsApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BingMapsApi {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        BingMapsApi {
            client,
            base_url: config.bing().url().to_string(),
            api_key: config.bing().api_key().to_string(),
        }
    }

    /// Resolves a street address to coordinates. Bing returns one or more
    /// geocode points per match; the last one is the routable point, which
    /// is the one a vicinity search should center on.
    #[instrument(skip(self))]
    pub async fn geocode(&self, address: &str, postal_code: Option<&str>) -> Result<GeoPoint, BingError> {
        info!("Geocoding '{address}'...");

        let mut params = vec![
            ("countryRegion", "US".to_string()),
            ("addressLine", address.to_string()),
            ("inclnb", "1".to_string()),
            ("maxResults", "1".to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(postal_code) = postal_code {
            params.push(("postalCode", postal_code.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/Locations", self.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        let geocode_response = response.json::<GeocodeResponse>().await?;
        let point = geocode_response
            .resource_sets
            .first()
            .and_then(|set| set.resources.first())
            .and_then(|resource| resource.geocode_points.last())
            .ok_or_else(|| BingError::NoGeocodeMatch { address: address.to_string() })?;
        let coordinates = geo_point_from(&point.coordinates, address)?;

        info!("Geocoding '{address}'... OK, {coordinates}");
        Ok(coordinates)
    }
}

#[async_trait]
impl EntitySearch for BingMapsApi {
    /// Local search around `near`. Bing caps `max_results` at 25. A result
    /// without a usable coordinate pair fails the whole fetch; downstream
    /// distance computation only ever sees fully geocoded sets.
    #[instrument(skip(self, near))]
    async fn search(&self, query: &str, max_results: u8, near: &GeoPoint) -> Result<EntitySet, BingError> {
        info!("Searching nearby '{query}'...");

        let response = self
            .client
            .get(format!("{}/LocalSearch/", self.base_url))
            .query(&[
                ("query", query),
                ("userLocation", &near.to_string()),
                ("maxResults", &max_results.to_string()),
                ("key", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let search_response = response.json::<LocalSearchResponse>().await?;
        let resource_set = search_response
            .resource_sets
            .into_iter()
            .next()
            .ok_or(BingError::EmptyResponse)?;

        let entities = resource_set
            .resources
            .into_iter()
            .map(|result| {
                let coordinates = geo_point_from(&result.point.coordinates, &result.name)?;
                Ok(LocatedEntity::new(
                    result.name,
                    &result.address.address_line,
                    result.phone_number,
                    result.entity_type,
                    result.address.formatted_address,
                    coordinates,
                ))
            })
            .collect::<Result<EntitySet, BingError>>()?;

        info!("Searching nearby '{query}'... OK, {} found", entities.len());
        Ok(entities)
    }
}

fn geo_point_from(coordinates: &[f64], name: &str) -> Result<GeoPoint, BingError> {
    match coordinates {
        [latitude, longitude] => Ok(GeoPoint::new(*latitude, *longitude)?),
        _ => Err(BingError::MissingCoordinate { name: name.to_string() }),
    }
}

#[derive(Error, Debug)]
pub enum BingError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("response contained no resource sets")]
    EmptyResponse,
    #[error("result '{name}' has no usable coordinate pair")]
    MissingCoordinate { name: String },
    #[error("no geocode match for address '{address}'")]
    NoGeocodeMatch { address: String },
    #[error("response carried an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn api_for(server: &mockito::Server) -> BingMapsApi {
        let config = AppConfigBuilder::new().bing_url(server.url()).build();
        BingMapsApi::new(Client::new(), &config)
    }

    #[test(tokio::test)]
    async fn search_maps_results_into_an_entity_set() -> Result<(), BingError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/LocalSearch/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "verizon".into()),
                Matcher::UrlEncoded("userLocation".into(), "38.896593209560756,-77.02620469830747".into()),
                Matcher::UrlEncoded("maxResults".into(), "25".into()),
                Matcher::UrlEncoded("key".into(), "key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/local_search_response.json"))
            .create_async()
            .await;

        let api = api_for(&server);
        let near = GeoPoint::new(38.896593209560756, -77.02620469830747).unwrap();

        let entities = api.search("verizon", 25, &near).await?;

        mock.assert();
        assert_eq!(entities.len(), 2);
        assert_eq!(
            entities.iter().next().unwrap(),
            &LocatedEntity::new(
                "Verizon".to_string(),
                "1100 S Hayes St",
                Some("(703) 414-7047".to_string()),
                "BusinessToBusiness".to_string(),
                "1100 S Hayes St, Arlington, VA, 22202".to_string(),
                GeoPoint::new(38.86317, -77.06172).unwrap(),
            )
        );
        assert!(entities.get("Verizon - 529 14th St NW").is_some());

        Ok(())
    }

    #[test(tokio::test)]
    async fn search_fails_when_a_result_has_no_coordinates() {
        let mut server = mockito::Server::new_async().await;

        let body = json!({
            "resourceSets": [{
                "estimatedTotal": 1,
                "resources": [{
                    "name": "Verizon",
                    "entityType": "BusinessToBusiness",
                    "Address": {
                        "addressLine": "1100 S Hayes St",
                        "formattedAddress": "1100 S Hayes St, Arlington, VA, 22202"
                    },
                    "point": { "coordinates": [] }
                }]
            }],
            "statusCode": 200,
            "statusDescription": "OK"
        });
        let _mock = server
            .mock("GET", "/LocalSearch/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let api = api_for(&server);
        let near = GeoPoint::new(38.8966, -77.0262).unwrap();

        let result = api.search("verizon", 25, &near).await;

        assert!(matches!(result, Err(BingError::MissingCoordinate { name }) if name == "Verizon"));
    }

    #[test(tokio::test)]
    async fn search_fails_on_a_non_success_status() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server.mock("GET", "/LocalSearch/").with_status(500).create_async().await;

        let api = api_for(&server);
        let near = GeoPoint::new(38.8966, -77.0262).unwrap();

        let result = api.search("verizon", 25, &near).await;

        assert!(matches!(result, Err(BingError::RequestError(_))));
    }

    #[test(tokio::test)]
    async fn geocode_takes_the_last_geocode_point() -> Result<(), BingError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/Locations")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("addressLine".into(), "1600 Pennsylvania Ave NW".into()),
                Matcher::UrlEncoded("postalCode".into(), "20500".into()),
                Matcher::UrlEncoded("maxResults".into(), "1".into()),
                Matcher::UrlEncoded("key".into(), "key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/geocode_response.json"))
            .create_async()
            .await;

        let api = api_for(&server);

        let coordinates = api.geocode("1600 Pennsylvania Ave NW", Some("20500")).await?;

        mock.assert();
        assert_eq!(coordinates, GeoPoint::new(38.897668, -77.036556).unwrap());

        Ok(())
    }

    #[test(tokio::test)]
    async fn geocode_fails_when_nothing_matches() {
        let mut server = mockito::Server::new_async().await;

        let body = json!({ "resourceSets": [{ "estimatedTotal": 0, "resources": [] }] });
        let _mock = server
            .mock("GET", "/Locations")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let api = api_for(&server);

        let result = api.geocode("nowhere at all", None).await;

        assert!(matches!(result, Err(BingError::NoGeocodeMatch { .. })));
    }
}
