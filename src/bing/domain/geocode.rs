use serde::Deserialize;

// API: https://learn.microsoft.com/en-us/bingmaps/rest-services/locations/find-a-location-by-address
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    pub resource_sets: Vec<GeocodeResourceSet>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResourceSet {
    pub estimated_total: u32,
    pub resources: Vec<GeocodeResult>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub name: Option<String>,
    pub confidence: Option<String>,
    pub geocode_points: Vec<GeocodePoint>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodePoint {
    pub coordinates: Vec<f64>, // [latitude, longitude]
    pub calculation_method: Option<String>,
    pub usage_types: Option<Vec<String>>,
}
