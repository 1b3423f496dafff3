use serde::Deserialize;

// API: https://learn.microsoft.com/en-us/bingmaps/rest-services/locations/local-search
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSearchResponse {
    pub resource_sets: Vec<ResourceSet>,
    pub status_code: u16,
    pub status_description: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSet {
    pub estimated_total: u32,
    pub resources: Vec<SearchResult>,
}

// Field casing on this resource is mixed, hence the explicit renames.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub name: String,
    pub point: Point,
    #[serde(rename = "Address")]
    pub address: Address,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    pub entity_type: String,
    #[serde(rename = "Website")]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Point {
    pub coordinates: Vec<f64>, // [latitude, longitude]
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line: String,
    pub formatted_address: String,
    pub locality: Option<String>,
    pub admin_district: Option<String>,
    pub country_region: Option<String>,
    pub postal_code: Option<String>,
}
