mod geocode;
mod local_search;

pub use geocode::GeocodeResponse;
pub use local_search::LocalSearchResponse;
