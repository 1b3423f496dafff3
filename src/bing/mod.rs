mod api;
mod client;
mod domain;

pub use api::{BingError, BingMapsApi, EntitySearch};
pub use client::{BingClientError, new_client};
