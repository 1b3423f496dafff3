use crate::app_config::AppConfig;
use reqwest::Client;
use thiserror::Error;

/// Builds the HTTP client used for all Bing Maps calls. The API key is not
/// part of the client; Bing takes it as a query parameter on every request.
pub fn new_client(config: &AppConfig) -> Result<Client, BingClientError> {
    let client = Client::builder().timeout(config.bing().request_timeout()).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum BingClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
