use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    bing: Bing,
    search: Search,
    location: Location,
    export: Export,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn bing(&self) -> &Bing {
        &self.bing
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn export(&self) -> &Export {
        &self.export
    }
}

#[derive(Debug, Deserialize)]
pub struct Bing {
    url: String,
    api_key: String,
    max_results: u8,
    request_timeout_ms: u64,
}

impl Bing {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn max_results(&self) -> u8 {
        self.max_results
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
pub struct Search {
    entity1: String,
    entity2: String,
}

impl Search {
    pub fn entity1(&self) -> &str {
        &self.entity1
    }

    pub fn entity2(&self) -> &str {
        &self.entity2
    }
}

/// Where the search is centered. Either a coordinate pair or a street
/// address to be geocoded at startup; coordinates win when both are set.
#[derive(Debug, Deserialize)]
pub struct Location {
    latitude: Option<f64>,
    longitude: Option<f64>,
    address: Option<String>,
    postal_code: Option<String>,
}

impl Location {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Export {
    directory: String,
}

impl Export {
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                bing: Bing {
                    url: "https://bing.url".to_string(),
                    api_key: "key".to_string(),
                    max_results: 25,
                    request_timeout_ms: 1_000,
                },
                search: Search {
                    entity1: "verizon".to_string(),
                    entity2: "chipotle".to_string(),
                },
                location: Location {
                    latitude: Some(38.896593209560756),
                    longitude: Some(-77.02620469830747),
                    address: None,
                    postal_code: None,
                },
                export: Export { directory: "data".to_string() },
            },
        }
    }

    pub fn bing_url(mut self, url: String) -> Self {
        self.config.bing.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
