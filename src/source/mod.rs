//! The one outbound data fetch performed when the list is created.

mod error;

pub use error::FetchError;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::config::SourceConfig;
use crate::restaurant::{dedup_by_id, Restaurant};

/// Where restaurants come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantSource {
    /// GET request returning a JSON array.
    Http { url: String },
    /// Local file holding a JSON array.
    File { path: PathBuf },
}

impl RestaurantSource {
    /// Interprets `location` as an HTTP(S) URL when it has that scheme,
    /// otherwise as a file path.
    pub fn parse(location: &str) -> Result<Self, FetchError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(FetchError::InvalidSource(location.to_string()));
        }
        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(Self::Http {
                url: location.to_string(),
            });
        }
        Ok(Self::File {
            path: PathBuf::from(location),
        })
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http { url } => url.clone(),
            Self::File { path } => path.display().to_string(),
        }
    }
}

/// Fetches the collection once, bounded by a total timeout.
pub struct Fetcher {
    client: Client,
    source: RestaurantSource,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(source: RestaurantSource, request_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(request_timeout)
            .build()
            .map_err(|e| FetchError::Request {
                url: source.describe(),
                source: e,
            })?;

        Ok(Self {
            client,
            source,
            timeout: request_timeout,
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        let source = RestaurantSource::parse(&config.location)?;
        Self::new(source, Duration::from_secs(u64::from(config.timeout_seconds)))
    }

    pub fn source(&self) -> &RestaurantSource {
        &self.source
    }

    /// Fetches and decodes the collection. Duplicate ids are dropped so the
    /// returned list already satisfies the unique-id invariant.
    pub async fn fetch(&self) -> Result<Vec<Restaurant>, FetchError> {
        let origin = self.source.describe();
        tracing::info!(source = %origin, "fetching restaurants");

        let body = match timeout(self.timeout, self.fetch_body()).await {
            Ok(body) => body?,
            Err(_) => {
                return Err(FetchError::Timeout {
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        let mut restaurants: Vec<Restaurant> =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode {
                origin: origin.clone(),
                source: e,
            })?;

        let dropped = dedup_by_id(&mut restaurants);
        if dropped > 0 {
            tracing::warn!(source = %origin, dropped, "dropped restaurants with duplicate ids");
        }

        tracing::info!(source = %origin, count = restaurants.len(), "restaurants fetched");
        Ok(restaurants)
    }

    async fn fetch_body(&self) -> Result<String, FetchError> {
        match &self.source {
            RestaurantSource::Http { url } => {
                let response = self
                    .client
                    .get(url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await
                    .map_err(|e| FetchError::Request {
                        url: url.clone(),
                        source: e,
                    })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }

                response.text().await.map_err(|e| FetchError::Request {
                    url: url.clone(),
                    source: e,
                })
            }
            RestaurantSource::File { path } => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| FetchError::Read {
                    path: path.clone(),
                    source: e,
                }),
        }
    }
}
