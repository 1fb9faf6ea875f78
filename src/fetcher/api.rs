use crate::config::AppConfig;
use crate::fetcher::traits::Fetcher;
use crate::model::FetchError;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

/// Fetches election records from the Election Guide API with token auth.
pub struct ApiFetcher {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiFetcher {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("eguide-export/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            endpoint: config.api_endpoint.clone(),
            token: config.api_token.clone(),
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for ApiFetcher {
    async fn fetch(&self) -> Result<Vec<Value>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .send()
            .await
            .inspect_err(|e| error!("Error making API request: {}", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Unable to fetch data from the API. Status code: {}", status);
            return Err(FetchError::Status(status));
        }

        let records: Vec<Value> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        if records.is_empty() {
            return Err(FetchError::Empty);
        }

        info!("API returned {} election records", records.len());
        Ok(records)
    }
}
