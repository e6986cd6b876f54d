use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::api::models::{Country, NewCountry, RankingEntry};

/// Errors surfaced by the backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API client not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// HTTP client for the scoring backend. Requests are awaited one at a
/// time by the callers; there are no retries and no request timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /countries` — the full country list, replacing the cache.
    pub async fn list_countries(&self) -> Result<Vec<Country>, ApiError> {
        let url = format!("{}/countries", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// `POST /countries`. A non-2xx status usually means a name
    /// collision; the created record is discarded since the caller
    /// refetches the list afterwards.
    pub async fn create_country(&self, country: &NewCountry) -> Result<(), ApiError> {
        let url = format!("{}/countries", self.base_url);
        let response = self.client.post(&url).json(country).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }

    /// `POST /score` — the server-computed ranking, best first.
    pub async fn rank_countries(&self) -> Result<Vec<RankingEntry>, ApiError> {
        let url = format!("{}/score", self.base_url);
        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = ApiClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
