use crate::api::models::{Country, NewCountry, RankingEntry};
use crate::api::{ApiClient, ApiError};
use crate::config::init_app_config;

/// Async facade over the backend client, owned by `App`.
#[derive(Debug)]
pub struct AppActions {
    pub base_url: String,
    pub api: Option<ApiClient>,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            api: None,
        }
    }

    /// Reads configuration and builds the HTTP client.
    pub fn initialize(&mut self) {
        let base_url = init_app_config();
        self.api = Some(ApiClient::new(base_url.clone()));
        self.base_url = base_url;
    }

    pub async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        self.client()?.list_countries().await
    }

    pub async fn create_country(&self, country: &NewCountry) -> Result<(), ApiError> {
        self.client()?.create_country(country).await
    }

    pub async fn fetch_ranking(&self) -> Result<Vec<RankingEntry>, ApiError> {
        self.client()?.rank_countries().await
    }

    fn client(&self) -> Result<&ApiClient, ApiError> {
        self.api.as_ref().ok_or(ApiError::NotConfigured)
    }
}
