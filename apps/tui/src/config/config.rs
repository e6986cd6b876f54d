use dotenv::dotenv;
use std::env;

/// Backend address used when no override is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Initializes the application configuration.
/// Returns the backend base URL.
pub fn init_app_config() -> String {
    // Load environment variables from .env file
    dotenv().ok();

    get_api_base_url()
}

/// Gets the backend base URL from the environment.
pub fn get_api_base_url() -> String {
    env::var("PROSPECT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Whether debug diagnostics were requested (`--debug` or `DEBUG=1`).
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}
