pub mod config;

pub use config::{debug_enabled, get_api_base_url, init_app_config, DEFAULT_API_URL};
