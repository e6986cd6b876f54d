// API module for country-prospector
// HTTP client and wire types for the scoring backend

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiError};
