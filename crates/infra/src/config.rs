use tracing::info;

const API_BASE_URL: &str = "API_BASE_URL";
const DEFAULT_API_BASE_URL: &str = "/";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote companies API
    pub api_base_url: String,
}

impl Config {
    pub fn new() -> Self {
        let api_base_url = match std::env::var(API_BASE_URL) {
            Ok(url) => url,
            Err(_) => {
                info!(
                    "Did not find {} environment variable. Falling back to the default base url: {}",
                    API_BASE_URL, DEFAULT_API_BASE_URL
                );
                DEFAULT_API_BASE_URL.into()
            }
        };
        Self { api_base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
