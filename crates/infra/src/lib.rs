mod config;
mod repos;

pub use config::Config;
pub use repos::{CompanyAttributes, CompanyPatch, CompanyQuery, ICompanyRepo, Repos};
use registro_domain::Company;

#[derive(Clone)]
pub struct RegistroContext {
    pub repos: Repos,
    pub config: Config,
}

impl RegistroContext {
    /// Context over the in-memory backend, seeded with `companies`.
    pub fn create_inmemory(companies: Vec<Company>) -> Self {
        Self {
            repos: Repos::create_inmemory(companies),
            config: Config::default(),
        }
    }

    /// Context over the remote HTTP backend at `base_url`.
    pub fn create_http(base_url: &str) -> Self {
        Self {
            repos: Repos::create_http(base_url),
            config: Config {
                api_base_url: base_url.to_string(),
            },
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> RegistroContext {
    let config = Config::new();
    RegistroContext {
        repos: Repos::create_http(&config.api_base_url),
        config,
    }
}
