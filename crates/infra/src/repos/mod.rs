mod company;

use company::{HttpCompanyRepo, InMemoryCompanyRepo};
pub use company::{CompanyAttributes, CompanyPatch, CompanyQuery, ICompanyRepo};
use registro_domain::Company;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub company_repo: Arc<dyn ICompanyRepo>,
}

impl Repos {
    pub fn create_inmemory(seed: Vec<Company>) -> Self {
        Self {
            company_repo: Arc::new(InMemoryCompanyRepo::with_seed(seed)),
        }
    }

    pub fn create_http(base_url: &str) -> Self {
        Self {
            company_repo: Arc::new(HttpCompanyRepo::new(base_url)),
        }
    }
}
