use super::{CompanyAttributes, CompanyPatch, CompanyQuery, ICompanyRepo};
use registro_domain::{cnpj::strip_cnpj, Company, Entity, ID};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

const SIMULATED_LATENCY: Duration = Duration::from_millis(25);

/// In-memory stand-in for the HTTP repository, with an artificial delay so
/// callers exercise the same asynchronous contract as a network call.
///
/// Mutations commit under the lock before the delay starts; a caller that
/// drops a pending future still gets the write.
pub struct InMemoryCompanyRepo {
    store: Mutex<Store>,
    latency: Duration,
}

struct Store {
    companies: Vec<Company>,
    next_id: ID,
}

impl InMemoryCompanyRepo {
    pub fn with_seed(companies: Vec<Company>) -> Self {
        let next_id = companies
            .iter()
            .map(|c| c.id())
            .max()
            .map(ID::next)
            .unwrap_or_else(|| ID::new(1));
        Self {
            store: Mutex::new(Store { companies, next_id }),
            latency: SIMULATED_LATENCY,
        }
    }
}

fn matches(company: &Company, query: &CompanyQuery) -> bool {
    if let Some(name) = &query.name {
        if !company.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }
    if let Some(value) = &query.cnpj {
        if strip_cnpj(&company.cnpj) != strip_cnpj(value) {
            return false;
        }
    }
    if let Some(email) = &query.email {
        if !company.email.eq_ignore_ascii_case(email) {
            return false;
        }
    }
    true
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn find_many(&self, query: &CompanyQuery) -> anyhow::Result<Vec<Company>> {
        let companies = {
            let store = self.store.lock().unwrap();
            store
                .companies
                .iter()
                .filter(|c| matches(c, query))
                .cloned()
                .collect()
        };
        sleep(self.latency).await;
        Ok(companies)
    }

    async fn find(&self, company_id: &ID) -> anyhow::Result<Option<Company>> {
        let company = {
            let store = self.store.lock().unwrap();
            store
                .companies
                .iter()
                .find(|c| c.id() == *company_id)
                .cloned()
        };
        sleep(self.latency).await;
        Ok(company)
    }

    async fn insert(&self, attributes: CompanyAttributes) -> anyhow::Result<Company> {
        let company = {
            let mut store = self.store.lock().unwrap();
            let id = store.next_id;
            store.next_id = id.next();
            let company = Company::new(id, attributes.name, attributes.cnpj, attributes.email);
            store.companies.push(company.clone());
            company
        };
        sleep(self.latency).await;
        Ok(company)
    }

    async fn update(
        &self,
        company_id: &ID,
        patch: CompanyPatch,
    ) -> anyhow::Result<Option<Company>> {
        let updated = {
            let mut store = self.store.lock().unwrap();
            store
                .companies
                .iter_mut()
                .find(|c| c.id() == *company_id)
                .map(|company| {
                    if let Some(name) = patch.name {
                        company.name = name;
                    }
                    if let Some(cnpj) = patch.cnpj {
                        company.cnpj = cnpj;
                    }
                    if let Some(email) = patch.email {
                        company.email = email;
                    }
                    company.clone()
                })
        };
        sleep(self.latency).await;
        Ok(updated)
    }

    async fn delete(&self, company_id: &ID) -> anyhow::Result<()> {
        {
            let mut store = self.store.lock().unwrap();
            store.companies.retain(|c| c.id() != *company_id);
        }
        sleep(self.latency).await;
        Ok(())
    }
}
