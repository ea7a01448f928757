use super::{CompanyAttributes, CompanyPatch, CompanyQuery, ICompanyRepo};
use registro_domain::{cnpj::strip_cnpj, Company, ID};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct CompanyDTO {
    id: ID,
    name: String,
    cnpj: String,
    email: String,
}

impl CompanyDTO {
    fn to_domain(self) -> Company {
        Company::new(self.id, self.name, self.cnpj, self.email)
    }
}

/// [`ICompanyRepo`] backed by the remote `companies` resource.
///
/// Transport failures and non-2xx statuses other than the not-found cases
/// below propagate to the caller untouched; there are no retries at this
/// layer.
pub struct HttpCompanyRepo {
    client: Client,
    base_url: String,
}

impl HttpCompanyRepo {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for HttpCompanyRepo {
    async fn find_many(&self, query: &CompanyQuery) -> anyhow::Result<Vec<Company>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(name) = &query.name {
            params.push(("name", name.clone()));
        }
        if let Some(value) = &query.cnpj {
            params.push(("cnpj", strip_cnpj(value)));
        }
        if let Some(email) = &query.email {
            params.push(("email", email.clone()));
        }
        let res = self
            .client
            .get(self.url("companies"))
            .query(&params)
            .send()
            .await?;
        let companies: Vec<CompanyDTO> = res.error_for_status()?.json().await?;
        Ok(companies.into_iter().map(CompanyDTO::to_domain).collect())
    }

    async fn find(&self, company_id: &ID) -> anyhow::Result<Option<Company>> {
        let res = self
            .client
            .get(self.url(&format!("companies/{}", company_id)))
            .send()
            .await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let company: CompanyDTO = res.error_for_status()?.json().await?;
        Ok(Some(company.to_domain()))
    }

    async fn insert(&self, attributes: CompanyAttributes) -> anyhow::Result<Company> {
        let res = self
            .client
            .post(self.url("companies"))
            .json(&attributes)
            .send()
            .await?;
        let company: CompanyDTO = res.error_for_status()?.json().await?;
        Ok(company.to_domain())
    }

    async fn update(
        &self,
        company_id: &ID,
        patch: CompanyPatch,
    ) -> anyhow::Result<Option<Company>> {
        let res = self
            .client
            .put(self.url(&format!("companies/{}", company_id)))
            .json(&patch)
            .send()
            .await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let company: CompanyDTO = res.error_for_status()?.json().await?;
        Ok(Some(company.to_domain()))
    }

    async fn delete(&self, company_id: &ID) -> anyhow::Result<()> {
        let res = self
            .client
            .delete(self.url(&format!("companies/{}", company_id)))
            .send()
            .await?;
        // The store already not having the record is the outcome the caller
        // asked for
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        match res.error_for_status() {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("DELETE companies/{} failed: {}", company_id, e);
                Err(e.into())
            }
        }
    }
}
