mod http;
mod inmemory;

pub use http::HttpCompanyRepo;
pub use inmemory::InMemoryCompanyRepo;
use registro_domain::{Company, ID};
use serde::Serialize;

/// Fields a caller provides when creating a company. The repository assigns
/// the id.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyAttributes {
    pub name: String,
    pub cnpj: String,
    pub email: String,
}

/// Partial update for an existing company. `None` fields keep their stored
/// value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Filters for [`ICompanyRepo::find_many`]. Present fields combine with
/// logical AND; an empty query matches everything.
#[derive(Debug, Clone, Default)]
pub struct CompanyQuery {
    /// Case-insensitive substring match against the company name
    pub name: Option<String>,
    /// Exact match, compared on the digit-only form of both sides
    pub cnpj: Option<String>,
    /// Case-insensitive exact match
    pub email: Option<String>,
}

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    async fn find_many(&self, query: &CompanyQuery) -> anyhow::Result<Vec<Company>>;
    async fn find(&self, company_id: &ID) -> anyhow::Result<Option<Company>>;
    async fn insert(&self, attributes: CompanyAttributes) -> anyhow::Result<Company>;
    async fn update(
        &self,
        company_id: &ID,
        patch: CompanyPatch,
    ) -> anyhow::Result<Option<Company>>;
    /// Removes the company if present. Deleting an absent id is a silent
    /// success.
    async fn delete(&self, company_id: &ID) -> anyhow::Result<()>;
}
