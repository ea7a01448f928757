//! Client library for a company registry: CNPJ validation and display
//! formatting, plus CRUD access to the `companies` collection through a
//! swappable repository (remote HTTP backend or an in-memory mock with
//! simulated latency).

pub use registro_domain::cnpj;
pub use registro_domain::{Company, Entity, InvalidIDError, ID};
pub use registro_infra::{
    setup_context, CompanyAttributes, CompanyPatch, CompanyQuery, Config, ICompanyRepo,
    RegistroContext, Repos,
};
