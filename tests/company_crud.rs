use registro::{
    cnpj, Company, CompanyAttributes, CompanyPatch, CompanyQuery, ICompanyRepo, RegistroContext,
    ID,
};

fn seed() -> Vec<Company> {
    vec![Company::new(
        ID::new(1),
        "Acme",
        "11222333000181",
        "a@acme.com",
    )]
}

#[tokio::test]
async fn crud_scenario() {
    let ctx = RegistroContext::create_inmemory(seed());
    let repo = &ctx.repos.company_repo;

    let created = repo
        .insert(CompanyAttributes {
            name: "Globex".to_string(),
            cnpj: "06990590000123".to_string(),
            email: "b@globex.com".to_string(),
        })
        .await
        .expect("Expected to create company");
    assert_eq!(created.id, ID::new(2));

    let matches = repo
        .find_many(&CompanyQuery {
            name: Some("glo".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, created.id);

    repo.delete(&ID::new(1)).await.unwrap();
    let remaining = repo.find_many(&CompanyQuery::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, ID::new(2));
}

#[tokio::test]
async fn stored_identifiers_validate_and_format() {
    let ctx = RegistroContext::create_inmemory(seed());
    let repo = &ctx.repos.company_repo;

    let updated = repo
        .update(
            &ID::new(1),
            CompanyPatch {
                cnpj: Some("00.000.000/0001-91".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .expect("Expected company to exist");

    assert!(cnpj::validate_cnpj(&updated.cnpj));
    assert_eq!(cnpj::format_cnpj(&updated.cnpj), "00.000.000/0001-91");
    // Name and email were not part of the patch
    assert_eq!(updated.name, "Acme");
    assert_eq!(updated.email, "a@acme.com");
}
