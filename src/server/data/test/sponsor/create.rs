use super::*;

/// Tests registering a sponsor.
///
/// Verifies that the repository generates a v4 UUID and stores the expiry as
/// given.
///
/// Expected: Ok with a generated id
#[tokio::test]
async fn creates_sponsor_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Sponsor).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SponsorRepository::new(db);
    let sponsor = repo
        .create(CreateSponsorParam {
            name: "Acme".to_string(),
            logo: "https://example.com/acme.png".to_string(),
            tier: "gold".to_string(),
            expiry: 1_609_459_200,
        })
        .await?;

    assert_eq!(sponsor.id.get_version_num(), 4);
    assert_eq!(sponsor.name, "Acme");
    assert_eq!(sponsor.expiry, 1_609_459_200);
    assert_eq!(Sponsor::find().count(db).await?, 1);

    Ok(())
}
