use super::*;

/// Tests listing sponsors soonest expiry first, up to the requested count.
///
/// Expected: Ok with the two sponsors expiring first
#[tokio::test]
async fn lists_by_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Sponsor).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::sponsor::SponsorFactory::new(db)
        .name("Late")
        .expiry(3_000)
        .build()
        .await?;
    factory::sponsor::SponsorFactory::new(db)
        .name("Early")
        .expiry(1_000)
        .build()
        .await?;
    factory::sponsor::SponsorFactory::new(db)
        .name("Middle")
        .expiry(2_000)
        .build()
        .await?;

    let repo = SponsorRepository::new(db);
    let sponsors = repo.list(2).await?;

    let names: Vec<&str> = sponsors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Middle"]);

    Ok(())
}
