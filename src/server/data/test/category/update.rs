use super::*;

/// Tests patching a category's name and index.
///
/// Expected: Ok(true) with both fields changed
#[tokio::test]
async fn updates_name_and_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::category::CategoryFactory::new(db)
        .name("Old")
        .index(1)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(CategoryParam {
            id: stored.id,
            name: "New".to_string(),
            index: 9,
        })
        .await?;

    assert!(updated);
    let category = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(category.name, "New");
    assert_eq!(category.index, 9);

    Ok(())
}

/// Tests patching a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(CategoryParam {
            id: 999_999,
            name: "New".to_string(),
            index: 0,
        })
        .await?;

    assert!(!updated);

    Ok(())
}
