use super::*;

/// Tests getting a category by id.
///
/// Expected: Ok(Some) with name and index mapped from the stored row
#[tokio::test]
async fn finds_category_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::category::CategoryFactory::new(db)
        .name("Projects")
        .index(4)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let category = repo.find_by_id(stored.id).await?.unwrap();

    assert_eq!(category.name, "Projects");
    assert_eq!(category.index, 4);

    Ok(())
}

/// Tests getting a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.find_by_id(999_999).await?.is_none());

    Ok(())
}
