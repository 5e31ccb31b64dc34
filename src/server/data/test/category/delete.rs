use super::*;

/// Tests deleting a category by id.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.delete(stored.id).await?);
    assert_eq!(Category::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(!repo.delete(999_999).await?);

    Ok(())
}
