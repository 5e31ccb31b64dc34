use super::*;

/// Tests creating a category with a client-supplied id.
///
/// Expected: Ok with the stored category
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CategoryParam {
            id: 3,
            name: "Events".to_string(),
            index: 1,
        })
        .await?;

    assert_eq!(category.id, 3);
    assert_eq!(category.name, "Events");
    assert_eq!(category.index, 1);
    assert_eq!(Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a category whose id is already taken.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(CategoryParam {
            id: stored.id,
            name: "Duplicate".to_string(),
            index: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
