use super::*;

/// Tests getting a post by id without a category filter.
///
/// Expected: Ok(Some) with the matching post
#[tokio::test]
async fn finds_post_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::post::PostFactory::new(db)
        .title("Welcome Week")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let post = repo.find_by_id(stored.id, None).await?;

    assert!(post.is_some());
    assert_eq!(post.unwrap().title, "Welcome Week");

    Ok(())
}

/// Tests that the category filter must match as well as the id.
///
/// Expected: Ok(None) for another category, Ok(Some) for the post's own
#[tokio::test]
async fn applies_category_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::post::PostFactory::new(db)
        .category(2)
        .build()
        .await?;

    let repo = PostRepository::new(db);

    assert!(repo.find_by_id(stored.id, Some(5)).await?.is_none());
    assert!(repo.find_by_id(stored.id, Some(2)).await?.is_some());

    Ok(())
}

/// Tests getting a post that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert!(repo.find_by_id(999_999, None).await?.is_none());

    Ok(())
}
