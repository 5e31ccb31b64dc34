use super::*;

/// Tests creating a post with a client-supplied id.
///
/// Verifies that all submitted fields are stored and both timestamps are set
/// to the same instant.
///
/// Expected: Ok with the stored post
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let post = repo.create(post_param(42, 3)).await?;

    assert_eq!(post.id, 42);
    assert_eq!(post.title, "Title 42");
    assert_eq!(post.category, 3);
    assert!(post.show_in_menu);
    assert_eq!(post.created_on, post.last_edited_on);
    assert_eq!(Post::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a post whose id is already taken.
///
/// Expected: Err(DbErr) and the original post unchanged
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::post::PostFactory::new(db)
        .id(7)
        .title("Original")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let result = repo.create(post_param(7, 1)).await;

    assert!(result.is_err());
    let stored = Post::find_by_id(7).one(db).await?.unwrap();
    assert_eq!(stored.title, "Original");

    Ok(())
}
