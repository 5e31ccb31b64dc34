use super::*;

/// Tests replacing a post's editable fields.
///
/// Verifies that submitted fields are overwritten, `created_on` is preserved
/// and `last_edited_on` moves forward.
///
/// Expected: Ok(true) with the new field values stored
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::post::PostFactory::new(db)
        .title("Before")
        .category(1)
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let mut param = post_param(stored.id, 4);
    param.title = "After".to_string();
    let updated = repo.update(param).await?;

    assert!(updated);
    let post = repo.find_by_id(stored.id, None).await?.unwrap();
    assert_eq!(post.title, "After");
    assert_eq!(post.category, 4);
    assert!(post.show_in_menu);
    assert_eq!(post.created_on, stored.created_on);
    assert!(post.last_edited_on >= stored.last_edited_on);

    Ok(())
}

/// Tests updating a post that does not exist.
///
/// Expected: Ok(false) and nothing inserted
#[tokio::test]
async fn reports_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let updated = repo.update(post_param(999_999, 1)).await?;

    assert!(!updated);
    assert_eq!(Post::find().count(db).await?, 0);

    Ok(())
}
