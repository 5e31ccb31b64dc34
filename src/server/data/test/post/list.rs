use super::*;

/// Tests that listing honours the requested count.
///
/// Verifies that with more posts stored than requested, exactly `limit` posts
/// come back in id order.
///
/// Expected: Ok with the first 5 posts by id
#[tokio::test]
async fn limits_result_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in (1..=8).rev() {
        factory::post::PostFactory::new(db).id(id).build().await?;
    }

    let repo = PostRepository::new(db);
    let posts = repo.list(5, None).await?;

    let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Tests listing posts within one category.
///
/// Expected: Ok with only posts from category 2
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::post::PostFactory::new(db).category(1).build().await?;
    factory::post::PostFactory::new(db).category(2).build().await?;
    factory::post::PostFactory::new(db).category(2).build().await?;

    let repo = PostRepository::new(db);
    let posts = repo.list(10, Some(2)).await?;

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.category == 2));

    Ok(())
}

/// Tests listing with no stored posts.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Post).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert!(repo.list(10, None).await?.is_empty());

    Ok(())
}
