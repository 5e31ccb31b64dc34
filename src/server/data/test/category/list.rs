use super::*;

/// Tests listing categories up to the requested count in id order.
///
/// Expected: Ok with the two lowest ids
#[tokio::test]
async fn lists_categories_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [30, 10, 20] {
        factory::category::CategoryFactory::new(db).id(id).build().await?;
    }

    let repo = CategoryRepository::new(db);
    let categories = repo.list(2).await?;

    let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![10, 20]);

    Ok(())
}
