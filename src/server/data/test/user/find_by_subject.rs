use super::*;

/// Tests finding an existing session record.
///
/// Expected: Ok(Some) with the stored token and role
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_subject(&stored.subject).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.token, stored.token);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests looking up a subject that has never logged in.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_subject("missing").await?;

    assert!(user.is_none());

    Ok(())
}
