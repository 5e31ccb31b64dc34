use super::*;

/// Tests creating a session record for a first login.
///
/// Verifies that the repository stores the subject, token and role, and sets
/// both timestamps.
///
/// Expected: Ok with one stored record
#[tokio::test]
async fn creates_session_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            subject: "abc123".to_string(),
            token: "token-1".to_string(),
            role: Role::User,
        })
        .await?;

    assert_eq!(user.subject, "abc123");
    assert_eq!(user.token, "token-1");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(User::find().count(db).await?, 1);

    Ok(())
}

/// Tests creating a record whose subject already exists.
///
/// Verifies that a racing first login overwrites the stored token instead of
/// failing on the primary key, and keeps the existing role.
///
/// Expected: Ok with a single record holding the newer token
#[tokio::test]
async fn overwrites_token_on_conflicting_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .subject("abc123")
        .token("older")
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            subject: "abc123".to_string(),
            token: "newer".to_string(),
            role: Role::User,
        })
        .await?;

    assert_eq!(user.token, "newer");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(User::find().count(db).await?, 1);

    Ok(())
}
