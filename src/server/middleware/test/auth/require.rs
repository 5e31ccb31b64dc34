use super::*;

/// Tests a valid token whose subject has a session record.
///
/// Verifies the role comes from the record and the name from the token.
///
/// Expected: Ok(AuthenticatedUser)
#[tokio::test]
async fn accepts_valid_token_with_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let record = factory::user::UserFactory::new(db)
        .role("admin")
        .build()
        .await?;
    let token = tokens.issue(&record.subject, "Alice")?;
    let headers = bearer(&token);

    let user = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(user.subject, record.subject);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthErr(MissingToken))
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthErr(MissingToken))
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an expired token for a subject that does have a record.
///
/// Expected: Err(AuthErr(InvalidToken))
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let record = factory::create_user(db).await?;
    let token = tokens.issue_at(
        &record.subject,
        "Alice",
        Utc::now() - chrono::Duration::hours(25),
    )?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token whose subject has never logged in.
///
/// Expected: Err(AuthErr(UserNotFound))
#[tokio::test]
async fn rejects_token_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let token = tokens.issue("unknown-subject", "Alice")?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(subject))) if subject == "unknown-subject"
    ));

    Ok(())
}
