//! Router-level tests driving full requests through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    directory::mock::MockDirectory, router::router, state::AppState, token::TokenIssuer,
};


const ZID: &str = "z1111111";
const PASSWORD: &str = "hunter2";

/// Router wired to an in-memory database and a mock directory.
struct TestApp {
    router: Router,
    directory: MockDirectory,
    tokens: Arc<TokenIssuer>,
    test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_directory(MockDirectory::new().with_account(ZID, PASSWORD, "Alice")).await
    }

    async fn with_directory(directory: MockDirectory) -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let tokens = Arc::new(TokenIssuer::new(
            b"router-test-secret",
            chrono::Duration::hours(24),
        ));

        let state = AppState::new(db, Arc::new(directory.clone()), tokens.clone());

        Self {
            router: router().with_state(state),
            directory,
            tokens,
            test,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn form(&self, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}
