use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        category::{self, CATEGORY_TAG},
        health::{self, HEALTH_TAG},
        post::{self, POST_TAG},
        sponsor::{self, SPONSOR_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "CMS backend", description = "Content management API"),
    tags(
        (name = AUTH_TAG, description = "Directory login and session tokens"),
        (name = POST_TAG, description = "Posts"),
        (name = CATEGORY_TAG, description = "Post categories"),
        (name = SPONSOR_TAG, description = "Sponsors"),
        (name = HEALTH_TAG, description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every documented handler is registered through `OpenApiRouter` so the served
/// OpenAPI document always matches the routing table. Unmatched paths fall back
/// to a JSON 404.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::hello))
        .routes(routes!(auth::login))
        .routes(routes!(auth::get_user))
        .routes(routes!(post::get_post, post::update_post, post::delete_post))
        .routes(routes!(post::list_posts))
        .routes(routes!(post::create_post))
        .routes(routes!(
            category::create_category,
            category::patch_category,
            category::delete_category
        ))
        .routes(routes!(category::get_category))
        .routes(routes!(category::list_categories))
        .routes(routes!(sponsor::create_sponsor, sponsor::delete_sponsor))
        .routes(routes!(sponsor::list_sponsors))
        .split_for_parts();

    router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .fallback(health::not_found)
}
