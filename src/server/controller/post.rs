use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto, ListQueryDto},
        post::{PostFormDto, PostIdFormDto, PostQueryDto, PostResponseDto, PostsResponseDto},
    },
    server::{
        error::AppError,
        model::post::PostParam,
        service::post::PostService,
        state::AppState,
        util::parse::{parse_id_or, parse_list_limit, parse_optional_i32, parse_required_i32},
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// Get a single post.
///
/// The `id` query parameter, when present, selects the post instead of the
/// path segment. When `category` is given the post must also belong to that
/// category.
///
/// # Returns
/// - `200 OK` - `{post}`; `post` is `null` when nothing matches
/// - `400 Bad Request` - Non-numeric id or category
#[utoipa::path(
    get,
    path = "/post/{id}/",
    tag = POST_TAG,
    params(
        ("id" = String, Path, description = "Post id, used when the query carries none"),
        ("id" = Option<i32>, Query, description = "Post id, overrides the path segment"),
        ("category" = Option<i32>, Query, description = "Category the post must belong to")
    ),
    responses(
        (status = 200, description = "Matching post or null", body = PostResponseDto),
        (status = 400, description = "Invalid id or category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<PostQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let id = parse_id_or("id", query.id.as_deref(), &id)?;
    let category = parse_optional_i32("category", query.category.as_deref())?;

    let post = PostService::new(&state.db).get(id, category).await?;

    Ok((
        StatusCode::OK,
        Json(PostResponseDto {
            post: post.map(|p| p.into_dto()),
        }),
    ))
}

/// List posts.
///
/// `id` is the number of posts to return (10 when absent or 0). Posts come
/// back in id order.
#[utoipa::path(
    get,
    path = "/posts/",
    tag = POST_TAG,
    params(
        ("id" = Option<u64>, Query, description = "Number of posts to return"),
        ("category" = Option<i32>, Query, description = "Only posts in this category")
    ),
    responses(
        (status = 200, description = "Posts", body = PostsResponseDto),
        (status = 400, description = "Invalid count or category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let limit = parse_list_limit(query.id.as_deref())?;
    let category = parse_optional_i32("category", query.category.as_deref())?;

    let posts = PostService::new(&state.db).list(limit, category).await?;

    Ok((
        StatusCode::OK,
        Json(PostsResponseDto {
            posts: posts.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// Create a post.
///
/// # Returns
/// - `200 OK` - `{}`
/// - `400 Bad Request` - Missing id or malformed field
/// - `409 Conflict` - A post with this id already exists
#[utoipa::path(
    post,
    path = "/post/",
    tag = POST_TAG,
    request_body(content = PostFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Post created", body = EmptyDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 409, description = "Duplicate post id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    form: Result<Form<PostFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let param = PostParam::from_dto(payload, None)?;

    PostService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// Replace a post's editable fields.
///
/// The id in the path selects the post; an `id` form field is ignored.
#[utoipa::path(
    put,
    path = "/post/{id}/",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    request_body(content = PostFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Post updated", body = EmptyDto),
        (status = 400, description = "Invalid post data", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<PostFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let id = parse_required_i32("id", Some(&id))?;
    let param = PostParam::from_dto(payload, Some(id))?;

    PostService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// Delete a post.
///
/// An `id` form field, when present, selects the post instead of the path
/// segment. The body is optional.
#[utoipa::path(
    delete,
    path = "/post/{id}/",
    tag = POST_TAG,
    params(("id" = String, Path, description = "Post id, used when the form carries none")),
    request_body(content = PostIdFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Post deleted", body = EmptyDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<PostIdFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let form_id = match form {
        Ok(Form(payload)) => payload.id,
        Err(FormRejection::InvalidFormContentType(_)) => None,
        Err(rejection) => return Err(rejection.into()),
    };
    let id = parse_id_or("id", form_id.as_deref(), &id)?;

    PostService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}
