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
        category::{
            CategoriesResponseDto, CategoryFormDto, CategoryIdFormDto, CategoryResponseDto,
        },
    },
    server::{
        error::AppError,
        model::category::CategoryParam,
        service::category::CategoryService,
        state::AppState,
        util::parse::{parse_list_limit, parse_required_i32},
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get a single category.
///
/// # Returns
/// - `200 OK` - `{category}`; `category` is `null` when nothing matches
/// - `400 Bad Request` - Non-numeric id
#[utoipa::path(
    get,
    path = "/category/{id}/",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Matching category or null", body = CategoryResponseDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_required_i32("id", Some(&id))?;

    let category = CategoryService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(CategoryResponseDto {
            category: category.map(|c| c.into_dto()),
        }),
    ))
}

/// List categories in id order. `id` is the number to return (10 when absent or 0).
#[utoipa::path(
    get,
    path = "/categories/",
    tag = CATEGORY_TAG,
    params(("id" = Option<u64>, Query, description = "Number of categories to return")),
    responses(
        (status = 200, description = "Categories", body = CategoriesResponseDto),
        (status = 400, description = "Invalid count", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
    query: Result<Query<ListQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let limit = parse_list_limit(query.id.as_deref())?;

    let categories = CategoryService::new(&state.db).list(limit).await?;

    Ok((
        StatusCode::OK,
        Json(CategoriesResponseDto {
            categories: categories.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/category/",
    tag = CATEGORY_TAG,
    request_body(content = CategoryFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Category created", body = EmptyDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 409, description = "Duplicate category id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    form: Result<Form<CategoryFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let param = CategoryParam::from_dto(payload)?;

    CategoryService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// Overwrite a category's name and index. The form's `id` selects the category.
#[utoipa::path(
    patch,
    path = "/category/",
    tag = CATEGORY_TAG,
    request_body(content = CategoryFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Category updated", body = EmptyDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_category(
    State(state): State<AppState>,
    form: Result<Form<CategoryFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let param = CategoryParam::from_dto(payload)?;

    CategoryService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// Delete the category whose id is given in the form.
#[utoipa::path(
    delete,
    path = "/category/",
    tag = CATEGORY_TAG,
    request_body(content = CategoryIdFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Category deleted", body = EmptyDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    form: Result<Form<CategoryIdFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let id = parse_required_i32("id", payload.id.as_deref())?;

    CategoryService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}
