use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto, ListQueryDto},
        sponsor::{SponsorFormDto, SponsorIdFormDto, SponsorsResponseDto},
    },
    server::{
        error::AppError,
        model::sponsor::CreateSponsorParam,
        service::sponsor::SponsorService,
        state::AppState,
        util::parse::{parse_list_limit, parse_uuid},
    },
};

/// Tag for grouping sponsor endpoints in OpenAPI documentation
pub static SPONSOR_TAG: &str = "sponsor";

/// List sponsors, soonest expiry first. `id` is the number to return (10 when absent or 0).
#[utoipa::path(
    get,
    path = "/sponsors/",
    tag = SPONSOR_TAG,
    params(("id" = Option<u64>, Query, description = "Number of sponsors to return")),
    responses(
        (status = 200, description = "Sponsors", body = SponsorsResponseDto),
        (status = 400, description = "Invalid count", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sponsors(
    State(state): State<AppState>,
    query: Result<Query<ListQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let limit = parse_list_limit(query.id.as_deref())?;

    let sponsors = SponsorService::new(&state.db).list(limit).await?;

    Ok((
        StatusCode::OK,
        Json(SponsorsResponseDto {
            sponsors: sponsors.into_iter().map(|s| s.into_dto()).collect(),
        }),
    ))
}

/// Register a sponsor. `expiry` is an RFC 3339 timestamp stored as unix seconds.
#[utoipa::path(
    post,
    path = "/sponsor/",
    tag = SPONSOR_TAG,
    request_body(content = SponsorFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Sponsor registered", body = EmptyDto),
        (status = 400, description = "Missing or malformed expiry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    form: Result<Form<SponsorFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let param = CreateSponsorParam::from_dto(payload)?;

    SponsorService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// Delete the sponsor whose UUID is given in the form.
#[utoipa::path(
    delete,
    path = "/sponsor/",
    tag = SPONSOR_TAG,
    request_body(content = SponsorIdFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Sponsor deleted", body = EmptyDto),
        (status = 400, description = "Missing or malformed id", body = ErrorDto),
        (status = 404, description = "Sponsor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sponsor(
    State(state): State<AppState>,
    form: Result<Form<SponsorIdFormDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = form?;
    let id = parse_uuid("id", payload.id.as_deref())?;

    SponsorService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}
