//! Parsing helpers for text fields submitted by clients.
//!
//! Form and query values arrive as text; every failure here is a client error
//! and maps to `AppError::BadRequest` naming the offending field.

use chrono::DateTime;
use uuid::Uuid;

use crate::server::error::AppError;

/// Number of records returned by list endpoints when the caller gives no count.
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// Treats an absent or blank value as missing.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses a required `i32` field.
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - Field missing, blank or not an integer
pub fn parse_required_i32(field: &str, value: Option<&str>) -> Result<i32, AppError> {
    let Some(value) = non_blank(value) else {
        return Err(AppError::BadRequest(format!("Missing required field '{}'", field)));
    };

    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Field '{}' must be an integer", field)))
}

/// Parses an optional `i32` field; blank values count as absent.
pub fn parse_optional_i32(field: &str, value: Option<&str>) -> Result<Option<i32>, AppError> {
    non_blank(value)
        .map(|v| parse_required_i32(field, Some(v)))
        .transpose()
}

/// Parses an optional boolean field, defaulting to `false`.
///
/// Accepts `true`/`false`, `1`/`0` and `on`/`off` (HTML checkbox values).
pub fn parse_bool(field: &str, value: Option<&str>) -> Result<bool, AppError> {
    let Some(value) = non_blank(value) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(AppError::BadRequest(format!(
            "Field '{}' must be a boolean",
            field
        ))),
    }
}

/// Parses an `i32` id, preferring a query or form value over the path segment.
///
/// A blank or absent `preferred` falls back to `fallback`.
pub fn parse_id_or(field: &str, preferred: Option<&str>, fallback: &str) -> Result<i32, AppError> {
    let value = non_blank(preferred).unwrap_or(fallback);

    parse_required_i32(field, Some(value))
}

/// Parses a required UUID field.
pub fn parse_uuid(field: &str, value: Option<&str>) -> Result<Uuid, AppError> {
    let Some(value) = non_blank(value) else {
        return Err(AppError::BadRequest(format!("Missing required field '{}'", field)));
    };

    Uuid::parse_str(value)
        .map_err(|_| AppError::BadRequest(format!("Field '{}' must be a UUID", field)))
}

/// Parses a required RFC 3339 timestamp into unix seconds.
pub fn parse_rfc3339_timestamp(field: &str, value: Option<&str>) -> Result<i64, AppError> {
    let Some(value) = non_blank(value) else {
        return Err(AppError::BadRequest(format!("Missing required field '{}'", field)));
    };

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp())
        .map_err(|_| {
            AppError::BadRequest(format!("Field '{}' must be an RFC 3339 timestamp", field))
        })
}

/// Resolves the record count requested by a list endpoint.
///
/// Absent, blank or zero counts fall back to `DEFAULT_LIST_LIMIT`; any other
/// positive count is used as given.
pub fn parse_list_limit(value: Option<&str>) -> Result<u64, AppError> {
    let Some(value) = non_blank(value) else {
        return Ok(DEFAULT_LIST_LIMIT);
    };

    match value.parse::<u64>() {
        Ok(0) => Ok(DEFAULT_LIST_LIMIT),
        Ok(limit) => Ok(limit),
        Err(_) => Err(AppError::BadRequest(
            "Query parameter 'id' must be a non-negative integer".to_string(),
        )),
    }
}
