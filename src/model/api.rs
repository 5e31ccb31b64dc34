use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of mutating endpoints that have nothing to return; serializes as `{}`.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, ToSchema)]
pub struct EmptyDto {}

/// Count and category filter accepted by the list endpoints.
///
/// `id` carries the requested number of records, matching the query parameter
/// name existing clients already send.
#[derive(Deserialize, Debug, Default)]
pub struct ListQueryDto {
    pub id: Option<String>,
    pub category: Option<String>,
}
