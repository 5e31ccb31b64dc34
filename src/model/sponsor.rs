use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SponsorDto {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub tier: String,
    /// Unix timestamp (seconds).
    pub expiry: i64,
}

/// Form body for registering a sponsor. `expiry` is RFC 3339 text.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SponsorFormDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub expiry: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct SponsorIdFormDto {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct SponsorsResponseDto {
    pub sponsors: Vec<SponsorDto>,
}
