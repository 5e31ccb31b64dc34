use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login form submitted by the front end.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginDto {
    /// Institutional identifier, e.g. `z1111111`.
    #[serde(default)]
    pub zid: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct CurrentUserDto {
    pub subject: String,
    pub name: String,
    pub role: String,
}
