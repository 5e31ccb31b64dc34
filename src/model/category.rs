use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub index: i32,
}

/// Form body for creating or patching a category.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CategoryFormDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub index: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CategoryIdFormDto {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct CategoryResponseDto {
    pub category: Option<CategoryDto>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct CategoriesResponseDto {
    pub categories: Vec<CategoryDto>,
}
