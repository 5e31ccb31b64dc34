//! Category domain models and parameters.

use crate::{
    model::category::{CategoryDto, CategoryFormDto},
    server::{error::AppError, util::parse::parse_required_i32},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Position used by clients when ordering categories for display.
    pub index: i32,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            index: entity.sort_index,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            index: self.index,
        }
    }
}

/// Category fields submitted for create and patch.
///
/// Both operations take the full field set: create inserts it, patch
/// overwrites `name` and `index` of the category with the matching id.
#[derive(Debug, Clone)]
pub struct CategoryParam {
    pub id: i32,
    pub name: String,
    pub index: i32,
}

impl CategoryParam {
    /// Validates the submitted form.
    ///
    /// # Returns
    /// - `Ok(CategoryParam)` - All fields present and well formed
    /// - `Err(AppError::BadRequest)` - `id` or `index` missing or not an integer
    pub fn from_dto(dto: CategoryFormDto) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_required_i32("id", dto.id.as_deref())?,
            name: dto.name,
            index: parse_required_i32("index", dto.index.as_deref())?,
        })
    }
}
