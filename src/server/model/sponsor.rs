//! Sponsor domain models and parameters.

use uuid::Uuid;

use crate::{
    model::sponsor::{SponsorDto, SponsorFormDto},
    server::{error::AppError, util::parse::parse_rfc3339_timestamp},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Sponsor {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub tier: String,
    /// Unix seconds after which the sponsorship lapses.
    pub expiry: i64,
}

impl Sponsor {
    pub fn from_entity(entity: entity::sponsor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo: entity.logo,
            tier: entity.tier,
            expiry: entity.expiry,
        }
    }

    pub fn into_dto(self) -> SponsorDto {
        SponsorDto {
            id: self.id,
            name: self.name,
            logo: self.logo,
            tier: self.tier,
            expiry: self.expiry,
        }
    }
}

/// Parameters for registering a sponsor. The id is generated on insert.
#[derive(Debug, Clone)]
pub struct CreateSponsorParam {
    pub name: String,
    pub logo: String,
    pub tier: String,
    pub expiry: i64,
}

impl CreateSponsorParam {
    /// # Returns
    /// - `Ok(CreateSponsorParam)` - Expiry parsed to unix seconds
    /// - `Err(AppError::BadRequest)` - Expiry missing or not RFC 3339
    pub fn from_dto(dto: SponsorFormDto) -> Result<Self, AppError> {
        Ok(Self {
            expiry: parse_rfc3339_timestamp("expiry", dto.expiry.as_deref())?,
            name: dto.name,
            logo: dto.logo,
            tier: dto.tier,
        })
    }
}
