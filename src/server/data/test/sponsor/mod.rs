use crate::server::{data::sponsor::SponsorRepository, model::sponsor::CreateSponsorParam};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
