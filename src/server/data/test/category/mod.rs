use crate::server::{data::category::CategoryRepository, model::category::CategoryParam};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod list;
mod update;
