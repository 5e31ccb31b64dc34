//! Session record repository.
//!
//! This module provides the `UserRepository` for reading and writing session records.
//! Records are keyed by the subject hash and are never deleted.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for session records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the session record for a subject hash.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Record found
    /// - `Ok(None)` - Subject has never logged in
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(subject.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a session record for a first login.
    ///
    /// A concurrent first login for the same subject may insert first; in that
    /// case the existing row's token is overwritten instead of failing on the
    /// primary key, so the last writer wins.
    ///
    /// # Returns
    /// - `Ok(User)` - The created (or overwritten) record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            subject: ActiveValue::Set(param.subject),
            token: ActiveValue::Set(param.token),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Subject)
                .update_columns([entity::user::Column::Token, entity::user::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Overwrites the stored token of an existing record.
    ///
    /// # Returns
    /// - `Ok(true)` - Record updated
    /// - `Ok(false)` - No record exists for the subject
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_token(&self, subject: &str, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Subject.eq(subject))
            .col_expr(entity::user::Column::Token, Expr::value(token))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
