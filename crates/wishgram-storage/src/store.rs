// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`WishStore`] trait.

use async_trait::async_trait;
use tracing::debug;

use wishgram_config::model::StorageConfig;
use wishgram_core::{
    Actor, NewWish, User, UserId, Wish, WishId, WishStatus, WishStore, WishgramError,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed wish store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules.
pub struct SqliteWishStore {
    db: Database,
}

impl SqliteWishStore {
    /// Open the database at the configured path and run migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, WishgramError> {
        let db = Database::open(&config.database_path).await?;
        debug!(path = %config.database_path, "SQLite wish store ready");
        Ok(Self { db })
    }

    /// Checkpoint and release the database.
    pub async fn close(&self) -> Result<(), WishgramError> {
        self.db.close().await
    }

    /// The underlying database handle, for maintenance commands.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Mark a wish completed. Not reachable from the conversation flows yet;
    /// kept for parity with the schema's status column.
    pub async fn complete_wish(&self, id: WishId) -> Result<(), WishgramError> {
        queries::wishes::complete_wish(&self.db, id).await
    }

    /// Mark a wish cancelled without deleting it.
    pub async fn cancel_wish(&self, id: WishId) -> Result<(), WishgramError> {
        queries::wishes::cancel_wish(&self.db, id).await
    }
}

#[async_trait]
impl WishStore for SqliteWishStore {
    async fn ensure_user(&self, actor: &Actor) -> Result<(), WishgramError> {
        queries::users::ensure_user(&self.db, actor).await
    }

    async fn find_user_by_display_name(&self, name: &str) -> Result<Option<User>, WishgramError> {
        queries::users::find_by_username(&self.db, name).await
    }

    async fn create_wish(&self, wish: &NewWish) -> Result<WishId, WishgramError> {
        queries::wishes::create_wish(&self.db, wish).await
    }

    async fn get_wish(&self, id: WishId) -> Result<Option<Wish>, WishgramError> {
        queries::wishes::get_wish(&self.db, id).await
    }

    async fn list_wishes_by_user(
        &self,
        user: UserId,
        status: Option<WishStatus>,
    ) -> Result<Vec<Wish>, WishgramError> {
        queries::wishes::list_by_user(&self.db, user, status).await
    }

    async fn delete_wish(&self, id: WishId) -> Result<(), WishgramError> {
        queries::wishes::delete_wish(&self.db, id).await
    }
}
