// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence trait the conversation engine is written against.

use async_trait::async_trait;

use crate::error::WishgramError;
use crate::types::{Actor, NewWish, User, UserId, Wish, WishId, WishStatus};

/// Strips the decorative leading `@` users habitually type in front of a
/// handle. At most one `@` is removed; anything else is returned untouched.
pub fn normalize_display_name(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

/// Persistence backend for users and wishes.
///
/// Implementations are expected to be cheap to clone behind an `Arc` and
/// safe to call concurrently; the engine serializes per-conversation work
/// but distinct conversations hit the store in parallel.
#[async_trait]
pub trait WishStore: Send + Sync {
    /// Registers the actor if unseen, otherwise refreshes the stored profile
    /// fields. Idempotent.
    async fn ensure_user(&self, actor: &Actor) -> Result<(), WishgramError>;

    /// Looks up a user by display name. Tolerates one leading `@` (see
    /// [`normalize_display_name`]). `Ok(None)` when no such user exists.
    async fn find_user_by_display_name(&self, name: &str) -> Result<Option<User>, WishgramError>;

    /// Persists a new wish and returns its identifier.
    async fn create_wish(&self, wish: &NewWish) -> Result<WishId, WishgramError>;

    /// Fetches a single wish. `Ok(None)` when the id is unknown.
    async fn get_wish(&self, id: WishId) -> Result<Option<Wish>, WishgramError>;

    /// All wishes owned by `user`, newest first. `status` narrows the result
    /// when set.
    async fn list_wishes_by_user(
        &self,
        user: UserId,
        status: Option<WishStatus>,
    ) -> Result<Vec<Wish>, WishgramError>;

    /// Removes a wish. Deleting an id that no longer exists is not an error.
    async fn delete_wish(&self, id: WishId) -> Result<(), WishgramError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_single_leading_at() {
        assert_eq!(normalize_display_name("@alice"), "alice");
        assert_eq!(normalize_display_name("alice"), "alice");
        assert_eq!(normalize_display_name("@@alice"), "@alice");
        assert_eq!(normalize_display_name(""), "");
    }
}
