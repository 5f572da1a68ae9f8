// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory wish store for deterministic engine tests.
//!
//! `MemoryWishStore` implements [`WishStore`] with per-operation call
//! counters and injectable failures, so tests can assert not only what the
//! engine replied but also how it talked to persistence (e.g. that paging
//! from a cached snapshot issues no extra list queries).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use wishgram_core::{
    Actor, NewWish, User, UserId, Wish, WishId, WishStatus, WishStore, WishgramError,
    normalize_display_name,
};

/// A mock wish store for testing.
///
/// Wishes are kept in insertion order; listings return them newest first,
/// matching the SQL contract of the real store.
#[derive(Default)]
pub struct MemoryWishStore {
    users: Mutex<HashMap<i64, User>>,
    wishes: Mutex<Vec<Wish>>,
    next_id: AtomicI64,

    ensure_user_calls: AtomicUsize,
    find_user_calls: AtomicUsize,
    create_calls: AtomicUsize,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,

    fail_ensure_user: AtomicBool,
    fail_create: AtomicBool,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
}

impl MemoryWishStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next (and all following) `ensure_user` calls fail.
    pub fn fail_ensure_user(&self, fail: bool) {
        self.fail_ensure_user.store(fail, Ordering::SeqCst);
    }

    /// Make the next (and all following) `create_wish` calls fail.
    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Make the next (and all following) `list_wishes_by_user` calls fail.
    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Make the next (and all following) `delete_wish` calls fail.
    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn ensure_user_calls(&self) -> usize {
        self.ensure_user_calls.load(Ordering::SeqCst)
    }

    pub fn find_user_calls(&self) -> usize {
        self.find_user_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Number of wishes currently stored, across all owners.
    pub async fn wish_count(&self) -> usize {
        self.wishes.lock().await.len()
    }

    /// Direct snapshot of all stored wishes, for assertions.
    pub async fn all_wishes(&self) -> Vec<Wish> {
        self.wishes.lock().await.clone()
    }

    fn injected(&self, what: &str) -> WishgramError {
        WishgramError::Storage {
            source: format!("injected {what} failure").into(),
        }
    }
}

#[async_trait]
impl WishStore for MemoryWishStore {
    async fn ensure_user(&self, actor: &Actor) -> Result<(), WishgramError> {
        self.ensure_user_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_ensure_user.load(Ordering::SeqCst) {
            return Err(self.injected("ensure_user"));
        }
        let mut users = self.users.lock().await;
        users
            .entry(actor.id.0)
            .and_modify(|u| {
                u.username = actor.profile.username.clone();
                u.first_name = actor.profile.first_name.clone();
                u.last_name = actor.profile.last_name.clone();
            })
            .or_insert_with(|| User {
                id: actor.id,
                username: actor.profile.username.clone(),
                first_name: actor.profile.first_name.clone(),
                last_name: actor.profile.last_name.clone(),
                registration_date: chrono::Utc::now().to_rfc3339(),
            });
        Ok(())
    }

    async fn find_user_by_display_name(&self, name: &str) -> Result<Option<User>, WishgramError> {
        self.find_user_calls.fetch_add(1, Ordering::SeqCst);
        let name = normalize_display_name(name);
        let users = self.users.lock().await;
        Ok(users
            .values()
            .find(|u| u.username.as_deref() == Some(name))
            .cloned())
    }

    async fn create_wish(&self, wish: &NewWish) -> Result<WishId, WishgramError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(self.injected("create"));
        }
        let id = WishId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.wishes.lock().await.push(Wish {
            id,
            user_id: wish.user_id,
            chat_id: wish.chat_id,
            text: wish.text.clone(),
            description: wish.description.clone(),
            status: WishStatus::Active,
            priority: wish.priority,
            price: wish.price,
            create_date: chrono::Utc::now().to_rfc3339(),
            complete_date: None,
        });
        Ok(id)
    }

    async fn get_wish(&self, id: WishId) -> Result<Option<Wish>, WishgramError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let wishes = self.wishes.lock().await;
        Ok(wishes.iter().find(|w| w.id == id).cloned())
    }

    async fn list_wishes_by_user(
        &self,
        user: UserId,
        status: Option<WishStatus>,
    ) -> Result<Vec<Wish>, WishgramError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(self.injected("list"));
        }
        let wishes = self.wishes.lock().await;
        Ok(wishes
            .iter()
            .rev() // newest first
            .filter(|w| w.user_id == user)
            .filter(|w| status.is_none_or(|s| w.status == s))
            .cloned()
            .collect())
    }

    async fn delete_wish(&self, id: WishId) -> Result<(), WishgramError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(self.injected("delete"));
        }
        self.wishes.lock().await.retain(|w| w.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishgram_core::{ChatId, UserProfile};

    fn actor(id: i64, username: &str) -> Actor {
        Actor::new(
            UserId(id),
            UserProfile {
                username: Some(username.to_string()),
                first_name: None,
                last_name: None,
            },
        )
    }

    fn wish(user: i64, text: &str) -> NewWish {
        NewWish {
            user_id: UserId(user),
            chat_id: ChatId(user),
            text: text.to_string(),
            description: None,
            priority: 3,
            price: None,
        }
    }

    #[tokio::test]
    async fn lists_newest_first_and_counts_calls() {
        let store = MemoryWishStore::new();
        store.create_wish(&wish(1, "a")).await.unwrap();
        store.create_wish(&wish(1, "b")).await.unwrap();

        let listed = store.list_wishes_by_user(UserId(1), None).await.unwrap();
        assert_eq!(listed[0].text, "b");
        assert_eq!(listed[1].text, "a");
        assert_eq!(store.list_calls(), 1);
        assert_eq!(store.create_calls(), 2);
    }

    #[tokio::test]
    async fn injected_create_failure_leaves_store_untouched() {
        let store = MemoryWishStore::new();
        store.fail_create(true);
        assert!(store.create_wish(&wish(1, "a")).await.is_err());
        assert_eq!(store.wish_count().await, 0);

        store.fail_create(false);
        store.create_wish(&wish(1, "a")).await.unwrap();
        assert_eq!(store.wish_count().await, 1);
    }

    #[tokio::test]
    async fn find_user_ignores_leading_at() {
        let store = MemoryWishStore::new();
        store.ensure_user(&actor(5, "carol")).await.unwrap();
        assert!(
            store
                .find_user_by_display_name("@carol")
                .await
                .unwrap()
                .is_some()
        );
        assert_eq!(store.find_user_calls(), 1);
    }
}
