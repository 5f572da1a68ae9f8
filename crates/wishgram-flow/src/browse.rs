// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List browsing: the owner's paged view with deletion, and the read-only
//! view of another user's list requested with `/wish_list`.
//!
//! A list is fetched once when opened and browsed as a snapshot; page turns
//! and delete-cancels never go back to storage. Only a completed delete
//! re-fetches, because the snapshot is stale at that point.

use tracing::{debug, warn};

use wishgram_core::{ChatId, EventContext, Reply, WishId};

use crate::states::{Conversation, ViewState, WishSnapshot};
use crate::{Engine, pager, render};

impl Engine {
    /// Back to the main menu from anywhere, dropping any flow state.
    pub(crate) fn back_to_main_menu(&self, conversation: &mut Conversation) -> Vec<Reply> {
        *conversation = Conversation::Idle;
        let (text, keyboard) = render::main_menu();
        vec![Reply::edit(text, keyboard)]
    }

    /// Opens the acting user's own list at the first page.
    ///
    /// An empty list shows a hint instead and leaves the conversation state
    /// alone, so an in-progress flow in the same chat survives the detour.
    pub(crate) async fn open_own_list(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
    ) -> Vec<Reply> {
        let wishes = match self.store.list_wishes_by_user(ctx.actor.id, None).await {
            Ok(wishes) => wishes,
            Err(error) => {
                warn!(scope = %ctx.scope, user = %ctx.actor.id, %error, "failed to load wishes");
                return vec![Reply::alert(render::storage_error())];
            }
        };
        if wishes.is_empty() {
            let (text, keyboard) = render::own_list_empty();
            return vec![Reply::edit(text, keyboard)];
        }

        let snapshot = WishSnapshot::from_wishes(&wishes);
        let view = pager::paginate(&snapshot.rows, 0, self.page_size);
        let (text, keyboard) = render::own_page(&view);
        *conversation = Conversation::View(ViewState::Own {
            owner: ctx.actor.id,
            snapshot,
            page: 0,
        });
        vec![Reply::edit(text, keyboard)]
    }

    /// `/wish_list <name>`: looks up another user's list and delivers it to
    /// the requester's private chat, so group chats only see a short
    /// acknowledgement. The browsing session lives in that private chat.
    pub(crate) async fn on_wish_list(&self, ctx: &EventContext, query: &str) -> Vec<Reply> {
        let query = query.trim();
        if query.is_empty() {
            return vec![Reply::respond(render::wish_list_usage())];
        }

        let target = match self.store.find_user_by_display_name(query).await {
            Ok(target) => target,
            Err(error) => {
                warn!(scope = %ctx.scope, query, %error, "failed to look up user");
                return vec![Reply::respond(render::storage_error())];
            }
        };
        let Some(target) = target else {
            return vec![Reply::respond(render::user_not_found(query))];
        };

        let wishes = match self.store.list_wishes_by_user(target.id, None).await {
            Ok(wishes) => wishes,
            Err(error) => {
                warn!(scope = %ctx.scope, user = %target.id, %error, "failed to load wishes");
                return vec![Reply::respond(render::storage_error())];
            }
        };
        if wishes.is_empty() {
            return vec![Reply::respond(render::other_list_empty(query))];
        }

        let snapshot = WishSnapshot::from_wishes(&wishes);
        let view = pager::paginate(&snapshot.rows, 0, self.page_size);
        let (text, keyboard) = render::other_page(&view, query);

        // Private chats share their id with the user.
        let private = ChatId(ctx.actor.id.0);
        {
            let slot = self.conversations.slot(private);
            let mut private_conversation = slot.lock().await;
            *private_conversation = Conversation::View(ViewState::Other {
                snapshot,
                page: 0,
                display_name: query.to_string(),
            });
        }

        vec![
            Reply::direct(private, text, Some(keyboard)),
            Reply::respond(render::list_sent_to_private(query)),
        ]
    }

    /// Turns a page of the own-list view from the cached snapshot. Requested
    /// pages are clamped into range, so stale buttons cannot point past the
    /// end.
    pub(crate) fn turn_own_page(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
        requested: usize,
    ) -> Vec<Reply> {
        match conversation {
            Conversation::View(ViewState::Own { snapshot, page, .. }) => {
                *page = pager::clamp_page(snapshot.len(), requested, self.page_size);
                let view = pager::paginate(&snapshot.rows, *page, self.page_size);
                let (text, keyboard) = render::own_page(&view);
                vec![Reply::edit(text, keyboard)]
            }
            other => {
                debug!(scope = %ctx.scope, state = %other, "ignoring page turn in this state");
                Vec::new()
            }
        }
    }

    pub(crate) fn turn_other_page(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
        requested: usize,
    ) -> Vec<Reply> {
        match conversation {
            Conversation::View(ViewState::Other {
                snapshot,
                page,
                display_name,
            }) => {
                *page = pager::clamp_page(snapshot.len(), requested, self.page_size);
                let view = pager::paginate(&snapshot.rows, *page, self.page_size);
                let (text, keyboard) = render::other_page(&view, display_name);
                vec![Reply::edit(text, keyboard)]
            }
            other => {
                debug!(scope = %ctx.scope, state = %other, "ignoring page turn in this state");
                Vec::new()
            }
        }
    }

    /// First half of a delete: checks the wish still exists and belongs to
    /// the viewer, then asks for confirmation. A missing or foreign wish is
    /// reported without leaving the list view.
    pub(crate) async fn request_delete(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
        id: WishId,
    ) -> Vec<Reply> {
        let (owner, snapshot, page) = match std::mem::take(conversation) {
            Conversation::View(ViewState::Own {
                owner,
                snapshot,
                page,
            }) => (owner, snapshot, page),
            other => {
                *conversation = other;
                debug!(scope = %ctx.scope, state = %conversation, "ignoring delete in this state");
                return Vec::new();
            }
        };
        if owner != ctx.actor.id {
            *conversation = Conversation::View(ViewState::Own {
                owner,
                snapshot,
                page,
            });
            debug!(scope = %ctx.scope, user = %ctx.actor.id, "ignoring delete from non-owner");
            return Vec::new();
        }

        match self.store.get_wish(id).await {
            Ok(Some(wish)) if wish.user_id == owner => {
                let (text, keyboard) = render::delete_confirm(&wish.text);
                *conversation = Conversation::View(ViewState::ConfirmingDelete {
                    owner,
                    snapshot,
                    page,
                    pending: id,
                });
                vec![Reply::edit(text, keyboard)]
            }
            Ok(_) => {
                // Gone since the list was opened, or a token for somebody
                // else's wish.
                *conversation = Conversation::View(ViewState::Own {
                    owner,
                    snapshot,
                    page,
                });
                vec![Reply::alert(render::wish_not_found_notice())]
            }
            Err(error) => {
                warn!(scope = %ctx.scope, wish = %id, %error, "failed to load wish");
                *conversation = Conversation::View(ViewState::Own {
                    owner,
                    snapshot,
                    page,
                });
                vec![Reply::alert(render::storage_error())]
            }
        }
    }

    /// Second half of a delete. On success the list is re-fetched and the
    /// remembered page clamped onto the shorter list; deleting the last wish
    /// ends the view. On failure the confirmation stays up so the user can
    /// retry or cancel.
    pub(crate) async fn confirm_delete(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
    ) -> Vec<Reply> {
        let (owner, snapshot, page, pending) = match std::mem::take(conversation) {
            Conversation::View(ViewState::ConfirmingDelete {
                owner,
                snapshot,
                page,
                pending,
            }) => (owner, snapshot, page, pending),
            other => {
                *conversation = other;
                debug!(scope = %ctx.scope, state = %conversation, "ignoring confirm in this state");
                return Vec::new();
            }
        };
        if owner != ctx.actor.id {
            *conversation = Conversation::View(ViewState::ConfirmingDelete {
                owner,
                snapshot,
                page,
                pending,
            });
            debug!(scope = %ctx.scope, user = %ctx.actor.id, "ignoring confirm from non-owner");
            return Vec::new();
        }

        if let Err(error) = self.store.delete_wish(pending).await {
            warn!(scope = %ctx.scope, wish = %pending, %error, "failed to delete wish");
            *conversation = Conversation::View(ViewState::ConfirmingDelete {
                owner,
                snapshot,
                page,
                pending,
            });
            return vec![Reply::alert(render::delete_failed_notice())];
        }
        debug!(scope = %ctx.scope, wish = %pending, "wish deleted");

        let mut replies = vec![Reply::notice(render::wish_deleted_notice())];
        match self.store.list_wishes_by_user(owner, None).await {
            Ok(wishes) if wishes.is_empty() => {
                let (text, keyboard) = render::own_list_exhausted();
                replies.push(Reply::edit(text, keyboard));
                // Conversation stays cleared.
            }
            Ok(wishes) => {
                let snapshot = WishSnapshot::from_wishes(&wishes);
                let page = pager::clamp_page(snapshot.len(), page, self.page_size);
                let view = pager::paginate(&snapshot.rows, page, self.page_size);
                let (text, keyboard) = render::own_page(&view);
                replies.push(Reply::edit(text, keyboard));
                *conversation = Conversation::View(ViewState::Own {
                    owner,
                    snapshot,
                    page,
                });
            }
            Err(error) => {
                warn!(scope = %ctx.scope, user = %owner, %error, "failed to reload wishes");
                replies.push(Reply::edit(render::storage_error(), render::main_menu_keyboard()));
            }
        }
        replies
    }

    /// Cancels a pending delete and restores the exact page the user was on,
    /// straight from the cached snapshot.
    pub(crate) fn cancel_delete(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
    ) -> Vec<Reply> {
        let (owner, snapshot, page) = match std::mem::take(conversation) {
            Conversation::View(ViewState::ConfirmingDelete {
                owner,
                snapshot,
                page,
                ..
            }) => (owner, snapshot, page),
            other => {
                *conversation = other;
                debug!(scope = %ctx.scope, state = %conversation, "ignoring cancel in this state");
                return Vec::new();
            }
        };

        let view = pager::paginate(&snapshot.rows, page, self.page_size);
        let (text, keyboard) = render::own_page(&view);
        *conversation = Conversation::View(ViewState::Own {
            owner,
            snapshot,
            page,
        });
        vec![Reply::edit(text, keyboard)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wishgram_core::{
        Actor, Command, Event, NewWish, ReplyTarget, UserId, UserProfile, WishStore,
    };
    use wishgram_test_utils::MemoryWishStore;

    fn ctx(chat: i64, user: i64) -> EventContext {
        EventContext::new(
            ChatId(chat),
            Actor::new(
                UserId(user),
                UserProfile {
                    username: Some(format!("user{user}")),
                    first_name: None,
                    last_name: None,
                },
            ),
        )
    }

    fn engine_with_store() -> (Arc<MemoryWishStore>, Engine) {
        let store = Arc::new(MemoryWishStore::new());
        let engine = Engine::new(store.clone(), 5);
        (store, engine)
    }

    fn action(token: &str) -> Event {
        Event::Action {
            token: token.into(),
        }
    }

    async fn seed_wishes(store: &MemoryWishStore, user: i64, count: usize) -> Vec<WishId> {
        let mut ids = Vec::new();
        for i in 1..=count {
            let id = store
                .create_wish(&NewWish {
                    user_id: UserId(user),
                    chat_id: ChatId(user),
                    text: format!("wish {i}"),
                    description: None,
                    priority: 3,
                    price: None,
                })
                .await
                .unwrap();
            ids.push(id);
        }
        ids
    }

    #[tokio::test]
    async fn opening_the_list_snapshots_and_shows_page_one() {
        let (store, engine) = engine_with_store();
        seed_wishes(&store, 1, 7).await;
        let ctx = ctx(10, 1);

        let replies = engine.handle(&ctx, action("show_my_wishes")).await;
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].target, ReplyTarget::Edit);

        let plain = replies[0].text.to_plain_string();
        assert!(plain.contains("Your wishes:"));
        // Newest first: wish 7 opens the list.
        assert!(plain.contains("1. wish 7"));
        assert!(plain.contains("5. wish 3"));
        assert!(!plain.contains("6. wish 2"));
        assert!(plain.contains("📄 Page 1 of 2"));

        assert!(matches!(
            engine.conversation(ChatId(10)).await,
            Conversation::View(ViewState::Own { page: 0, .. })
        ));
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn empty_list_hints_and_leaves_state_alone() {
        let (_, engine) = engine_with_store();
        let ctx = ctx(10, 1);

        let replies = engine.handle(&ctx, action("show_my_wishes")).await;
        let plain = replies[0].text.to_plain_string();
        assert!(plain.contains("don't have any wishes yet"));
        let tokens: Vec<&str> = replies[0]
            .keyboard
            .as_ref()
            .unwrap()
            .rows
            .iter()
            .flatten()
            .map(|b| b.token.as_str())
            .collect();
        assert_eq!(tokens, vec!["add_wish_start", "main_menu"]);
        assert_eq!(engine.conversation(ChatId(10)).await, Conversation::Idle);
    }

    #[tokio::test]
    async fn page_turns_read_the_snapshot_not_the_store() {
        let (store, engine) = engine_with_store();
        seed_wishes(&store, 1, 12).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        let second = engine.handle(&ctx, action("page_wishes_1")).await;
        let third = engine.handle(&ctx, action("page_wishes_2")).await;

        assert!(second[0].text.to_plain_string().contains("6. wish 7"));
        assert!(third[0].text.to_plain_string().contains("📄 Page 3 of 3"));
        assert_eq!(store.list_calls(), 1, "page turns must not re-fetch");
    }

    #[tokio::test]
    async fn page_requests_beyond_the_end_are_clamped() {
        let (store, engine) = engine_with_store();
        seed_wishes(&store, 1, 12).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        let replies = engine.handle(&ctx, action("page_wishes_99")).await;
        assert!(replies[0].text.to_plain_string().contains("📄 Page 3 of 3"));
        assert!(matches!(
            engine.conversation(ChatId(10)).await,
            Conversation::View(ViewState::Own { page: 2, .. })
        ));
    }

    #[tokio::test]
    async fn page_turn_outside_a_view_is_ignored() {
        let (_, engine) = engine_with_store();
        let ctx = ctx(10, 1);
        assert!(engine.handle(&ctx, action("page_wishes_1")).await.is_empty());
        assert!(
            engine
                .handle(&ctx, action("page_other_wishes_1"))
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn deleting_the_last_item_of_the_last_page_steps_back() {
        let (store, engine) = engine_with_store();
        let ids = seed_wishes(&store, 1, 6).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        engine.handle(&ctx, action("page_wishes_1")).await;

        // Page 2 holds exactly the oldest wish.
        let confirm = engine
            .handle(&ctx, action(&format!("wish_delete_{}", ids[0])))
            .await;
        assert!(
            confirm[0]
                .text
                .to_plain_string()
                .contains("Are you sure you want to delete this wish?")
        );

        let replies = engine.handle(&ctx, action("confirm_delete_wish")).await;
        assert_eq!(replies[0].target, ReplyTarget::Notice { alert: false });
        assert!(replies[0].text.to_plain_string().contains("Wish deleted!"));

        // Five wishes remain: one page, shown without a footer.
        let plain = replies[1].text.to_plain_string();
        assert!(plain.contains("1. wish 6"));
        assert!(!plain.contains("📄 Page"));
        assert!(matches!(
            engine.conversation(ChatId(10)).await,
            Conversation::View(ViewState::Own { page: 0, .. })
        ));
        assert_eq!(store.wish_count().await, 5);
    }

    #[tokio::test]
    async fn deleting_the_only_wish_ends_the_view() {
        let (store, engine) = engine_with_store();
        let ids = seed_wishes(&store, 1, 1).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        engine
            .handle(&ctx, action(&format!("wish_delete_{}", ids[0])))
            .await;
        let replies = engine.handle(&ctx, action("confirm_delete_wish")).await;

        assert!(replies[1].text.to_plain_string().contains("no more wishes"));
        assert_eq!(engine.conversation(ChatId(10)).await, Conversation::Idle);
        assert_eq!(store.wish_count().await, 0);
    }

    #[tokio::test]
    async fn cancelling_a_delete_restores_the_cached_page() {
        let (store, engine) = engine_with_store();
        let ids = seed_wishes(&store, 1, 12).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        let before = engine.handle(&ctx, action("page_wishes_1")).await;
        engine
            .handle(&ctx, action(&format!("wish_delete_{}", ids[6])))
            .await;
        let restored = engine.handle(&ctx, action("cancel_delete_wish")).await;

        assert_eq!(restored[0].text, before[0].text);
        assert_eq!(restored[0].keyboard, before[0].keyboard);
        assert!(matches!(
            engine.conversation(ChatId(10)).await,
            Conversation::View(ViewState::Own { page: 1, .. })
        ));
        assert_eq!(store.list_calls(), 1, "cancel must not re-fetch");
        assert_eq!(store.wish_count().await, 12);
    }

    #[tokio::test]
    async fn deleting_a_vanished_wish_reports_and_stays() {
        let (store, engine) = engine_with_store();
        seed_wishes(&store, 1, 3).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        let replies = engine.handle(&ctx, action("wish_delete_999")).await;

        assert_eq!(replies[0].target, ReplyTarget::Notice { alert: true });
        assert!(replies[0].text.to_plain_string().contains("Wish not found"));
        assert!(matches!(
            engine.conversation(ChatId(10)).await,
            Conversation::View(ViewState::Own { page: 0, .. })
        ));
        assert_eq!(store.delete_calls(), 0);
    }

    #[tokio::test]
    async fn a_token_for_somebody_elses_wish_is_treated_as_missing() {
        let (store, engine) = engine_with_store();
        seed_wishes(&store, 1, 1).await;
        let foreign = seed_wishes(&store, 2, 1).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        let replies = engine
            .handle(&ctx, action(&format!("wish_delete_{}", foreign[0])))
            .await;

        assert!(replies[0].text.to_plain_string().contains("Wish not found"));
        assert_eq!(store.delete_calls(), 0);
        assert_eq!(store.wish_count().await, 2);
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_confirmation_up() {
        let (store, engine) = engine_with_store();
        let ids = seed_wishes(&store, 1, 2).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        engine
            .handle(&ctx, action(&format!("wish_delete_{}", ids[1])))
            .await;

        store.fail_delete(true);
        let failed = engine.handle(&ctx, action("confirm_delete_wish")).await;
        assert_eq!(failed[0].target, ReplyTarget::Notice { alert: true });
        assert!(
            failed[0]
                .text
                .to_plain_string()
                .contains("Couldn't delete the wish")
        );
        assert!(matches!(
            engine.conversation(ChatId(10)).await,
            Conversation::View(ViewState::ConfirmingDelete { .. })
        ));

        // The retry path still works.
        store.fail_delete(false);
        let replies = engine.handle(&ctx, action("confirm_delete_wish")).await;
        assert!(replies[0].text.to_plain_string().contains("Wish deleted!"));
        assert_eq!(store.wish_count().await, 1);
    }

    #[tokio::test]
    async fn delete_presses_from_other_users_are_ignored() {
        let (store, engine) = engine_with_store();
        let ids = seed_wishes(&store, 1, 2).await;
        let owner = ctx(-100, 1);
        let bystander = ctx(-100, 2);

        engine.handle(&owner, action("show_my_wishes")).await;
        assert!(
            engine
                .handle(&bystander, action(&format!("wish_delete_{}", ids[0])))
                .await
                .is_empty()
        );

        engine
            .handle(&owner, action(&format!("wish_delete_{}", ids[0])))
            .await;
        assert!(
            engine
                .handle(&bystander, action("confirm_delete_wish"))
                .await
                .is_empty()
        );
        assert_eq!(store.wish_count().await, 2);

        // The owner's confirmation is still pending and still works.
        let replies = engine.handle(&owner, action("confirm_delete_wish")).await;
        assert!(replies[0].text.to_plain_string().contains("Wish deleted!"));
    }

    #[tokio::test]
    async fn main_menu_resets_the_view() {
        let (store, engine) = engine_with_store();
        seed_wishes(&store, 1, 3).await;
        let ctx = ctx(10, 1);

        engine.handle(&ctx, action("show_my_wishes")).await;
        let replies = engine.handle(&ctx, action("main_menu")).await;

        assert!(replies[0].text.to_plain_string().contains("Main menu:"));
        assert_eq!(engine.conversation(ChatId(10)).await, Conversation::Idle);
    }

    #[tokio::test]
    async fn list_failure_surfaces_an_error() {
        let (store, engine) = engine_with_store();
        let ctx = ctx(10, 1);

        store.fail_list(true);
        let replies = engine.handle(&ctx, action("show_my_wishes")).await;
        assert_eq!(replies[0].target, ReplyTarget::Notice { alert: true });
        assert!(
            replies[0]
                .text
                .to_plain_string()
                .contains("Something went wrong")
        );
        assert_eq!(engine.conversation(ChatId(10)).await, Conversation::Idle);
    }

    #[tokio::test]
    async fn wish_list_command_delivers_to_the_private_chat() {
        let (store, engine) = engine_with_store();
        store
            .ensure_user(&Actor::new(
                UserId(1),
                UserProfile {
                    username: Some("user1".into()),
                    first_name: None,
                    last_name: None,
                },
            ))
            .await
            .unwrap();
        seed_wishes(&store, 1, 6).await;

        // User 2 asks from a group chat.
        let group = ctx(-200, 2);
        let replies = engine
            .handle(
                &group,
                Event::Command(Command::WishList {
                    query: "@user1".into(),
                }),
            )
            .await;

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].target, ReplyTarget::Direct(ChatId(2)));
        let plain = replies[0].text.to_plain_string();
        assert!(plain.contains("Wishes of @user1:"));
        assert!(plain.contains("📄 Page 1 of 2"));
        let tokens: Vec<&str> = replies[0]
            .keyboard
            .as_ref()
            .unwrap()
            .rows
            .iter()
            .flatten()
            .map(|b| b.token.as_str())
            .collect();
        assert!(tokens.contains(&"page_other_wishes_1"));
        assert!(!tokens.iter().any(|t| t.starts_with("wish_delete_")));

        assert_eq!(replies[1].target, ReplyTarget::Respond);
        assert!(
            replies[1]
                .text
                .to_plain_string()
                .contains("sent to your private messages")
        );

        // The browsing session lives in the requester's private chat, not
        // the group.
        assert_eq!(engine.conversation(ChatId(-200)).await, Conversation::Idle);
        assert!(matches!(
            engine.conversation(ChatId(2)).await,
            Conversation::View(ViewState::Other { page: 0, .. })
        ));

        // Page turns happen in the private chat from the snapshot.
        let private = ctx(2, 2);
        let turned = engine.handle(&private, action("page_other_wishes_1")).await;
        assert!(turned[0].text.to_plain_string().contains("📄 Page 2 of 2"));
        assert_eq!(store.list_calls(), 1);

        // Delete tokens mean nothing in somebody else's list.
        assert!(engine.handle(&private, action("wish_delete_1")).await.is_empty());
    }

    #[tokio::test]
    async fn wish_list_command_validates_its_argument() {
        let (store, engine) = engine_with_store();
        let group = ctx(-200, 2);

        let usage = engine
            .handle(
                &group,
                Event::Command(Command::WishList { query: "  ".into() }),
            )
            .await;
        assert!(usage[0].text.to_plain_string().contains("Usage: /wish_list"));

        let missing = engine
            .handle(
                &group,
                Event::Command(Command::WishList {
                    query: "@nobody".into(),
                }),
            )
            .await;
        assert!(
            missing[0]
                .text
                .to_plain_string()
                .contains("User @nobody not found")
        );

        store
            .ensure_user(&Actor::new(
                UserId(3),
                UserProfile {
                    username: Some("user3".into()),
                    first_name: None,
                    last_name: None,
                },
            ))
            .await
            .unwrap();
        let empty = engine
            .handle(
                &group,
                Event::Command(Command::WishList {
                    query: "@user3".into(),
                }),
            )
            .await;
        assert!(
            empty[0]
                .text
                .to_plain_string()
                .contains("@user3 has no wishes yet")
        );

        // None of these open a browsing session anywhere.
        assert_eq!(engine.conversation(ChatId(2)).await, Conversation::Idle);
        assert_eq!(engine.conversation(ChatId(-200)).await, Conversation::Idle);
    }
}
