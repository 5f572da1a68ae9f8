// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation engine.
//!
//! [`Engine::handle`] turns one inbound [`Event`] into a batch of outbound
//! [`Reply`] values and the next conversation state. It is total: malformed
//! tokens and events that make no sense in the current state are logged and
//! dropped, never errors. Conversation state is keyed by chat scope, and one
//! scope is locked for the whole of one event, so concurrent button presses
//! in the same chat serialize instead of racing the store.

pub mod actions;
pub mod pager;
pub mod render;
pub mod states;

mod browse;
mod create;

pub use actions::Action;
pub use states::{AddWishState, Conversation, ViewState, WishDraft, WishRow, WishSnapshot};

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use wishgram_core::{ChatId, Command, Event, EventContext, Reply, WishStore};

/// One conversation slot per chat scope, created on first touch.
#[derive(Default)]
struct ConversationStore {
    scopes: DashMap<ChatId, Arc<Mutex<Conversation>>>,
}

impl ConversationStore {
    fn slot(&self, scope: ChatId) -> Arc<Mutex<Conversation>> {
        self.scopes.entry(scope).or_default().value().clone()
    }
}

pub struct Engine {
    store: Arc<dyn WishStore>,
    conversations: ConversationStore,
    page_size: usize,
}

impl Engine {
    pub fn new(store: Arc<dyn WishStore>, page_size: usize) -> Self {
        Self {
            store,
            conversations: ConversationStore::default(),
            // A zero page size would make every list unrenderable.
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Processes one inbound event and returns the replies to deliver.
    pub async fn handle(&self, ctx: &EventContext, event: Event) -> Vec<Reply> {
        match event {
            Event::Command(Command::Start) => self.on_start(ctx).await,
            Event::Command(Command::WishList { query }) => self.on_wish_list(ctx, &query).await,
            Event::Text(message) => self.on_text(ctx, message).await,
            Event::Action { token } => match Action::parse(&token) {
                Some(action) => self.on_action(ctx, action).await,
                None => {
                    debug!(scope = %ctx.scope, token, "dropping unknown action token");
                    Vec::new()
                }
            },
        }
    }

    /// A copy of the conversation state for a scope. Mainly for assertions.
    pub async fn conversation(&self, scope: ChatId) -> Conversation {
        self.conversations.slot(scope).lock().await.clone()
    }

    async fn on_start(&self, ctx: &EventContext) -> Vec<Reply> {
        if let Err(error) = self.store.ensure_user(&ctx.actor).await {
            warn!(scope = %ctx.scope, user = %ctx.actor.id, %error, "failed to register user");
        }
        let (text, keyboard) = render::welcome();
        vec![Reply::respond_with(text, keyboard)]
    }

    async fn on_text(&self, ctx: &EventContext, message: String) -> Vec<Reply> {
        let slot = self.conversations.slot(ctx.scope);
        let mut conversation = slot.lock().await;
        self.creation_text(ctx, &mut conversation, message)
    }

    async fn on_action(&self, ctx: &EventContext, action: Action) -> Vec<Reply> {
        let slot = self.conversations.slot(ctx.scope);
        let mut conversation = slot.lock().await;
        match action {
            // Entry points, valid whatever the current state is.
            Action::AddWishStart => self.begin_creation(&mut conversation),
            Action::CancelWish => self.cancel_creation(&mut conversation),
            Action::MainMenu => self.back_to_main_menu(&mut conversation),
            Action::ShowMyWishes => self.open_own_list(ctx, &mut conversation).await,
            // Steps bound to a specific state.
            Action::SkipDescription | Action::Priority(_) | Action::SkipPrice => {
                self.advance_creation(ctx, &mut conversation, action)
            }
            Action::ConfirmSave => self.save_draft(ctx, &mut conversation).await,
            Action::OwnPage(page) => self.turn_own_page(ctx, &mut conversation, page),
            Action::OtherPage(page) => self.turn_other_page(ctx, &mut conversation, page),
            Action::DeleteWish(id) => self.request_delete(ctx, &mut conversation, id).await,
            Action::ConfirmDelete => self.confirm_delete(ctx, &mut conversation).await,
            Action::CancelDelete => self.cancel_delete(ctx, &mut conversation),
        }
    }
}
