// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction of engine events from Telegram updates.
//!
//! Everything the engine needs to know about an update is reduced to an
//! [`EventContext`] (chat scope plus acting user) and an [`Event`]. Updates
//! without a sender or without usable content extract to `None` and are
//! acknowledged without reaching the engine.

use teloxide::types::{CallbackQuery, Message, User};

use wishgram_core::{Actor, ChatId, Event, EventContext, UserId, UserProfile};

fn actor_of(user: &User) -> Actor {
    Actor::new(
        UserId(user.id.0 as i64),
        UserProfile {
            username: user.username.clone(),
            first_name: Some(user.first_name.clone()),
            last_name: user.last_name.clone(),
        },
    )
}

/// Context of a plain or command message. `None` for senderless messages
/// such as channel posts.
pub fn message_context(msg: &Message) -> Option<EventContext> {
    let from = msg.from.as_ref()?;
    Some(EventContext::new(ChatId(msg.chat.id.0), actor_of(from)))
}

/// Context and action event of a callback query. `None` when the query
/// carries no data or its message is no longer accessible, in which case
/// the press can only be acknowledged.
pub fn callback_parts(query: &CallbackQuery) -> Option<(EventContext, Event)> {
    let token = query.data.clone()?;
    let message = query.regular_message()?;
    let ctx = EventContext::new(ChatId(message.chat.id.0), actor_of(&query.from));
    Some((ctx, Event::Action { token }))
}
