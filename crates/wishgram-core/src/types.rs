// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Wishgram workspace.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifies the chat a conversation lives in. Conversation state is scoped
/// per chat, so this is also the key of the conversation store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub i64);

/// Identifies a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Identifies a stored wish (the database rowid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WishId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for WishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle status of a wish. Stored as lowercase text in the database.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WishStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Name fields of a chat user, as supplied by the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// The acting user behind an inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub profile: UserProfile,
}

impl Actor {
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }
}

/// A registered user row.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// RFC 3339 timestamp set at first registration.
    pub registration_date: String,
}

/// A stored wish.
#[derive(Debug, Clone, PartialEq)]
pub struct Wish {
    pub id: WishId,
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub text: String,
    pub description: Option<String>,
    pub status: WishStatus,
    pub priority: u8,
    pub price: Option<f64>,
    /// RFC 3339 timestamp set at creation.
    pub create_date: String,
    /// RFC 3339 timestamp set when the wish is marked completed.
    pub complete_date: Option<String>,
}

/// The field set required to persist a new wish.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWish {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub text: String,
    pub description: Option<String>,
    pub priority: u8,
    pub price: Option<f64>,
}

/// Where an inbound event happened and who produced it.
#[derive(Debug, Clone)]
pub struct EventContext {
    /// The chat the event arrived in. Conversation state is keyed by this.
    pub scope: ChatId,
    pub actor: Actor,
}

impl EventContext {
    pub fn new(scope: ChatId, actor: Actor) -> Self {
        Self { scope, actor }
    }
}

/// A bot command extracted from an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// `/wish_list <display name>`.
    WishList { query: String },
}

/// A transport-agnostic inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(Command),
    /// Free-form message text.
    Text(String),
    /// An opaque action token attached to a pressed button. Parsed only by
    /// the conversation engine; the transport never interprets it.
    Action { token: String },
}
