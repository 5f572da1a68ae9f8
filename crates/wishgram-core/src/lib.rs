// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Wishgram bot.
//!
//! This crate holds the error type, the domain model, the outbound reply
//! model, and the [`WishStore`] persistence trait. Everything here is
//! transport-agnostic; the conversation engine and the Telegram adapter both
//! build on these types.

pub mod error;
pub mod reply;
pub mod store;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::WishgramError;
pub use reply::{Button, Keyboard, Reply, ReplyTarget, Span, Text};
pub use store::{WishStore, normalize_display_name};
pub use types::{
    Actor, ChatId, Command, Event, EventContext, NewWish, User, UserId, UserProfile, Wish, WishId,
    WishStatus,
};
