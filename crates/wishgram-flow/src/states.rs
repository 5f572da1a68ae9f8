// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed conversation states.
//!
//! Every step of a flow is its own variant carrying exactly the fields
//! collected so far, so an out-of-order event simply has no matching state to
//! land in. There is no grab-bag of optional fields to keep consistent.

use std::fmt;

use wishgram_core::{ChatId, NewWish, UserId, Wish, WishId, WishStatus};

/// A fully collected wish, ready to be confirmed and persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WishDraft {
    pub text: String,
    pub description: Option<String>,
    pub priority: u8,
    pub price: Option<f64>,
}

impl WishDraft {
    /// Binds the draft to its author and target chat for persistence.
    pub fn into_new_wish(self, user_id: UserId, chat_id: ChatId) -> NewWish {
        NewWish {
            user_id,
            chat_id,
            text: self.text,
            description: self.description,
            priority: self.priority,
            price: self.price,
        }
    }
}

/// Steps of the wish-creation flow, in collection order.
#[derive(Debug, Clone, PartialEq)]
pub enum AddWishState {
    /// Waiting for the wish text.
    AwaitingText,
    /// Text collected, waiting for an optional description.
    AwaitingDescription { text: String },
    /// Waiting for a priority pick.
    AwaitingPriority {
        text: String,
        description: Option<String>,
    },
    /// Waiting for an optional price.
    AwaitingPrice {
        text: String,
        description: Option<String>,
        priority: u8,
    },
    /// Everything collected, waiting for save or cancel.
    Confirming(WishDraft),
}

/// The slice of a wish the list renderer needs. Captured once when a list is
/// opened; later page turns render from this snapshot without re-fetching.
#[derive(Debug, Clone, PartialEq)]
pub struct WishRow {
    pub id: WishId,
    pub text: String,
    pub description: Option<String>,
    pub status: WishStatus,
    pub priority: u8,
    pub price: Option<f64>,
}

impl From<&Wish> for WishRow {
    fn from(wish: &Wish) -> Self {
        Self {
            id: wish.id,
            text: wish.text.clone(),
            description: wish.description.clone(),
            status: wish.status,
            priority: wish.priority,
            price: wish.price,
        }
    }
}

/// An immutable capture of a wish list at the moment it was opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishSnapshot {
    pub rows: Vec<WishRow>,
}

impl WishSnapshot {
    pub fn from_wishes(wishes: &[Wish]) -> Self {
        Self {
            rows: wishes.iter().map(WishRow::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// States of the list-browsing flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The owner is browsing their own list and may delete entries.
    Own {
        owner: UserId,
        snapshot: WishSnapshot,
        page: usize,
    },
    /// Somebody is browsing another user's list. Navigation only.
    Other {
        snapshot: WishSnapshot,
        page: usize,
        display_name: String,
    },
    /// A delete was requested and awaits confirmation. The browsing context
    /// is retained so cancelling restores the exact page.
    ConfirmingDelete {
        owner: UserId,
        snapshot: WishSnapshot,
        page: usize,
        pending: WishId,
    },
}

/// The whole conversation state of one chat scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Conversation {
    #[default]
    Idle,
    AddWish(AddWishState),
    View(ViewState),
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Conversation::Idle => "idle",
            Conversation::AddWish(AddWishState::AwaitingText) => "awaiting_text",
            Conversation::AddWish(AddWishState::AwaitingDescription { .. }) => {
                "awaiting_description"
            }
            Conversation::AddWish(AddWishState::AwaitingPriority { .. }) => "awaiting_priority",
            Conversation::AddWish(AddWishState::AwaitingPrice { .. }) => "awaiting_price",
            Conversation::AddWish(AddWishState::Confirming(_)) => "confirming_save",
            Conversation::View(ViewState::Own { .. }) => "viewing_own",
            Conversation::View(ViewState::Other { .. }) => "viewing_other",
            Conversation::View(ViewState::ConfirmingDelete { .. }) => "confirming_delete",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_binds_author_and_chat() {
        let draft = WishDraft {
            text: "new skates".into(),
            description: None,
            priority: 4,
            price: Some(99.9),
        };
        let new_wish = draft.into_new_wish(UserId(7), ChatId(-100));
        assert_eq!(new_wish.user_id, UserId(7));
        assert_eq!(new_wish.chat_id, ChatId(-100));
        assert_eq!(new_wish.text, "new skates");
        assert_eq!(new_wish.priority, 4);
    }

    #[test]
    fn snapshot_preserves_order() {
        let wishes = vec![
            Wish {
                id: WishId(2),
                user_id: UserId(1),
                chat_id: ChatId(1),
                text: "b".into(),
                description: None,
                status: WishStatus::Active,
                priority: 3,
                price: None,
                create_date: "2026-02-02T00:00:00+00:00".into(),
                complete_date: None,
            },
            Wish {
                id: WishId(1),
                user_id: UserId(1),
                chat_id: ChatId(1),
                text: "a".into(),
                description: Some("first".into()),
                status: WishStatus::Active,
                priority: 1,
                price: Some(5.0),
                create_date: "2026-01-01T00:00:00+00:00".into(),
                complete_date: None,
            },
        ];
        let snapshot = WishSnapshot::from_wishes(&wishes);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.rows[0].id, WishId(2));
        assert_eq!(snapshot.rows[1].description.as_deref(), Some("first"));
    }

    #[test]
    fn conversation_labels_are_stable() {
        assert_eq!(Conversation::Idle.to_string(), "idle");
        assert_eq!(
            Conversation::AddWish(AddWishState::AwaitingText).to_string(),
            "awaiting_text"
        );
        assert_eq!(
            Conversation::View(ViewState::Other {
                snapshot: WishSnapshot::default(),
                page: 0,
                display_name: "alice".into(),
            })
            .to_string(),
            "viewing_other"
        );
    }
}
