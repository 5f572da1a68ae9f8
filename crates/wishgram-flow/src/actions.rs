// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The button-token vocabulary.
//!
//! Tokens travel through the transport as opaque strings and are parsed back
//! here, and nowhere else. Unknown or malformed tokens parse to `None` and
//! are dropped by the engine.

use wishgram_core::WishId;

/// A parsed button token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start the wish-creation flow. Valid from any state.
    AddWishStart,
    /// Open the acting user's own list. Valid from any state.
    ShowMyWishes,
    /// Back to the main menu, clearing any flow. Valid from any state.
    MainMenu,
    /// Abort wish creation. Valid from any state.
    CancelWish,
    SkipDescription,
    /// A priority pick, always in `1..=5`.
    Priority(u8),
    SkipPrice,
    ConfirmSave,
    /// Turn to a page of the own-list view.
    OwnPage(usize),
    /// Turn to a page of the other-user view.
    OtherPage(usize),
    /// Ask to delete one of the viewer's wishes.
    DeleteWish(WishId),
    ConfirmDelete,
    CancelDelete,
}

impl Action {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "add_wish_start" => return Some(Action::AddWishStart),
            "show_my_wishes" => return Some(Action::ShowMyWishes),
            "main_menu" => return Some(Action::MainMenu),
            "cancel_wish" => return Some(Action::CancelWish),
            "skip_description" => return Some(Action::SkipDescription),
            "skip_price" => return Some(Action::SkipPrice),
            "confirm_save_wish" => return Some(Action::ConfirmSave),
            "confirm_delete_wish" => return Some(Action::ConfirmDelete),
            "cancel_delete_wish" => return Some(Action::CancelDelete),
            _ => {}
        }
        if let Some(rest) = token.strip_prefix("priority_")
            && let Ok(level) = rest.parse::<u8>()
            && (1..=5).contains(&level)
        {
            return Some(Action::Priority(level));
        }
        if let Some(rest) = token.strip_prefix("page_other_wishes_")
            && let Ok(page) = rest.parse::<usize>()
        {
            return Some(Action::OtherPage(page));
        }
        if let Some(rest) = token.strip_prefix("page_wishes_")
            && let Ok(page) = rest.parse::<usize>()
        {
            return Some(Action::OwnPage(page));
        }
        if let Some(rest) = token.strip_prefix("wish_delete_")
            && let Ok(id) = rest.parse::<i64>()
        {
            return Some(Action::DeleteWish(WishId(id)));
        }
        None
    }

    /// The wire form of this action, the exact inverse of [`Action::parse`].
    pub fn encode(&self) -> String {
        match self {
            Action::AddWishStart => "add_wish_start".into(),
            Action::ShowMyWishes => "show_my_wishes".into(),
            Action::MainMenu => "main_menu".into(),
            Action::CancelWish => "cancel_wish".into(),
            Action::SkipDescription => "skip_description".into(),
            Action::Priority(level) => format!("priority_{level}"),
            Action::SkipPrice => "skip_price".into(),
            Action::ConfirmSave => "confirm_save_wish".into(),
            Action::OwnPage(page) => format!("page_wishes_{page}"),
            Action::OtherPage(page) => format!("page_other_wishes_{page}"),
            Action::DeleteWish(id) => format!("wish_delete_{id}"),
            Action::ConfirmDelete => "confirm_delete_wish".into(),
            Action::CancelDelete => "cancel_delete_wish".into(),
        }
    }
}
