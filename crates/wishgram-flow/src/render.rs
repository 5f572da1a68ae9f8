// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! All user-visible texts and keyboards.
//!
//! The engine decides *where* a reply goes; this module decides *what* it
//! looks like. Keyboards carry encoded [`Action`] tokens so the wire strings
//! stay in one vocabulary.

use wishgram_core::{Button, Keyboard, Text, WishId};

use crate::actions::Action;
use crate::pager::Page;
use crate::states::{WishDraft, WishRow};

const DESCRIPTION_PREVIEW_CHARS: usize = 40;

fn button(label: &str, action: Action) -> Button {
    Button::new(label, action.encode())
}

/// The two-row entry keyboard shown with the greeting and after cancels.
pub fn main_menu_keyboard() -> Keyboard {
    Keyboard::new()
        .row(vec![button("🎁 Add a wish", Action::AddWishStart)])
        .row(vec![button("📋 View my wishes", Action::ShowMyWishes)])
}

/// Keyboard offered whenever a list turns out to be empty.
fn empty_list_keyboard() -> Keyboard {
    Keyboard::new()
        .row(vec![button("🎁 Add a wish", Action::AddWishStart)])
        .row(vec![button("🏠 Main menu", Action::MainMenu)])
}

fn priority_keyboard() -> Keyboard {
    Keyboard::new()
        .row(vec![
            button("1⭐", Action::Priority(1)),
            button("2⭐", Action::Priority(2)),
            button("3⭐", Action::Priority(3)),
        ])
        .row(vec![
            button("4⭐", Action::Priority(4)),
            button("5⭐", Action::Priority(5)),
        ])
}

pub fn welcome() -> (Text, Keyboard) {
    (Text::plain("Welcome to Wishgram! 🎉"), main_menu_keyboard())
}

pub fn main_menu() -> (Text, Keyboard) {
    (Text::plain("Main menu:"), main_menu_keyboard())
}

pub fn creation_cancelled() -> (Text, Keyboard) {
    (
        Text::plain("❌ Wish creation cancelled.\n\nWhat would you like to do?"),
        main_menu_keyboard(),
    )
}

pub fn wish_text_prompt() -> Text {
    Text::plain("✍️ Tell me what you'd like to add to your wish list:")
}

pub fn wish_text_too_short() -> Text {
    Text::plain("❌ The wish text must be at least 3 characters long. Try again:")
}

pub fn description_prompt(wish_text: &str) -> (Text, Keyboard) {
    let text = Text::plain(format!(
        "✅ Got it: \"{wish_text}\"\n\n📝 Add a description (optional) or press 'Skip':"
    ));
    let keyboard = Keyboard::new().row(vec![button("Skip", Action::SkipDescription)]);
    (text, keyboard)
}

pub fn priority_prompt() -> (Text, Keyboard) {
    (
        Text::plain("⭐ Pick a priority for the wish (1 = low, 5 = high):"),
        priority_keyboard(),
    )
}

pub fn price_prompt(priority: u8) -> (Text, Keyboard) {
    let text = Text::plain(format!(
        "✅ Priority set to {priority}⭐\n\n💰 Add a price (optional) or press 'Skip':"
    ));
    let keyboard = Keyboard::new().row(vec![button("Skip", Action::SkipPrice)]);
    (text, keyboard)
}

pub fn price_negative() -> Text {
    Text::plain("❌ The price can't be negative. Try again:")
}

pub fn price_invalid() -> Text {
    Text::plain("❌ Enter a valid price (a number). Try again:")
}

/// The pre-save summary. Skipped optional fields show an explicit marker.
pub fn confirm_summary(draft: &WishDraft) -> (Text, Keyboard) {
    let description = draft.description.as_deref().unwrap_or("not specified");
    let price = match draft.price {
        Some(price) => format!("{price:.2}"),
        None => "not specified".to_string(),
    };
    let text = Text::plain(format!(
        "📋 Review your wish:\n\n\
         🎁 Wish: {text}\n\
         📝 Description: {description}\n\
         ⭐ Priority: {priority}\n\
         💰 Price: {price}\n\n\
         Everything correct?",
        text = draft.text,
        priority = draft.priority,
    ));
    let keyboard = Keyboard::new().row(vec![
        button("✅ Save", Action::ConfirmSave),
        button("❌ Cancel", Action::CancelWish),
    ]);
    (text, keyboard)
}

pub fn wish_saved(id: WishId) -> (Text, Keyboard) {
    let text = Text::plain(format!(
        "✅ Wish added! (ID: {id})\n\nYou can add another one or return to the main menu."
    ));
    let keyboard = Keyboard::new()
        .row(vec![button("➕ Add another", Action::AddWishStart)])
        .row(vec![button("🏠 Main menu", Action::MainMenu)]);
    (text, keyboard)
}

pub fn wish_save_failed() -> Text {
    Text::plain("❌ Couldn't save the wish. Please try again.")
}

pub fn own_list_empty() -> (Text, Keyboard) {
    (
        Text::plain(
            "📋 You don't have any wishes yet.\n\nCreate your first wish and it will show up here!",
        ),
        empty_list_keyboard(),
    )
}

pub fn own_list_exhausted() -> (Text, Keyboard) {
    (
        Text::plain("📋 You have no more wishes."),
        empty_list_keyboard(),
    )
}

pub fn wish_list_usage() -> Text {
    Text::plain("❌ Usage: /wish_list @username")
}

pub fn user_not_found(display_name: &str) -> Text {
    Text::plain(format!("❌ User {display_name} not found 😔"))
}

pub fn other_list_empty(display_name: &str) -> Text {
    Text::plain(format!("📋 {display_name} has no wishes yet 😔"))
}

pub fn list_sent_to_private(display_name: &str) -> Text {
    Text::plain(format!(
        "✅ {display_name}'s wish list was sent to your private messages 📬"
    ))
}

pub fn delete_confirm(wish_text: &str) -> (Text, Keyboard) {
    let mut text = Text::new();
    text.push_plain("⚠️ ")
        .push_bold("Are you sure you want to delete this wish?")
        .push_plain("\n\n🎁 ")
        .push_bold(wish_text)
        .push_plain("\n\nThis cannot be undone!");
    let keyboard = Keyboard::new().row(vec![
        button("✅ Yes, delete", Action::ConfirmDelete),
        button("❌ Cancel", Action::CancelDelete),
    ]);
    (text, keyboard)
}

pub fn wish_deleted_notice() -> Text {
    Text::plain("✅ Wish deleted!")
}

pub fn wish_not_found_notice() -> Text {
    Text::plain("❌ Wish not found")
}

pub fn delete_failed_notice() -> Text {
    Text::plain("❌ Couldn't delete the wish")
}

pub fn storage_error() -> Text {
    Text::plain("❌ Something went wrong. Please try again later.")
}

/// One page of the viewer's own list, with a delete button per visible wish.
pub fn own_page(page: &Page<'_, WishRow>) -> (Text, Keyboard) {
    let mut text = Text::new();
    text.push_plain("📋 ").push_bold("Your wishes:").push_plain("\n\n");
    push_page_items(&mut text, page);
    push_page_footer(&mut text, page);

    let mut keyboard = Keyboard::new();
    for (idx, row) in page.items.iter().enumerate() {
        let number = page.offset + idx + 1;
        keyboard = keyboard.row(vec![button(
            &format!("🗑️ Delete #{number}"),
            Action::DeleteWish(row.id),
        )]);
    }
    keyboard = push_nav_row(keyboard, page, Action::OwnPage);
    keyboard = keyboard.row(vec![button("🏠 Main menu", Action::MainMenu)]);
    (text, keyboard)
}

/// One page of somebody else's list. Navigation only, no delete buttons.
pub fn other_page(page: &Page<'_, WishRow>, display_name: &str) -> (Text, Keyboard) {
    let mut text = Text::new();
    text.push_plain("📋 ")
        .push_bold(format!("Wishes of {display_name}:"))
        .push_plain("\n\n");
    push_page_items(&mut text, page);
    push_page_footer(&mut text, page);

    let mut keyboard = Keyboard::new();
    keyboard = push_nav_row(keyboard, page, Action::OtherPage);
    keyboard = keyboard.row(vec![button("🏠 Main menu", Action::MainMenu)]);
    (text, keyboard)
}

fn push_page_items(text: &mut Text, page: &Page<'_, WishRow>) {
    for (idx, row) in page.items.iter().enumerate() {
        let number = page.offset + idx + 1;
        let stars = "⭐".repeat(usize::from(row.priority));
        let price = match row.price {
            Some(price) => format!("{price:.2}"),
            None => "—".to_string(),
        };
        text.push_plain(format!("{number}. "))
            .push_bold(row.text.as_str())
            .push_plain(format!("\n   🌟 {stars} | 💰 {price} | 📅 {}\n", row.status));
        if let Some(description) = &row.description {
            text.push_plain(format!("   📝 {}\n", preview(description)));
        }
        text.push_plain("\n");
    }
}

fn push_page_footer(text: &mut Text, page: &Page<'_, WishRow>) {
    if page.total_pages > 1 {
        text.push_plain(format!(
            "\n📄 Page {} of {}",
            page.index + 1,
            page.total_pages
        ));
    }
}

fn push_nav_row<F>(keyboard: Keyboard, page: &Page<'_, WishRow>, to_action: F) -> Keyboard
where
    F: Fn(usize) -> Action,
{
    let mut nav = Vec::new();
    if page.has_prev {
        nav.push(button("⬅️ Back", to_action(page.index - 1)));
    }
    if page.has_next {
        nav.push(button("Next ➡️", to_action(page.index + 1)));
    }
    if nav.is_empty() { keyboard } else { keyboard.row(nav) }
}

/// Long descriptions are cut to a short preview in list lines.
fn preview(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        let cut: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}
