// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of transport-agnostic replies into Telegram HTML and inline
//! keyboards. All messages are sent with HTML parse mode, so user-supplied
//! text must be escaped before styling is applied.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html;

use wishgram_core::{Keyboard, Span, Text};

/// Renders styled text as Telegram HTML, escaping every user-visible span.
pub fn render_text(text: &Text) -> String {
    let mut out = String::new();
    for span in &text.spans {
        match span {
            Span::Plain(content) => out.push_str(&html::escape(content)),
            Span::Bold(content) => out.push_str(&html::bold(&html::escape(content))),
        }
    }
    out
}

/// Maps a reply keyboard onto Telegram inline buttons. Button tokens become
/// callback data verbatim.
pub fn render_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.token.clone()))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wishgram_core::Button;

    #[test]
    fn plain_spans_are_escaped() {
        let text = Text::plain("wish <1> & more");
        assert_eq!(render_text(&text), "wish &lt;1&gt; &amp; more");
    }

    #[test]
    fn bold_spans_are_wrapped_and_escaped() {
        let mut text = Text::new();
        text.push_plain("📋 ").push_bold("a <b>old</b> wish");
        assert_eq!(
            render_text(&text),
            "📋 <b>a &lt;b&gt;old&lt;/b&gt; wish</b>"
        );
    }

    #[test]
    fn keyboard_rows_map_one_to_one() {
        let keyboard = Keyboard::new()
            .row(vec![Button::new("✅ Save", "confirm_save_wish")])
            .row(vec![
                Button::new("⬅️ Back", "page_wishes_0"),
                Button::new("Next ➡️", "page_wishes_2"),
            ]);
        let markup = render_keyboard(&keyboard);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "✅ Save");
    }
}
