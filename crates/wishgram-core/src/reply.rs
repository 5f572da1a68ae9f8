// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport-agnostic outbound message model.
//!
//! The conversation engine produces [`Reply`] values; a transport adapter
//! renders them for its wire format. Styling is limited to bold spans, which
//! is all the bot ever needs, so adapters stay trivial.

use crate::types::ChatId;

/// One styled run of text. Line breaks are plain `\n` characters inside spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

/// Ordered rich text, free of any wire markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub spans: Vec<Span>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// A text consisting of a single plain span.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::Plain(content.into())],
        }
    }

    pub fn push_plain(&mut self, content: impl Into<String>) -> &mut Self {
        self.spans.push(Span::Plain(content.into()));
        self
    }

    pub fn push_bold(&mut self, content: impl Into<String>) -> &mut Self {
        self.spans.push(Span::Bold(content.into()));
        self
    }

    /// The unstyled content, useful for assertions and logging.
    pub fn to_plain_string(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Plain(s) | Span::Bold(s) => s.as_str(),
            })
            .collect()
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Text::plain(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Text::plain(content)
    }
}

/// An inline button. `token` is the opaque action token echoed back by the
/// transport when the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: String,
}

impl Button {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Rows of inline buttons attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        self.rows.push(buttons);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where a reply should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTarget {
    /// Replace the message the triggering button was attached to.
    Edit,
    /// A new message in the chat the event arrived in.
    Respond,
    /// A new message in some other chat (e.g. the requester's private chat).
    Direct(ChatId),
    /// A transient acknowledgement shown only to the acting user. With
    /// `alert` set the transport should demand a dismissal.
    Notice { alert: bool },
}

/// One outbound message produced by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub target: ReplyTarget,
    pub text: Text,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    /// Edit-in-place with a fresh keyboard.
    pub fn edit(text: impl Into<Text>, keyboard: Keyboard) -> Self {
        Self {
            target: ReplyTarget::Edit,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    /// Edit-in-place, dropping any keyboard.
    pub fn edit_plain(text: impl Into<Text>) -> Self {
        Self {
            target: ReplyTarget::Edit,
            text: text.into(),
            keyboard: None,
        }
    }

    /// New message in the originating chat.
    pub fn respond(text: impl Into<Text>) -> Self {
        Self {
            target: ReplyTarget::Respond,
            text: text.into(),
            keyboard: None,
        }
    }

    /// New message in the originating chat, with a keyboard.
    pub fn respond_with(text: impl Into<Text>, keyboard: Keyboard) -> Self {
        Self {
            target: ReplyTarget::Respond,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    /// New message delivered to another chat.
    pub fn direct(chat: ChatId, text: impl Into<Text>, keyboard: Option<Keyboard>) -> Self {
        Self {
            target: ReplyTarget::Direct(chat),
            text: text.into(),
            keyboard,
        }
    }

    /// Transient acknowledgement toast.
    pub fn notice(text: impl Into<Text>) -> Self {
        Self {
            target: ReplyTarget::Notice { alert: false },
            text: text.into(),
            keyboard: None,
        }
    }

    /// Transient acknowledgement the user must dismiss.
    pub fn alert(text: impl Into<Text>) -> Self {
        Self {
            target: ReplyTarget::Notice { alert: true },
            text: text.into(),
            keyboard: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_collects_spans_in_order() {
        let mut text = Text::new();
        text.push_bold("Title").push_plain("\nbody");
        assert_eq!(
            text.spans,
            vec![Span::Bold("Title".into()), Span::Plain("\nbody".into())]
        );
        assert_eq!(text.to_plain_string(), "Title\nbody");
    }

    #[test]
    fn keyboard_builder_keeps_row_order() {
        let kb = Keyboard::new()
            .row(vec![Button::new("a", "t_a")])
            .row(vec![Button::new("b", "t_b"), Button::new("c", "t_c")]);
        assert_eq!(kb.rows.len(), 2);
        assert_eq!(kb.rows[1][1].token, "t_c");
    }

    #[test]
    fn notice_constructors_set_alert_flag() {
        assert_eq!(
            Reply::notice("ok").target,
            ReplyTarget::Notice { alert: false }
        );
        assert_eq!(
            Reply::alert("no").target,
            ReplyTarget::Notice { alert: true }
        );
    }
}
