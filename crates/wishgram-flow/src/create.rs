// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The wish-creation flow: text, optional description, priority, optional
//! price, then an explicit confirmation before anything is persisted.

use tracing::{debug, warn};

use wishgram_core::{EventContext, Reply};

use crate::render;
use crate::states::{AddWishState, Conversation, WishDraft};
use crate::{Action, Engine};

const MIN_WISH_TEXT_CHARS: usize = 3;

enum PriceError {
    Invalid,
    Negative,
}

/// Prices come in as free text. Anything that is not a finite, non-negative
/// number is rejected with a reason the prompt can explain.
fn parse_price(input: &str) -> Result<f64, PriceError> {
    let price: f64 = input.trim().parse().map_err(|_| PriceError::Invalid)?;
    if !price.is_finite() {
        return Err(PriceError::Invalid);
    }
    if price < 0.0 {
        return Err(PriceError::Negative);
    }
    Ok(price)
}

impl Engine {
    /// Entry point of the flow. Valid from any state; whatever was in
    /// progress is replaced.
    pub(crate) fn begin_creation(&self, conversation: &mut Conversation) -> Vec<Reply> {
        *conversation = Conversation::AddWish(AddWishState::AwaitingText);
        vec![Reply::edit_plain(render::wish_text_prompt())]
    }

    /// Aborts the flow from any step, including the confirmation screen.
    pub(crate) fn cancel_creation(&self, conversation: &mut Conversation) -> Vec<Reply> {
        *conversation = Conversation::Idle;
        let (text, keyboard) = render::creation_cancelled();
        vec![Reply::edit(text, keyboard)]
    }

    /// Routes a free-text message into whichever step is waiting for text.
    pub(crate) fn creation_text(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
        message: String,
    ) -> Vec<Reply> {
        match std::mem::take(conversation) {
            Conversation::AddWish(AddWishState::AwaitingText) => {
                if message.chars().count() < MIN_WISH_TEXT_CHARS {
                    *conversation = Conversation::AddWish(AddWishState::AwaitingText);
                    return vec![Reply::respond(render::wish_text_too_short())];
                }
                let (text, keyboard) = render::description_prompt(&message);
                *conversation =
                    Conversation::AddWish(AddWishState::AwaitingDescription { text: message });
                vec![Reply::respond_with(text, keyboard)]
            }
            Conversation::AddWish(AddWishState::AwaitingDescription { text }) => {
                *conversation = Conversation::AddWish(AddWishState::AwaitingPriority {
                    text,
                    description: Some(message),
                });
                let (prompt, keyboard) = render::priority_prompt();
                vec![Reply::respond_with(prompt, keyboard)]
            }
            Conversation::AddWish(AddWishState::AwaitingPrice {
                text,
                description,
                priority,
            }) => match parse_price(&message) {
                Ok(price) => {
                    let draft = WishDraft {
                        text,
                        description,
                        priority,
                        price: Some(price),
                    };
                    let (summary, keyboard) = render::confirm_summary(&draft);
                    *conversation = Conversation::AddWish(AddWishState::Confirming(draft));
                    vec![Reply::respond_with(summary, keyboard)]
                }
                Err(reason) => {
                    *conversation = Conversation::AddWish(AddWishState::AwaitingPrice {
                        text,
                        description,
                        priority,
                    });
                    let prompt = match reason {
                        PriceError::Negative => render::price_negative(),
                        PriceError::Invalid => render::price_invalid(),
                    };
                    vec![Reply::respond(prompt)]
                }
            },
            other => {
                *conversation = other;
                debug!(scope = %ctx.scope, state = %conversation, "ignoring text in this state");
                Vec::new()
            }
        }
    }

    /// Handles the in-flow button presses: skipping the description, picking
    /// a priority and skipping the price. Each is only meaningful in its own
    /// step; anywhere else it is dropped.
    pub(crate) fn advance_creation(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
        action: Action,
    ) -> Vec<Reply> {
        match (std::mem::take(conversation), action) {
            (
                Conversation::AddWish(AddWishState::AwaitingDescription { text }),
                Action::SkipDescription,
            ) => {
                *conversation = Conversation::AddWish(AddWishState::AwaitingPriority {
                    text,
                    description: None,
                });
                let (prompt, keyboard) = render::priority_prompt();
                vec![Reply::edit(prompt, keyboard)]
            }
            (
                Conversation::AddWish(AddWishState::AwaitingPriority { text, description }),
                Action::Priority(level),
            ) => {
                *conversation = Conversation::AddWish(AddWishState::AwaitingPrice {
                    text,
                    description,
                    priority: level,
                });
                let (prompt, keyboard) = render::price_prompt(level);
                vec![Reply::edit(prompt, keyboard)]
            }
            (
                Conversation::AddWish(AddWishState::AwaitingPrice {
                    text,
                    description,
                    priority,
                }),
                Action::SkipPrice,
            ) => {
                let draft = WishDraft {
                    text,
                    description,
                    priority,
                    price: None,
                };
                let (summary, keyboard) = render::confirm_summary(&draft);
                *conversation = Conversation::AddWish(AddWishState::Confirming(draft));
                vec![Reply::edit(summary, keyboard)]
            }
            (other, action) => {
                *conversation = other;
                debug!(
                    scope = %ctx.scope,
                    state = %conversation,
                    ?action,
                    "ignoring action in this state"
                );
                Vec::new()
            }
        }
    }

    /// Persists a confirmed draft. The flow ends here either way: on failure
    /// the draft is discarded and the user starts over.
    pub(crate) async fn save_draft(
        &self,
        ctx: &EventContext,
        conversation: &mut Conversation,
    ) -> Vec<Reply> {
        let draft = match std::mem::take(conversation) {
            Conversation::AddWish(AddWishState::Confirming(draft)) => draft,
            other => {
                *conversation = other;
                debug!(scope = %ctx.scope, state = %conversation, "ignoring save in this state");
                return Vec::new();
            }
        };

        let new_wish = draft.into_new_wish(ctx.actor.id, ctx.scope);
        match self.store.create_wish(&new_wish).await {
            Ok(id) => {
                debug!(scope = %ctx.scope, user = %ctx.actor.id, wish = %id, "wish saved");
                let (text, keyboard) = render::wish_saved(id);
                vec![Reply::edit(text, keyboard)]
            }
            Err(error) => {
                warn!(scope = %ctx.scope, user = %ctx.actor.id, %error, "failed to save wish");
                vec![Reply::edit_plain(render::wish_save_failed())]
            }
        }
    }
}
