// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delivery of engine replies back through the Bot API.
//!
//! Callback presses are always answered exactly once, whether or not the
//! engine produced a notice, so clients never hang on a spinner.

use teloxide::prelude::*;
use teloxide::types::{ChatId, Message, ParseMode};
use teloxide::{ApiError, RequestError};
use tracing::{debug, warn};

use wishgram_core::{Reply, ReplyTarget};

use crate::html;

const DIRECT_DELIVERY_FAILED: &str =
    "❌ Couldn't deliver the list to your private messages. Open a private chat with the bot and press Start first.";

/// Delivers replies produced for a plain or command message.
pub(crate) async fn message_replies(
    bot: &Bot,
    origin: &Message,
    replies: Vec<Reply>,
) -> ResponseResult<()> {
    for reply in replies {
        match reply.target {
            // There is no message of ours to edit in a message flow; a
            // fresh message carries the same content.
            ReplyTarget::Respond | ReplyTarget::Edit => {
                send_to(bot, origin.chat.id, &reply).await?;
            }
            ReplyTarget::Direct(chat) => {
                if let Err(error) = send_to(bot, ChatId(chat.0), &reply).await {
                    warn!(chat = chat.0, %error, "failed to deliver direct message");
                    bot.send_message(origin.chat.id, DIRECT_DELIVERY_FAILED)
                        .await?;
                    return Ok(());
                }
            }
            ReplyTarget::Notice { .. } => {
                debug!("dropping notice outside a button press");
            }
        }
    }
    Ok(())
}

/// Delivers replies produced for a button press and answers the query.
pub(crate) async fn callback_replies(
    bot: &Bot,
    query: &CallbackQuery,
    replies: Vec<Reply>,
) -> ResponseResult<()> {
    let mut answered = false;
    for reply in replies {
        match reply.target {
            ReplyTarget::Notice { alert } => {
                bot.answer_callback_query(query.id.clone())
                    .text(reply.text.to_plain_string())
                    .show_alert(alert)
                    .await?;
                answered = true;
            }
            ReplyTarget::Edit => {
                if let Some(message) = query.regular_message() {
                    edit_in_place(bot, message, &reply).await?;
                } else {
                    debug!("dropping edit for an inaccessible message");
                }
            }
            ReplyTarget::Respond => {
                if let Some(message) = query.regular_message() {
                    send_to(bot, message.chat.id, &reply).await?;
                }
            }
            ReplyTarget::Direct(chat) => {
                if let Err(error) = send_to(bot, ChatId(chat.0), &reply).await {
                    warn!(chat = chat.0, %error, "failed to deliver direct message");
                }
            }
        }
    }
    if !answered {
        bot.answer_callback_query(query.id.clone()).await?;
    }
    Ok(())
}

async fn send_to(bot: &Bot, chat: ChatId, reply: &Reply) -> Result<(), RequestError> {
    let text = html::render_text(&reply.text);
    let request = bot.send_message(chat, text).parse_mode(ParseMode::Html);
    match &reply.keyboard {
        Some(keyboard) => request.reply_markup(html::render_keyboard(keyboard)).await?,
        None => request.await?,
    };
    Ok(())
}

async fn edit_in_place(bot: &Bot, message: &Message, reply: &Reply) -> Result<(), RequestError> {
    let text = html::render_text(&reply.text);
    let request = bot
        .edit_message_text(message.chat.id, message.id, text)
        .parse_mode(ParseMode::Html);
    let result = match &reply.keyboard {
        Some(keyboard) => request.reply_markup(html::render_keyboard(keyboard)).await,
        None => request.await,
    };
    match result {
        Ok(_) => Ok(()),
        // A clamped page turn can land on the page already shown; Telegram
        // rejects the identical edit and nothing needs doing.
        Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(error) => Err(error),
    }
}
