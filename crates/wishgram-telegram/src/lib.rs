// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram transport for the Wishgram bot.
//!
//! Connects the conversation engine to the Bot API via teloxide long
//! polling: inbound updates are mapped to engine events, and the resulting
//! replies are delivered as HTML messages, in-place edits, and callback
//! answers.

pub mod handler;
pub mod html;

mod deliver;

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::{BotCommands, ParseError};
use tracing::{info, warn};

use wishgram_config::model::TelegramConfig;
use wishgram_core::{Command, Event, WishgramError};
use wishgram_flow::Engine;

/// Commands published in the Telegram command menu.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case")]
pub enum BotCommand {
    #[command(description = "register and open the main menu")]
    Start,
    #[command(description = "view another user's wish list", parse_with = rest_of_line)]
    WishList(String),
}

/// Keeps the whole argument tail in one piece, so `/wish_list` with no
/// argument still parses and reaches the usage hint instead of falling
/// through to the free-text handler.
fn rest_of_line(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

/// The Telegram-facing half of the bot: one `Bot` handle plus the shared
/// conversation engine, dispatched over long polling.
pub struct WishgramBot {
    bot: Bot,
    engine: Arc<Engine>,
}

impl WishgramBot {
    /// Creates the bot from configuration.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig, engine: Arc<Engine>) -> Result<Self, WishgramError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            WishgramError::Config("telegram.bot_token is required to run the bot".into())
        })?;

        if token.is_empty() {
            return Err(WishgramError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        Ok(Self {
            bot: Bot::new(token),
            engine,
        })
    }

    /// Returns a reference to the underlying teloxide Bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Publishes the command menu and runs long polling until interrupted.
    pub async fn run(self) {
        if let Err(error) = self.bot.set_my_commands(BotCommand::bot_commands()).await {
            warn!(%error, "failed to publish the command menu");
        }

        info!("starting Telegram long polling");

        let routes = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<BotCommand>()
                    .endpoint(on_command),
            )
            .branch(Update::filter_message().endpoint(on_message))
            .branch(Update::filter_callback_query().endpoint(on_callback));

        Dispatcher::builder(self.bot, routes)
            .dependencies(dptree::deps![self.engine])
            .default_handler(|_| async {}) // Silently ignore other update kinds
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

async fn on_command(
    bot: Bot,
    msg: Message,
    command: BotCommand,
    engine: Arc<Engine>,
) -> ResponseResult<()> {
    let Some(context) = handler::message_context(&msg) else {
        return Ok(());
    };
    let event = match command {
        BotCommand::Start => Event::Command(Command::Start),
        BotCommand::WishList(query) => Event::Command(Command::WishList { query }),
    };
    let replies = engine.handle(&context, event).await;
    deliver::message_replies(&bot, &msg, replies).await
}

async fn on_message(bot: Bot, msg: Message, engine: Arc<Engine>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(context) = handler::message_context(&msg) else {
        return Ok(());
    };
    let replies = engine.handle(&context, Event::Text(text.to_owned())).await;
    deliver::message_replies(&bot, &msg, replies).await
}

async fn on_callback(bot: Bot, query: CallbackQuery, engine: Arc<Engine>) -> ResponseResult<()> {
    let Some((context, event)) = handler::callback_parts(&query) else {
        // Nothing to act on, but the press still needs an ack.
        bot.answer_callback_query(query.id).await?;
        return Ok(());
    };
    let replies = engine.handle(&context, event).await;
    deliver::callback_replies(&bot, &query, replies).await
}
