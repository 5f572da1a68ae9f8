// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wishgram serve` command implementation.
//!
//! Opens the SQLite store, builds the conversation engine, and runs the
//! Telegram transport over long polling until the process is interrupted.

use std::sync::Arc;

use tracing::info;

use wishgram_config::model::WishgramConfig;
use wishgram_core::WishgramError;
use wishgram_flow::Engine;
use wishgram_storage::SqliteWishStore;
use wishgram_telegram::WishgramBot;

/// Runs the `wishgram serve` command.
///
/// Requires `telegram.bot_token` to be configured. Long polling blocks
/// until Ctrl-C; the store is checkpointed and closed on the way out.
pub async fn run_serve(config: WishgramConfig) -> Result<(), WishgramError> {
    init_tracing(&config.bot.log_level);

    info!(name = config.bot.name.as_str(), "starting wishgram serve");

    let store = Arc::new(SqliteWishStore::open(&config.storage).await?);
    info!(
        path = config.storage.database_path.as_str(),
        "storage ready"
    );

    let engine = Arc::new(Engine::new(store.clone(), config.paging.page_size));
    let bot = WishgramBot::new(&config.telegram, engine)?;

    bot.run().await;

    store.close().await?;
    info!("wishgram stopped");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set; otherwise every
/// workspace crate logs at `log_level` and dependencies at `warn`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,wishgram={log_level},wishgram_storage={log_level},\
             wishgram_flow={log_level},wishgram_telegram={log_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
