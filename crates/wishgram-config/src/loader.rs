// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./wishgram.toml` > `~/.config/wishgram/wishgram.toml` > `/etc/wishgram/wishgram.toml`
//! with environment variable overrides via `WISHGRAM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::WishgramConfig;

/// Config sections recognized when mapping environment variable names.
const SECTIONS: &[&str] = &["bot", "telegram", "storage", "paging"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wishgram/wishgram.toml` (system-wide)
/// 3. `~/.config/wishgram/wishgram.toml` (user XDG config)
/// 4. `./wishgram.toml` (local directory)
/// 5. `WISHGRAM_*` environment variables
pub fn load_config() -> Result<WishgramConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WishgramConfig::default()))
        .merge(Toml::file("/etc/wishgram/wishgram.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("wishgram/wishgram.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("wishgram.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<WishgramConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WishgramConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WishgramConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WishgramConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using an explicit `map()` for
/// section-to-dot mapping.
///
/// CRITICAL: uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. `WISHGRAM_TELEGRAM_BOT_TOKEN` must map to
/// `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("WISHGRAM_").map(|key| map_env_key(key.as_str()).into())
}

/// Rewrite a prefix-stripped, lowercased env var name into a dotted config
/// key. Only the leading section name is rewritten; the rest of the key is
/// left intact. Example: `telegram_bot_token` -> `telegram.bot_token`.
fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section)
            && let Some(rest) = rest.strip_prefix('_')
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
