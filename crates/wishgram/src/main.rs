// SPDX-FileCopyrightText: 2026 Wishgram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wishgram - a Telegram wishlist bot.
//!
//! This is the binary entry point: it parses the CLI, loads and validates
//! configuration, and dispatches to the `serve` and `doctor` commands.

mod doctor;
mod serve;

use clap::{Parser, Subcommand};

/// Wishgram - a Telegram wishlist bot.
#[derive(Parser, Debug)]
#[command(name = "wishgram", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the bot and serve Telegram updates until interrupted.
    Serve,
    /// Run environment diagnostics.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match wishgram_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            wishgram_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(error) = serve::run_serve(config).await {
                eprintln!("error: {error}");
                std::process::exit(1);
            }
        }
        Some(Commands::Doctor { plain }) => {
            if !doctor::run_doctor(&config, plain).await {
                std::process::exit(1);
            }
        }
        None => {
            println!("wishgram: use --help for available commands");
        }
    }
}
