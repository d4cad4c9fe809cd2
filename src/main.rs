//! Scout - A Matrix bot for managing a personal football player watchlist.
//!
//! This is the main entry point for the scout bot, which lets Matrix users
//! keep a private list of players they are tracking, directly from chat.
//!
//! # Overview
//!
//! Each user owns an independent watchlist. An entry records a player's
//! position, team, and name as one formatted line, e.g.
//! `QB | Cowboys | Dak Prescott`. The list lives in memory for the process
//! lifetime; restarting the bot starts everyone from an empty list.
//!
//! # Features
//!
//! - **Per-User Watchlists**: every user manages their own list
//! - **Formatted Entries**: position uppercased, team and name title-cased
//! - **Substring Removal**: remove a player by any fragment of the entry text
//! - **Liveness Endpoint**: `GET /` answers `Bot is alive` for uptime monitors
//! - **Session Persistence**: maintains the Matrix login session across restarts
//! - **YAML Configuration**: simple configuration file with environment variable support
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! matrix:
//!   user_id: "@scout:matrix.org"
//!   password: "your-password"
//!
//! liveness:
//!   host: "0.0.0.0"
//!   port: 8080
//! ```
//!
//! Override any value using environment variables with the `SCOUT_` prefix;
//! the account password in particular can stay out of the file:
//!
//! ```bash
//! export SCOUT_MATRIX__USER_ID="@scout:matrix.org"
//! export SCOUT_MATRIX__PASSWORD="your-password"
//! ```
//!
//! # Usage
//!
//! ```bash
//! scout --config config.yaml --data ./scout-data
//! ```
//!
//! # Bot Commands
//!
//! Once running, users can interact with the bot in any room it has joined:
//!
//! - `!scout add <position> <team> <name>` - Add a player to the watchlist
//! - `!scout remove <name>` - Remove the first player matching the name
//! - `!scout view` - List the watchlist entries
//! - `!scout help` - Display help information
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`bot`] - Main bot logic wiring the transport, the store, and the liveness task
//! - [`commands`] - Command parsing and execution with validation
//! - [`config`] - YAML configuration structures and loading with environment overrides
//! - [`liveness`] - Single-route HTTP responder for uptime monitors
//! - [`matrix`] - Matrix client integration and session management
//! - [`watchlist`] - Entry formatting and the per-user store
//!
//! # Runtime Behavior
//!
//! Once started, the bot runs two concurrent contexts:
//!
//! 1. **Matrix Sync Loop**: listens for Matrix messages and processes bot
//!    commands, one invocation at a time
//! 2. **Liveness Task**: serves the uptime probe, independent of the sync loop
//!
//! Both run indefinitely until the process is terminated.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod liveness;
mod matrix;
mod watchlist;

/// Command-line arguments for the scout bot.
///
/// The bot requires two command-line arguments: the path to the YAML
/// configuration file, and the path to the directory for persistent data
/// (the Matrix session). Most configuration is done through the YAML file
/// (see [`config::Config`]).
///
/// # Examples
///
/// ```bash
/// scout --config config.yaml --data ./scout-data
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file.
    ///
    /// The configuration file should contain the Matrix account credentials
    /// and, optionally, the liveness bind settings. See the [`config`] module
    /// for the expected format and the `SCOUT_` environment overrides.
    #[arg(short, long)]
    pub config: String,

    /// Path to the directory for storing persistent data.
    ///
    /// This directory will contain `session/` with the Matrix session data
    /// (authentication tokens and the SDK state database). It holds the
    /// token that allows impersonation of the bot account, so keep its
    /// permissions restricted.
    #[arg(short, long)]
    pub data: String,
}

/// Main entry point for the scout bot.
///
/// Initializes the bot with the following steps:
///
/// 1. **Logging Setup**: configures the logger with `info` level by default
///    (can be overridden with the `RUST_LOG` environment variable)
/// 2. **Argument Parsing**: parses command-line arguments using `clap`
/// 3. **Configuration Loading**: reads the YAML configuration with
///    environment variable overrides
/// 4. **Bot Initialization**: creates the bot instance, connecting to Matrix
/// 5. **Bot Execution**: binds the liveness responder and starts the sync loop
///
/// Configuration and startup errors are logged and terminate the process;
/// there is nothing to recover at that point.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting scout {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable overrides
    let config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Launch bot
    let bot = match Bot::new(config, args).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };

    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
    }
}
