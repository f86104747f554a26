//! CLI entry and dispatch.

use anyhow::{Context, Result};
use blot_core::articles::Topic;
use blot_core::config::Config;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "blot")]
#[command(version)]
#[command(about = "Terminal client for the articles service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Log out (clear the persisted session token)
    Logout,

    /// Work with articles non-interactively
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ArticleCommands {
    /// List all articles
    List,
    /// Create an article
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// One of: JavaScript, React, Node
        #[arg(long)]
        topic: Topic,
    },
    /// Update an existing article
    Update {
        /// The id of the article to update
        #[arg(value_name = "ARTICLE_ID")]
        id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// One of: JavaScript, React, Node
        #[arg(long)]
        topic: Topic,
    },
    /// Delete an article
    Delete {
        /// The id of the article to delete
        #[arg(value_name = "ARTICLE_ID")]
        id: u64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the articles service base URL in the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = blot_core::logging::init().context("initialize logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the interactive TUI
    let Some(command) = cli.command else {
        return blot_tui::run_interactive(&config).await;
    };

    match command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(),

        Commands::Articles { command } => match command {
            ArticleCommands::List => commands::articles::list(&config).await,
            ArticleCommands::Create { title, text, topic } => {
                commands::articles::create(&config, &title, &text, topic).await
            }
            ArticleCommands::Update {
                id,
                title,
                text,
                topic,
            } => commands::articles::update(&config, id, &title, &text, topic).await,
            ArticleCommands::Delete { id } => commands::articles::delete(&config, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
