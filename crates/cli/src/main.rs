//! Comandera CLI - Menu management tools.
//!
//! # Usage
//!
//! ```bash
//! # Validate a menu file before deploying it
//! comandera-cli menu check -p crates/waiter/menu/menu.json
//!
//! # Write a starter menu file to edit from
//! comandera-cli menu seed -p menu.json
//! ```
//!
//! # Commands
//!
//! - `menu check` - Parse and validate a menu file
//! - `menu seed` - Write a starter menu file

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "comandera-cli")]
#[command(author, version, about = "Comandera CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage menu files
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Parse and validate a menu file
    Check {
        /// Path to the menu file
        #[arg(short, long)]
        path: PathBuf,
    },
    /// Write a starter menu file
    Seed {
        /// Path to write the menu file to
        #[arg(short, long)]
        path: PathBuf,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Menu { action } => match action {
            MenuAction::Check { path } => commands::menu::check(&path).await?,
            MenuAction::Seed { path, force } => commands::menu::seed(&path, force).await?,
        },
    }
    Ok(())
}
