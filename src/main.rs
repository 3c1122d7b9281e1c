//! # Profile Manager CLI
//!
//! Loads the user list, prints one page of the table and, optionally, the
//! detail card of one user.

use clap::Parser;
use profile_manager::config::Config;
use profile_manager::lifecycle::{setup_tracing, ProfileManager};
use profile_manager::model::UserId;
use profile_manager::view::{DetailView, ListView};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "profile-manager", about = "Browse the user list")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Table page to print (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Order the table by name
    #[arg(long)]
    sort_by_name: bool,

    /// Also print the details of this user
    #[arg(long)]
    show: Option<UserId>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).map_err(|e| e.to_string())?;
    let mut manager = ProfileManager::from_config(&config).map_err(|e| e.to_string())?;

    let outcome = manager.wait_loaded().await;
    info!(?outcome, "Initial load finished");

    let state = manager
        .user_client
        .state()
        .await
        .map_err(|e| e.to_string())?;
    let view = ListView::new(config.view.page_size).sort_by_name(args.sort_by_name);
    print!("{}", view.render(&state, args.page));

    if let Some(id) = args.show {
        match state.find(id) {
            Some(user) => print!("\n{}", DetailView::new(user)),
            None => warn!(id, "No such user"),
        }
    }

    manager.shutdown().await?;
    Ok(())
}
