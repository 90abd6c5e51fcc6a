use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordbank_config::Config;
use wordbank_core::state::AppState;
use wordbank_lookup::{Lookup, LookupClient};
use wordbank_store::{FileStorage, KeyValueStorage, PersonalDictionary};

pub mod cli;
pub mod console;
pub mod context;
pub mod controller;
pub mod events;
pub mod oneshot;
pub mod render;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::context::Store;
use self::controller::AppController;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let result = runtime.block_on(run(cli));

    // Blocking stdin reads would otherwise keep the runtime alive
    runtime.shutdown_background();
    result
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    cli.apply(&mut config);
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    let storage_path = config.store.storage_path();
    tracing::info!("Personal dictionary stored in {}", storage_path.display());
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(storage_path));
    let store: Arc<Store> = Arc::new(PersonalDictionary::new(storage, config.store.key.clone()));
    let lookup: Arc<dyn Lookup> = Arc::new(LookupClient::from_config(&config.lookup));

    match cli.command {
        Some(Command::Lookup { word, save }) => {
            let mut stdout = std::io::stdout();
            oneshot::run_lookup(lookup.as_ref(), &store, &word, save, &mut stdout).await
        }
        Some(Command::List) => oneshot::run_list(&store, &mut std::io::stdout()),
        None => run_interactive(config, lookup, store).await,
    }
}

async fn run_interactive(
    config: Config,
    lookup: Arc<dyn Lookup>,
    store: Arc<Store>,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(lookup, store);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}
