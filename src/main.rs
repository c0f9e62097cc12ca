//! RAX Forms - Entry Point
//!
//! Interactive registration and login forms backed by a local user store.

use log::{error, info};
use std::process::ExitCode;
use tokio::io::BufReader;

use rax_forms::Console;
use rax_forms::config::AppConfig;
use rax_forms::error::handlers::handle_error;
use rax_forms::presentation::TerminalPresenter;
use rax_forms::storage::{FileStorage, UserStore};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Launching RAX Forms (storage: {}, slot: {})",
        config.storage_dir, config.slot_name
    );

    let store = UserStore::with_slot(FileStorage::new(config.storage_path()), &config.slot_name);
    let presenter =
        TerminalPresenter::with_dismiss_after(std::io::stdout(), config.success_dismiss_after());
    let mut console = Console::new(store, presenter);

    let mut stdin = BufReader::new(tokio::io::stdin());
    match console.run(&mut stdin).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
