//! services/desk/src/bin/desk.rs

use desk_lib::{
    adapters::{HttpMaterialsGateway, TerminalConsole, TerminalView},
    config::Config,
    error::DeskError,
    page::{dispatch, AppState, Command, PageController, HELP_TEXT},
};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), DeskError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Backend at {}", config.api_base_url);

    // --- 2. Initialize Adapters ---
    let gateway = Arc::new(HttpMaterialsGateway::new(config.api_base_url.clone())?);
    let console = Arc::new(TerminalConsole::new());
    let view = Arc::new(TerminalView::new());

    // --- 3. Build the Page ---
    let app_state = Arc::new(AppState {
        gateway,
        dialogs: console.clone(),
        view,
        config: config.clone(),
    });
    let controller = PageController::new(app_state);
    controller.start().await;
    println!("{}", HELP_TEXT);

    // --- 4. Command Loop ---
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = console.read_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                let outcome = dispatch(&controller, command).await;
                debug!("Command finished: {:?}", outcome);
            }
            Err(e) => println!("{}", e),
        }
    }

    info!("Input closed. Shutting down.");
    Ok(())
}
