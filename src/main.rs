use dotenv::dotenv;
use std::io;
use std::process::ExitCode;
use tasker::commands::Cli;
use tasker::libs::messages::macros::is_debug_mode;
use tasker::libs::view::View;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasker=debug")))
            .with_writer(io::stderr)
            .init();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Always reaches stderr, whatever the log filter lets through.
            tracing::error!("{:#}", e);
            let _ = View::error(&mut io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}
