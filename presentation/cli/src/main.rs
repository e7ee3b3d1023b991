use dotenvy::dotenv;

mod config;
mod setup;

use config::app_config::AppConfig;
use setup::runner::Runner;

/// Translator CLI Entry Point
///
/// Loads the OpenAI credential, asks the chat model for a single translation
/// and prints the reply object to stdout.
///
/// - config/: Typed configuration loaded from the environment
/// - setup/: Dependency wiring and the run sequence
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from `.env` too
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, on stderr so stdout only carries the reply
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration, wire dependencies and translate
    Runner::bootstrap(AppConfig::from_env, &mut std::io::stdout()).await
}
