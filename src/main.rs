use sesl::commands::Cli;
use sesl::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // In debug mode the msg_* macros emit through tracing instead of the
    // console, so a subscriber has to be installed first.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
