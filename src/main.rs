use clap::Parser;
use tracing_subscriber::EnvFilter;

use runcell::cli::{run_command, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runcell=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run_command(cli).await
}
