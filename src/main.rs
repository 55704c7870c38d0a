//! Gumroad CLI
//!
//! Calls one API endpoint and prints the response as indented JSON

use clap::Parser;
use gumroad::cli::{Cli, Runner};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let runner = Runner::new(cli);

    if let Err(e) = runner.run(&cancel).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
