//! # Tetrad
//!
//! Demo command for the Tetrad pipeline.
//!
//! ```text
//! tetrad                       # run the demo request
//! tetrad step "hello"          # run any input
//! tetrad --json step "hello"   # full output as JSON
//! tetrad --plugin ./scanner    # use an external scanner/refusal plugin
//! ```

use clap::Parser;
use tetrad::cli::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&cli, &mut out) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
