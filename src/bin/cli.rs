//! Course Planner - interactive CLI

use anyhow::Context;
use courseplan::shell::Shell;
use std::io;
use tracing_subscriber::EnvFilter;

/// Initialize tracing: compact format on stderr so log lines never
/// interleave with menu output, filter overridable via RUST_LOG
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("courseplan=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    Shell::new(stdin, stdout)
        .run()
        .context("interactive session failed")?;
    Ok(())
}
