use anyhow::Result;
use clap::Parser;
use search_cli::{execute, Cli};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Results go to stdout, logs to stderr.
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    execute(&cli)
}
