//! Wikifacts command-line client
//!
//! Interactive encyclopedia reader with key-fact extraction.

use clap::Parser;
use wikifacts::session::{Session, SessionConfig};

/// Wikifacts interactive client
#[derive(Parser, Debug)]
#[command(name = "wikifacts")]
#[command(version)]
#[command(about = "Search an online encyclopedia and surface key facts from articles")]
struct Args {
    /// Base URL of the wiki instance to query
    #[arg(long, default_value = wikifacts::fetch::DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of options shown per page of results
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Column width used when wrapping article text
    #[arg(long, default_value_t = 100)]
    wrap_width: usize,

    /// Maximum facts displayed per category
    #[arg(long, default_value_t = 4)]
    fact_limit: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the interactive UI.
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(SessionConfig {
        base_url: args.base_url,
        page_size: args.page_size,
        wrap_width: args.wrap_width,
        fact_limit: args.fact_limit,
    })?;
    session.run().await?;
    Ok(())
}
