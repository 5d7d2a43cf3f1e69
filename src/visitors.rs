//! Visitor log command-line tool.
//!
//! Prints every visitor recorded by the TileDeck GUI, oldest first.

use anyhow::Result;
use tiledeck::VisitorLog;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let log = VisitorLog::default_location()?;
    let records = log.records()?;

    if records.is_empty() {
        println!("No visitors recorded.");
        return Ok(());
    }

    println!("{} visitor(s):", records.len());
    for record in records {
        println!("  {}  {}", record.timestamp, record.name);
    }

    Ok(())
}
