//! Quote ingestion CLI
//!
//! Run with: cargo run --bin quotes -- path/to/quotes.txt

use std::path::PathBuf;

use clap::Parser;
use quote_engine::Ingestor;
use rand::seq::SliceRandom;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "quotes", about = "Ingest quote files and print the normalized records")]
struct Args {
    /// Quote source files (txt, csv, docx or pdf)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print one randomly chosen quote instead of all of them
    #[arg(long)]
    random: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quote_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let ingestor = Ingestor::new();
    let quotes = ingestor.parse_all(&args.files)?;

    if quotes.is_empty() {
        tracing::warn!("no quotes found in {} file(s)", args.files.len());
        return Ok(());
    }

    if args.random {
        let mut rng = rand::thread_rng();
        if let Some(quote) = quotes.choose(&mut rng) {
            println!("{quote}");
        }
    } else {
        for quote in &quotes {
            println!("{quote}");
        }
    }

    Ok(())
}
