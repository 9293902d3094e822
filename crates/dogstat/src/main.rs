//! dogstat - prints sub-breed counts through a cached breed lookup

mod count;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dogapi::{BreedFetcher, DogApiConfig, DogApiFetcher, LocalFetcher, DEFAULT_BASE_URL};
use dogcache::CachingBreedFetcher;
use tracing::info;

use crate::count::sub_breed_count;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Built-in fixture
    Local,
    /// dog.ceo HTTP API
    Remote,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Breeds to look up
    #[arg(default_values_t = ["hound".to_string(), "cat".to_string()])]
    breeds: Vec<String>,

    /// Lookup source
    #[arg(short, long, value_enum, default_value_t = Source::Local)]
    source: Source,

    /// API root for the remote source
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout for the remote source, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Number of passes over the breed list
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn fetcher(&self) -> Result<Box<dyn BreedFetcher>> {
        Ok(match self.source {
            Source::Local => Box::new(LocalFetcher::default()),
            Source::Remote => Box::new(DogApiFetcher::new(DogApiConfig {
                base_url: self.base_url.clone(),
                timeout: Duration::from_secs(self.timeout_secs),
            })?),
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting dogstat v{}", env!("CARGO_PKG_VERSION"));
    info!("Source: {:?}", args.source);

    let fetcher = CachingBreedFetcher::new(args.fetcher()?);

    for _ in 0..args.repeat {
        for breed in &args.breeds {
            let count = sub_breed_count(breed, &fetcher);
            println!("{} has {} sub breeds", breed, count);
        }
    }

    let stats = fetcher.stats();
    info!(
        calls_made = fetcher.calls_made(),
        hits = stats.hits(),
        failures = stats.failures(),
        "Hit ratio: {:.2}",
        stats.hit_ratio()
    );

    Ok(())
}
