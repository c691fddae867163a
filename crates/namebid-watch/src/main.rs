//! namebid-watch: evaluates auction prices and phases on a fixed interval.
//!
//! Reads a JSON auction feed (the shape the REST layer serves), then writes
//! one JSON snapshot per auction per tick to stdout. Logs go to stderr.

mod config;
mod feed;
mod ticker;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use namebid_pricing::clock::{Clock, FixedClock, SystemClock};
use namebid_pricing::oracle::PriceOracle;

use crate::config::WatchConfig;
use crate::ticker::Ticker;

#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct RunOptions {
    /// TOML configuration file.
    #[arg(long = "config")]
    #[arg(env = "NAMEBID_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON auction feed. Overrides `feed.path` from the config.
    #[arg(long = "feed")]
    #[arg(env = "NAMEBID_FEED")]
    pub feed: Option<PathBuf>,

    /// Evaluate a single tick and exit.
    #[arg(long = "once")]
    pub once: bool,

    /// Evaluate at this unix timestamp instead of the system clock. Implies --once.
    #[arg(long = "at")]
    pub at: Option<u64>,

    /// Milliseconds between ticks. Overrides `poll.interval_ms`.
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = RunOptions::parse();

    // 1. Load config
    let config = WatchConfig::load(args.config.as_deref())?;

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("namebid={}", config.log.level).parse()?),
        )
        .init();

    info!("namebid-watch starting");

    // 3. Load the feed
    let feed_path = args
        .feed
        .clone()
        .or_else(|| config.feed_path())
        .context("no auction feed given (use --feed or feed.path)")?;
    let auctions = feed::load_feed(&feed_path, config.feed.skip_invalid)?;

    // 4. Pick the clock
    let clock: Arc<dyn Clock> = match args.at {
        Some(at) => Arc::new(FixedClock::new(at)),
        None => Arc::new(SystemClock),
    };
    let oracle = PriceOracle::with_clock(clock);

    let interval_ms = args.interval_ms.unwrap_or(config.poll.interval_ms);
    if interval_ms == 0 {
        anyhow::bail!("interval must be non-zero");
    }
    let ticker = Ticker {
        period: Duration::from_millis(interval_ms),
        once: args.once || args.at.is_some(),
        stop_when_finished: config.poll.stop_when_finished,
    };

    info!(
        auctions = auctions.len(),
        interval_ms,
        once = ticker.once,
        "watching auctions"
    );

    // 5. Poll until done or interrupted
    let mut out = std::io::stdout();
    tokio::select! {
        result = ticker.run(&oracle, &auctions, &mut out) => {
            match result {
                Ok(ticks) => info!(ticks, "watch finished"),
                Err(e) => {
                    error!("watch failed: {e:#}");
                    return Err(e);
                }
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received, shutting down");
        }
    }

    Ok(())
}
