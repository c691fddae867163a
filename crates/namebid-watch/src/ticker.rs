//! Fixed-interval re-evaluation of the auction feed.
//!
//! Each tick evaluates every auction against the oracle's clock and writes one
//! JSON line per snapshot. Ticks are independent; a late tick is skipped
//! rather than replayed.

use std::io::Write;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use namebid_pricing::clock::Clock;
use namebid_pricing::oracle::PriceOracle;
use namebid_types::Auction;

/// Poll loop settings.
#[derive(Debug, Clone)]
pub struct Ticker {
    /// Time between ticks.
    pub period: Duration,
    /// Evaluate a single tick and return.
    pub once: bool,
    /// Return once every auction is finished.
    pub stop_when_finished: bool,
}

/// Evaluate every auction once and write the snapshots.
///
/// Returns whether every auction is finished.
pub fn evaluate_tick<C: Clock, W: Write>(
    oracle: &PriceOracle<C>,
    auctions: &[Auction],
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut all_finished = true;
    for auction in auctions {
        let snapshot = oracle.snapshot(auction);
        all_finished &= snapshot.is_finished();
        serde_json::to_writer(&mut *out, &snapshot)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(all_finished)
}

impl Ticker {
    /// Run until a stop condition is met. Returns the number of ticks evaluated.
    pub async fn run<C: Clock, W: Write>(
        &self,
        oracle: &PriceOracle<C>,
        auctions: &[Auction],
        out: &mut W,
    ) -> anyhow::Result<u64> {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut ticks = 0u64;
        loop {
            interval.tick().await;
            let all_finished = evaluate_tick(oracle, auctions, out)?;
            ticks += 1;
            debug!(tick = ticks, all_finished, "tick evaluated");

            if self.once {
                break;
            }
            if self.stop_when_finished && all_finished {
                info!(ticks, "all auctions finished");
                break;
            }
        }
        Ok(ticks)
    }
}
