//! Auction feed loading.
//!
//! A feed is the JSON the REST layer serves: either a bare array of auction
//! records or an object with an `auctions` array.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use namebid_types::Auction;

#[derive(Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    List(Vec<Auction>),
    Wrapped { auctions: Vec<Auction> },
}

/// Parse a feed document.
///
/// Records failing [`Auction::validate`] are dropped with a warning when
/// `skip_invalid` is set, and fail the whole feed otherwise.
pub fn parse_feed(json: &str, skip_invalid: bool) -> anyhow::Result<Vec<Auction>> {
    let auctions = match serde_json::from_str(json).context("decoding auction feed")? {
        FeedDocument::List(auctions) => auctions,
        FeedDocument::Wrapped { auctions } => auctions,
    };

    let mut accepted = Vec::with_capacity(auctions.len());
    for auction in auctions {
        match auction.validate() {
            Ok(()) => accepted.push(auction),
            Err(e) if skip_invalid => {
                warn!(auction_id = %auction.id, error = %e, "skipping invalid auction");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("auction {:?} is invalid", auction.id));
            }
        }
    }
    Ok(accepted)
}

/// Load and parse a feed file.
pub fn load_feed(path: &Path, skip_invalid: bool) -> anyhow::Result<Vec<Auction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading feed {}", path.display()))?;
    let auctions = parse_feed(&content, skip_invalid)?;
    info!(count = auctions.len(), path = %path.display(), "auction feed loaded");
    Ok(auctions)
}
