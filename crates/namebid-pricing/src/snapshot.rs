//! One evaluation of an auction at a given instant.
//!
//! Snapshots are what the presentation layer renders: the current bid floor,
//! the sealed phase badge and the countdown. They are recomputed on every
//! poll and never cached.

use serde::{Deserialize, Serialize};

use namebid_types::{Auction, AuctionType, SealedPhase, Timestamp, UsdAmount};

use crate::bid::min_bid;
use crate::dutch::DutchCurve;
use crate::schedule::{next_transition, Transition};
use crate::sealed::sealed_phase_for;

/// Derived view of an auction at `evaluated_at`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSnapshot {
    pub auction_id: String,
    pub domain: String,
    pub auction_type: AuctionType,
    #[ts(type = "number")]
    pub evaluated_at: Timestamp,
    /// Minimum bid / buy-now price; `0` when not orderable.
    pub price_usd: UsdAmount,
    /// Elapsed fraction of a well-formed dutch decay window, in `[0, 1]`.
    pub progress: Option<f64>,
    /// Only set for sealed auctions with a reveal window.
    pub phase: Option<SealedPhase>,
    pub next_transition: Option<Transition>,
}

impl AuctionSnapshot {
    /// Evaluate `auction` at `now`.
    pub fn evaluate(auction: &Auction, now: Timestamp) -> Self {
        let snapshot = Self {
            auction_id: auction.id.clone(),
            domain: auction.domain.clone(),
            auction_type: auction.auction_type,
            evaluated_at: now,
            price_usd: min_bid(auction, now),
            progress: DutchCurve::for_auction(auction)
                .ok()
                .map(|curve| curve.progress_at(now)),
            phase: sealed_phase_for(auction, now),
            next_transition: next_transition(auction, now),
        };
        tracing::debug!(
            auction_id = %snapshot.auction_id,
            price = snapshot.price_usd,
            phase = ?snapshot.phase,
            "auction evaluated"
        );
        snapshot
    }

    /// Whether the auction has nothing left to happen.
    pub fn is_finished(&self) -> bool {
        self.next_transition.is_none()
    }
}
