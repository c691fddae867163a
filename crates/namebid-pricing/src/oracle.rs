//! Clock-bound convenience wrapper.
//!
//! [`PriceOracle`] reads its clock once per call and forwards to the pure
//! functions. It belongs at the outermost boundary (the watcher binary, a UI
//! bridge); library code passes `now` explicitly instead.

use namebid_types::{Auction, SealedPhase, Timestamp, UsdAmount};

use crate::clock::{Clock, SystemClock};
use crate::snapshot::AuctionSnapshot;
use crate::{bid, sealed, Result};

/// Pricing evaluated against a [`Clock`].
#[derive(Debug, Clone, Default)]
pub struct PriceOracle<C = SystemClock> {
    clock: C,
}

impl<C: Clock> PriceOracle<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Minimum bid / buy-now price right now.
    pub fn current_price(&self, auction: &Auction) -> UsdAmount {
        bid::min_bid(auction, self.clock.now())
    }

    /// Sealed phase right now, if applicable.
    pub fn current_phase(&self, auction: &Auction) -> Option<SealedPhase> {
        sealed::sealed_phase_for(auction, self.clock.now())
    }

    pub fn snapshot(&self, auction: &Auction) -> AuctionSnapshot {
        AuctionSnapshot::evaluate(auction, self.clock.now())
    }

    /// Validate a bid against the current floor.
    ///
    /// # Errors
    ///
    /// See [`bid::validate_bid`].
    pub fn validate_bid(&self, auction: &Auction, amount: UsdAmount) -> Result<()> {
        bid::validate_bid(auction, amount, self.clock.now())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
