//! Minimum bid selector and bid-floor validation.
//!
//! [`min_bid`] is the price shown on the "place bid / buy now" action and the
//! floor the bid form checks against before handing off to the wallet.

use namebid_types::{Auction, AuctionType, Timestamp, UsdAmount};

use crate::dutch::dutch_price_for;
use crate::sealed::sealed_phase_for;
use crate::{PricingError, Result};

/// Price relevant to the bid / buy-now action at `now`.
///
/// - dutch: the decayed price at `now`
/// - sealed: the fixed minimum deposit
/// - anything else, or a missing parameter block: `0`
pub fn min_bid(auction: &Auction, now: Timestamp) -> UsdAmount {
    match auction.auction_type {
        AuctionType::Dutch => dutch_price_for(auction, now).unwrap_or(0.0),
        AuctionType::Sealed => auction
            .parameters
            .sealed
            .as_ref()
            .map_or(0.0, |p| p.min_deposit_usd),
        AuctionType::English | AuctionType::Unknown => 0.0,
    }
}

/// Check a bid amount against the auction's window and current minimum.
///
/// # Errors
///
/// - [`PricingError::InvalidAmount`] if `amount` is not a positive finite number
/// - [`PricingError::AuctionInactive`] if the status is ended, settled or cancelled
/// - [`PricingError::NotOpen`] for a dutch auction outside `[startTime, endTime)`
/// - [`PricingError::PhaseClosed`] for a sealed auction outside its commit phase
/// - [`PricingError::NotOrderable`] if no positive minimum can be derived
/// - [`PricingError::BelowFloor`] if `amount` is below [`min_bid`]
pub fn validate_bid(auction: &Auction, amount: UsdAmount, now: Timestamp) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PricingError::InvalidAmount(amount));
    }
    if auction.status.is_terminal() {
        return Err(PricingError::AuctionInactive {
            status: auction.status,
        });
    }

    match auction.auction_type {
        AuctionType::Dutch => {
            if now < auction.start_time || now >= auction.end_time {
                return Err(PricingError::NotOpen {
                    start_time: auction.start_time,
                    end_time: auction.end_time,
                    now,
                });
            }
        }
        AuctionType::Sealed => {
            let phase = sealed_phase_for(auction, now).ok_or(PricingError::NotOrderable)?;
            if !phase.accepts_commitments() {
                return Err(PricingError::PhaseClosed { phase });
            }
        }
        AuctionType::English | AuctionType::Unknown => return Err(PricingError::NotOrderable),
    }

    let floor = min_bid(auction, now);
    if floor <= 0.0 {
        return Err(PricingError::NotOrderable);
    }
    if amount < floor {
        tracing::debug!(auction_id = %auction.id, amount, floor, "bid rejected below floor");
        return Err(PricingError::BelowFloor { amount, floor });
    }
    Ok(())
}
