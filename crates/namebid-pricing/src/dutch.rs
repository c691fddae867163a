//! Linear Dutch-auction price decay.
//!
//! The price falls in a straight line from the start price to the floor over
//! the auction window:
//!
//! ```text
//! price(now) = start - (start - floor) * (now - start_time) / (end_time - start_time)
//! ```
//!
//! Before the window the price is `start`; from `end_time` on it is `floor`.
//! A zero-length window prices at `floor` for every instant.
//!
//! All call sites go through [`DutchCurve::price_at`], so there is exactly one
//! copy of the formula.

use namebid_types::{Auction, AuctionType, Timestamp, UsdAmount};

use crate::{PricingError, Result};

/// A validated Dutch decay curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DutchCurve {
    start_price: UsdAmount,
    floor_price: UsdAmount,
    start_time: Timestamp,
    end_time: Timestamp,
}

fn check_price(value: UsdAmount) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidAmount(value))
    }
}

impl DutchCurve {
    /// Build a curve, rejecting parameters the formula is not defined for.
    ///
    /// `start_time == end_time` is accepted and prices at the floor.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidAmount`] for a negative, NaN or infinite price
    /// - [`PricingError::FloorAboveStart`] if `floor_price > start_price`
    /// - [`PricingError::WindowInverted`] if `end_time < start_time`
    pub fn new(
        start_price: UsdAmount,
        floor_price: UsdAmount,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Result<Self> {
        check_price(start_price)?;
        check_price(floor_price)?;
        if floor_price > start_price {
            return Err(PricingError::FloorAboveStart {
                start: start_price,
                floor: floor_price,
            });
        }
        if end_time < start_time {
            return Err(PricingError::WindowInverted {
                start_time,
                end_time,
            });
        }
        Ok(Self {
            start_price,
            floor_price,
            start_time,
            end_time,
        })
    }

    /// Build the curve of a dutch auction record.
    ///
    /// # Errors
    ///
    /// - [`PricingError::WrongAuctionType`] if the record is not dutch
    /// - [`PricingError::MissingParameters`] if `parameters.dutch` is absent
    /// - any error of [`DutchCurve::new`]
    pub fn for_auction(auction: &Auction) -> Result<Self> {
        if auction.auction_type != AuctionType::Dutch {
            return Err(PricingError::WrongAuctionType {
                expected: AuctionType::Dutch,
                actual: auction.auction_type,
            });
        }
        let params = auction
            .parameters
            .dutch
            .as_ref()
            .ok_or(PricingError::MissingParameters(AuctionType::Dutch))?;
        Self::new(
            params.start_price_usd,
            params.floor_price_usd,
            auction.start_time,
            auction.end_time,
        )
    }

    /// Price at `now`.
    pub fn price_at(&self, now: Timestamp) -> UsdAmount {
        if self.end_time == self.start_time {
            return self.floor_price;
        }
        if now < self.start_time {
            return self.start_price;
        }
        if now >= self.end_time {
            return self.floor_price;
        }

        // Scale the spread by the elapsed fraction; multiplying by the raw
        // elapsed seconds first overflows for prices near f64::MAX
        let spread = self.start_price - self.floor_price;
        let decay = spread * self.progress_at(now);

        // Rounding must never push the price outside its range
        (self.start_price - decay).clamp(self.floor_price, self.start_price)
    }

    /// Fraction of the window elapsed at `now`, in `[0, 1]`.
    ///
    /// A zero-length window is always complete.
    pub fn progress_at(&self, now: Timestamp) -> f64 {
        if now >= self.end_time || self.end_time == self.start_time {
            return 1.0;
        }
        if now <= self.start_time {
            return 0.0;
        }
        (now - self.start_time) as f64 / (self.end_time - self.start_time) as f64
    }
}

/// Current Dutch price from primitive parameters.
///
/// This is total: malformed parameters (floor above start, inverted window,
/// non-finite prices) are logged and priced at the floor, or at `0` when the
/// floor itself is unusable.
///
/// # Examples
///
/// ```
/// use namebid_pricing::dutch::dutch_price;
///
/// let t0 = 1_700_000_000;
/// assert_eq!(dutch_price(6000.0, 3000.0, t0, t0 + 86_400, t0 + 43_200), 4500.0);
/// assert_eq!(dutch_price(6000.0, 3000.0, t0, t0 + 86_400, t0 - 1), 6000.0);
/// ```
pub fn dutch_price(
    start_price: UsdAmount,
    floor_price: UsdAmount,
    start_time: Timestamp,
    end_time: Timestamp,
    now: Timestamp,
) -> UsdAmount {
    match DutchCurve::new(start_price, floor_price, start_time, end_time) {
        Ok(curve) => curve.price_at(now),
        Err(err) => {
            // Callers poll this every tick; feeds are validated once at load
            tracing::debug!(%err, start_price, floor_price, start_time, end_time, "malformed dutch parameters, pricing at floor");
            if floor_price.is_finite() {
                floor_price.max(0.0)
            } else {
                0.0
            }
        }
    }
}

/// Current Dutch price of an auction record.
///
/// Returns `None` if the record is not dutch or has no dutch parameters.
pub fn dutch_price_for(auction: &Auction, now: Timestamp) -> Option<UsdAmount> {
    if auction.auction_type != AuctionType::Dutch {
        return None;
    }
    let params = auction.parameters.dutch.as_ref()?;
    Some(dutch_price(
        params.start_price_usd,
        params.floor_price_usd,
        auction.start_time,
        auction.end_time,
        now,
    ))
}
