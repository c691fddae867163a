//! Auction records and the sealed-bid ceremony phase.
//!
//! An [`Auction`] is fetched fresh for every evaluation; the price and phase
//! derived from it are never stored.

use serde::{Deserialize, Serialize};

use crate::{Timestamp, UsdAmount};

/// Auction mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AuctionType {
    Dutch,
    Sealed,
    English,
    /// Any type string this build does not recognise.
    #[serde(other)]
    Unknown,
}

/// Lifecycle status as reported by the data source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    Scheduled,
    Active,
    Ended,
    Settled,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AuctionStatus {
    /// Return whether the data source has taken the auction off the market.
    ///
    /// `Unknown` is not terminal; the time window decides instead.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AuctionStatus::Ended | AuctionStatus::Settled | AuctionStatus::Cancelled
        )
    }
}

/// Dutch auction price parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DutchParams {
    pub start_price_usd: UsdAmount,
    /// Reserve the price decays to.
    pub floor_price_usd: UsdAmount,
    /// Informational; the decay window is the auction's start/end.
    #[serde(default)]
    #[ts(type = "number")]
    pub duration_sec: u64,
}

/// Sealed-bid deposit parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SealedParams {
    pub min_deposit_usd: UsdAmount,
    /// Percentage a new bid must exceed the highest bid by.
    #[serde(default)]
    pub min_increment_pct: f64,
}

/// Type-specific parameter blocks. At most one is expected to be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
pub struct AuctionParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch: Option<DutchParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sealed: Option<SealedParams>,
}

/// Auction record as served by the REST layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde(default)]
    pub id: String,
    /// Fully-qualified domain name being auctioned.
    #[serde(default)]
    pub domain: String,
    #[serde(rename = "type")]
    pub auction_type: AuctionType,
    #[serde(default)]
    pub status: AuctionStatus,
    #[ts(type = "number")]
    pub start_time: Timestamp,
    #[ts(type = "number")]
    pub end_time: Timestamp,
    /// End of the commit phase for sealed auctions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | undefined")]
    pub reveal_start: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "number | undefined")]
    pub reveal_end: Option<Timestamp>,
    #[serde(default)]
    pub parameters: AuctionParameters,
}

/// Sealed-bid ceremony phase, derived from the clock on every read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SealedPhase {
    Scheduled,
    Commit,
    Reveal,
    Closed,
}

impl SealedPhase {
    /// Return whether bids may be committed in this phase.
    pub fn accepts_commitments(self) -> bool {
        self == SealedPhase::Commit
    }
}

impl std::fmt::Display for SealedPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SealedPhase::Scheduled => "scheduled",
            SealedPhase::Commit => "commit",
            SealedPhase::Reveal => "reveal",
            SealedPhase::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// Ways an auction record can break its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuctionValidationError {
    /// A dutch auction without its parameter block.
    #[error("dutch auction is missing its dutch parameters")]
    MissingDutchParams,

    /// A sealed auction without its parameter block.
    #[error("sealed auction is missing its sealed parameters")]
    MissingSealedParams,

    /// A sealed auction without reveal bounds.
    #[error("sealed auction is missing revealStart/revealEnd")]
    MissingRevealWindow,

    /// Floor above the starting price.
    #[error("floor price {floor} exceeds start price {start}")]
    FloorAboveStart {
        /// Configured starting price.
        start: UsdAmount,
        /// Configured floor price.
        floor: UsdAmount,
    },

    /// Timestamps out of order.
    #[error("timestamps out of order: {earlier_name}={earlier} > {later_name}={later}")]
    TimesOutOfOrder {
        earlier_name: &'static str,
        earlier: Timestamp,
        later_name: &'static str,
        later: Timestamp,
    },

    /// A USD amount that is negative, NaN or infinite.
    #[error("invalid amount for {field}: {value}")]
    InvalidAmount {
        field: &'static str,
        value: UsdAmount,
    },
}

fn check_amount(field: &'static str, value: UsdAmount) -> Result<(), AuctionValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AuctionValidationError::InvalidAmount { field, value })
    }
}

fn check_order(
    earlier_name: &'static str,
    earlier: Timestamp,
    later_name: &'static str,
    later: Timestamp,
) -> Result<(), AuctionValidationError> {
    if earlier > later {
        return Err(AuctionValidationError::TimesOutOfOrder {
            earlier_name,
            earlier,
            later_name,
            later,
        });
    }
    Ok(())
}

impl Auction {
    /// Check the record against the invariants for its auction type.
    ///
    /// Pricing never requires this; it is for callers that want to reject
    /// bad records at ingest.
    ///
    /// # Errors
    ///
    /// Returns the first [`AuctionValidationError`] found.
    pub fn validate(&self) -> Result<(), AuctionValidationError> {
        check_order("startTime", self.start_time, "endTime", self.end_time)?;

        match self.auction_type {
            AuctionType::Dutch => {
                let dutch = self
                    .parameters
                    .dutch
                    .as_ref()
                    .ok_or(AuctionValidationError::MissingDutchParams)?;
                check_amount("startPriceUsd", dutch.start_price_usd)?;
                check_amount("floorPriceUsd", dutch.floor_price_usd)?;
                if dutch.floor_price_usd > dutch.start_price_usd {
                    return Err(AuctionValidationError::FloorAboveStart {
                        start: dutch.start_price_usd,
                        floor: dutch.floor_price_usd,
                    });
                }
            }
            AuctionType::Sealed => {
                let (reveal_start, reveal_end) = self
                    .reveal_window()
                    .ok_or(AuctionValidationError::MissingRevealWindow)?;
                check_order("startTime", self.start_time, "revealStart", reveal_start)?;
                check_order("revealStart", reveal_start, "revealEnd", reveal_end)?;
                let sealed = self
                    .parameters
                    .sealed
                    .as_ref()
                    .ok_or(AuctionValidationError::MissingSealedParams)?;
                check_amount("minDepositUsd", sealed.min_deposit_usd)?;
                check_amount("minIncrementPct", sealed.min_increment_pct)?;
            }
            AuctionType::English | AuctionType::Unknown => {}
        }
        Ok(())
    }

    /// Return `(revealStart, revealEnd)` when both are present.
    pub fn reveal_window(&self) -> Option<(Timestamp, Timestamp)> {
        Some((self.reveal_start?, self.reveal_end?))
    }

    /// Return whether this is a sealed auction.
    pub fn is_sealed(&self) -> bool {
        self.auction_type == AuctionType::Sealed
    }
}
