//! # namebid-pricing
//!
//! Auction price and phase derivation for the namebid marketplace.
//!
//! Every function here is pure: the evaluation instant is always an explicit
//! `now` argument. Only [`oracle::PriceOracle`] reads a [`clock::Clock`], and
//! it is meant for the outermost caller.
//!
//! ## Modules
//!
//! - [`dutch`] — Linear Dutch-auction price decay
//! - [`sealed`] — Sealed-bid ceremony phase
//! - [`bid`] — Minimum bid selector and bid-floor validation
//! - [`schedule`] — Next state transition (countdowns)
//! - [`snapshot`] — Serializable evaluation of an auction at one instant
//! - [`clock`] — Time sources
//! - [`oracle`] — Clock-bound convenience wrapper

pub mod bid;
pub mod clock;
pub mod dutch;
pub mod oracle;
pub mod schedule;
pub mod sealed;
pub mod snapshot;

use namebid_types::{AuctionStatus, AuctionType, SealedPhase, Timestamp, UsdAmount};

/// Error types for pricing and bid validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// The floor price exceeds the starting price.
    #[error("floor price {floor} exceeds start price {start}")]
    FloorAboveStart {
        /// Starting price.
        start: UsdAmount,
        /// Floor price.
        floor: UsdAmount,
    },

    /// The decay window ends before it starts.
    #[error("decay window inverted: end {end_time} < start {start_time}")]
    WindowInverted {
        /// Window start.
        start_time: Timestamp,
        /// Window end.
        end_time: Timestamp,
    },

    /// Amount is negative, NaN or infinite (or zero where a bid is expected).
    #[error("invalid amount: {0}")]
    InvalidAmount(UsdAmount),

    /// The operation does not apply to this auction type.
    #[error("expected a {expected:?} auction, got {actual:?}")]
    WrongAuctionType {
        /// Type the operation needs.
        expected: AuctionType,
        /// Type of the record.
        actual: AuctionType,
    },

    /// The record lacks the parameter block its type requires.
    #[error("{0:?} auction is missing its parameters")]
    MissingParameters(AuctionType),

    /// The data source reports the auction as ended, settled or cancelled.
    #[error("auction is {status:?} and no longer takes bids")]
    AuctionInactive {
        /// Reported status.
        status: AuctionStatus,
    },

    /// No positive price can be derived for this auction.
    #[error("auction is not orderable")]
    NotOrderable,

    /// Bid is below the current minimum.
    #[error("bid {amount} is below the minimum of {floor}")]
    BelowFloor {
        /// Offered amount.
        amount: UsdAmount,
        /// Current minimum.
        floor: UsdAmount,
    },

    /// Outside the window in which the auction takes bids.
    #[error("auction not open at {now}: window is [{start_time}, {end_time})")]
    NotOpen {
        /// Window start.
        start_time: Timestamp,
        /// Window end.
        end_time: Timestamp,
        /// Evaluation instant.
        now: Timestamp,
    },

    /// Sealed auction is not taking commitments.
    #[error("sealed auction is in the {phase} phase")]
    PhaseClosed {
        /// Current phase.
        phase: SealedPhase,
    },
}

/// Convenience result type for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
