//! # namebid-types
//!
//! Shared domain types for the namebid marketplace.
//!
//! Records arrive from the REST layer (and from the indexer, after the caller
//! maps listings into the same shape) as camelCase JSON. Nothing in this crate
//! mutates or persists them.

pub mod auction;

pub use auction::{
    Auction, AuctionParameters, AuctionStatus, AuctionType, AuctionValidationError, DutchParams,
    SealedParams, SealedPhase,
};

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Amount denominated in US dollars.
pub type UsdAmount = f64;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u64 = 3_600;

#[cfg(test)]
mod tests {
    #[test]
    #[ignore] // Run manually to generate bindings
    fn export_ts_bindings() {
        use ts_rs::TS;
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../bindings");
        std::fs::create_dir_all(&dir).expect("create bindings dir");
        crate::auction::Auction::export_all_to(&dir).expect("export Auction");
        crate::auction::SealedPhase::export_all_to(&dir).expect("export SealedPhase");
    }
}
