//! Sealed-bid ceremony phase.
//!
//! The timeline is cut into four half-open intervals:
//!
//! ```text
//!   scheduled   |   commit    |   reveal   |  closed
//! ------------start-------commit_end---reveal_end------->
//! ```
//!
//! Each boundary instant belongs to the phase on its right.

use namebid_types::{Auction, SealedParams, SealedPhase, Timestamp, UsdAmount};

/// Classify `now` against the sealed-bid timeline.
///
/// Expects `start_time <= commit_end <= reveal_end`.
///
/// # Examples
///
/// ```
/// use namebid_pricing::sealed::sealed_phase;
/// use namebid_types::SealedPhase;
///
/// assert_eq!(sealed_phase(0, 3600, 7200, 3600), SealedPhase::Reveal);
/// ```
pub fn sealed_phase(
    start_time: Timestamp,
    commit_end: Timestamp,
    reveal_end: Timestamp,
    now: Timestamp,
) -> SealedPhase {
    if now < start_time {
        SealedPhase::Scheduled
    } else if now < commit_end {
        SealedPhase::Commit
    } else if now < reveal_end {
        SealedPhase::Reveal
    } else {
        SealedPhase::Closed
    }
}

/// Phase of a sealed auction record at `now`.
///
/// Returns `None` when the record is not sealed or lacks `revealStart` /
/// `revealEnd`; that means "not applicable", not an error.
pub fn sealed_phase_for(auction: &Auction, now: Timestamp) -> Option<SealedPhase> {
    if !auction.is_sealed() {
        return None;
    }
    let (commit_end, reveal_end) = auction.reveal_window()?;
    Some(sealed_phase(auction.start_time, commit_end, reveal_end, now))
}

/// Smallest bid accepted on top of the current highest bid.
///
/// With no prior bid this is the minimum deposit. Otherwise it is the highest
/// bid raised by `min_increment_pct`, never below the deposit.
pub fn min_next_bid(params: &SealedParams, highest_bid: Option<UsdAmount>) -> UsdAmount {
    let deposit = params.min_deposit_usd;
    match highest_bid {
        Some(highest) if highest.is_finite() && highest > 0.0 => {
            let increment = params.min_increment_pct.max(0.0) / 100.0;
            deposit.max(highest * (1.0 + increment))
        }
        _ => deposit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namebid_types::{AuctionParameters, AuctionStatus, AuctionType};
    use proptest::prelude::*;

    const T0: Timestamp = 1_700_000_000;

    fn sealed_auction() -> Auction {
        Auction {
            id: "s".to_string(),
            domain: "vault.xyz".to_string(),
            auction_type: AuctionType::Sealed,
            status: AuctionStatus::Active,
            start_time: T0,
            end_time: T0 + 7_200,
            reveal_start: Some(T0 + 3_600),
            reveal_end: Some(T0 + 7_200),
            parameters: AuctionParameters {
                dutch: None,
                sealed: Some(SealedParams {
                    min_deposit_usd: 100.0,
                    min_increment_pct: 5.0,
                }),
            },
        }
    }

    #[test]
    fn test_phases() {
        let phase = |now| sealed_phase(T0, T0 + 3_600, T0 + 7_200, now);
        assert_eq!(phase(T0 - 1), SealedPhase::Scheduled);
        assert_eq!(phase(T0), SealedPhase::Commit);
        assert_eq!(phase(T0 + 1_800), SealedPhase::Commit);
        assert_eq!(phase(T0 + 3_599), SealedPhase::Commit);
        assert_eq!(phase(T0 + 3_600), SealedPhase::Reveal);
        assert_eq!(phase(T0 + 7_199), SealedPhase::Reveal);
        assert_eq!(phase(T0 + 7_200), SealedPhase::Closed);
        assert_eq!(phase(u64::MAX), SealedPhase::Closed);
    }

    #[test]
    fn test_empty_commit_window() {
        // start == commit_end: the commit phase never occurs
        assert_eq!(sealed_phase(T0, T0, T0 + 10, T0), SealedPhase::Reveal);
        assert_eq!(sealed_phase(T0, T0, T0, T0), SealedPhase::Closed);
    }

    #[test]
    fn test_for_auction() {
        let auction = sealed_auction();
        assert_eq!(sealed_phase_for(&auction, T0 + 1_800), Some(SealedPhase::Commit));
        assert_eq!(sealed_phase_for(&auction, T0 + 7_200), Some(SealedPhase::Closed));
    }

    #[test]
    fn test_not_applicable() {
        let mut missing = sealed_auction();
        missing.reveal_end = None;
        assert_eq!(sealed_phase_for(&missing, T0), None);

        let mut dutch = sealed_auction();
        dutch.auction_type = AuctionType::Dutch;
        assert_eq!(sealed_phase_for(&dutch, T0), None);
    }

    #[test]
    fn test_min_next_bid() {
        let params = SealedParams {
            min_deposit_usd: 100.0,
            min_increment_pct: 10.0,
        };
        assert_eq!(min_next_bid(&params, None), 100.0);
        assert_eq!(min_next_bid(&params, Some(50.0)), 100.0);
        assert!((min_next_bid(&params, Some(200.0)) - 220.0).abs() < 1e-9);
        assert_eq!(min_next_bid(&params, Some(f64::NAN)), 100.0);
    }

    proptest! {
        #[test]
        fn prop_phase_changes_only_at_boundaries(
            commit_len in 0u64..10_000,
            reveal_len in 0u64..10_000,
            offset in 0u64..40_000,
        ) {
            let start = T0;
            let commit_end = start + commit_len;
            let reveal_end = commit_end + reveal_len;
            let now = T0 - 10_000 + offset;
            let before = sealed_phase(start, commit_end, reveal_end, now);
            let after = sealed_phase(start, commit_end, reveal_end, now + 1);
            if before != after {
                let boundary = now + 1;
                prop_assert!(
                    boundary == start || boundary == commit_end || boundary == reveal_end
                );
            }
        }
    }
}
