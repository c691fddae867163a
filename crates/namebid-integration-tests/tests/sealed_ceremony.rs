//! Integration test: sealed-bid ceremony timeline.
//!
//! Exercises:
//! 1. Phase classification across commit and reveal windows
//! 2. Boundary instants belonging to the later phase
//! 3. Countdown to each transition
//! 4. Bid acceptance only while committing

use namebid_pricing::bid::{min_bid, validate_bid};
use namebid_pricing::schedule::{next_transition, TransitionLabel};
use namebid_pricing::sealed::{min_next_bid, sealed_phase, sealed_phase_for};
use namebid_pricing::snapshot::AuctionSnapshot;
use namebid_pricing::PricingError;
use namebid_types::{Auction, AuctionType, SealedPhase, SECONDS_PER_HOUR};

/// Base timestamp for test scenarios.
const T0: u64 = 1_700_000_000;

fn sealed_auction() -> Auction {
    let json = format!(
        r#"{{
            "id": "auc-sealed", "domain": "vault.xyz", "type": "sealed", "status": "active",
            "startTime": {start}, "endTime": {reveal_end},
            "revealStart": {reveal_start}, "revealEnd": {reveal_end},
            "parameters": {{ "sealed": {{ "minDepositUsd": 100, "minIncrementPct": 5 }} }}
        }}"#,
        start = T0,
        reveal_start = T0 + SECONDS_PER_HOUR,
        reveal_end = T0 + 2 * SECONDS_PER_HOUR
    );
    serde_json::from_str(&json).expect("sealed record")
}

#[test]
fn sealed_phase_scenario() {
    let auction = sealed_auction();
    auction.validate().expect("valid record");
    assert_eq!(sealed_phase_for(&auction, T0 - 1), Some(SealedPhase::Scheduled));
    assert_eq!(sealed_phase_for(&auction, T0 + 1_800), Some(SealedPhase::Commit));
    assert_eq!(sealed_phase_for(&auction, T0 + 3_600), Some(SealedPhase::Reveal));
    assert_eq!(sealed_phase_for(&auction, T0 + 7_200), Some(SealedPhase::Closed));
}

#[test]
fn exactly_one_phase_per_instant() {
    let mut seen = Vec::new();
    for now in (T0 - 600..T0 + 8_000).step_by(60) {
        let phase = sealed_phase(T0, T0 + 3_600, T0 + 7_200, now);
        if seen.last() != Some(&phase) {
            seen.push(phase);
        }
    }
    assert_eq!(
        seen,
        vec![
            SealedPhase::Scheduled,
            SealedPhase::Commit,
            SealedPhase::Reveal,
            SealedPhase::Closed
        ]
    );
}

#[test]
fn sealed_min_bid_is_time_invariant() {
    let auction = sealed_auction();
    for now in [0, T0, T0 + 1_800, T0 + 3_600, T0 + 86_400, u64::MAX] {
        assert_eq!(min_bid(&auction, now), 100.0);
    }
}

#[test]
fn sealed_countdown() {
    let auction = sealed_auction();
    let next = next_transition(&auction, T0 + 1_800).expect("reveal pending");
    assert_eq!(next.label, TransitionLabel::RevealOpens);
    assert_eq!(next.seconds_remaining, 1_800);

    let snap = AuctionSnapshot::evaluate(&auction, T0 + 5_400);
    assert_eq!(snap.phase, Some(SealedPhase::Reveal));
    assert_eq!(snap.next_transition.map(|t| t.label), Some(TransitionLabel::Ends));
    assert!(AuctionSnapshot::evaluate(&auction, T0 + 7_200).is_finished());
}

#[test]
fn sealed_bids_only_while_committing() {
    let auction = sealed_auction();
    validate_bid(&auction, 150.0, T0 + 10).expect("commit phase bid");
    assert_eq!(
        validate_bid(&auction, 150.0, T0 + 4_000).unwrap_err(),
        PricingError::PhaseClosed {
            phase: SealedPhase::Reveal
        }
    );
    assert!(matches!(
        validate_bid(&auction, 50.0, T0 + 10).unwrap_err(),
        PricingError::BelowFloor { .. }
    ));
}

#[test]
fn sealed_increment_over_highest() {
    let auction = sealed_auction();
    let params = auction.parameters.sealed.as_ref().expect("sealed params");
    assert_eq!(min_next_bid(params, None), 100.0);
    assert!((min_next_bid(params, Some(1_000.0)) - 1_050.0).abs() < 1e-9);
}

#[test]
fn non_sealed_has_no_phase() {
    let mut auction = sealed_auction();
    auction.auction_type = AuctionType::English;
    assert_eq!(sealed_phase_for(&auction, T0), None);
    assert_eq!(min_bid(&auction, T0), 0.0);
}
