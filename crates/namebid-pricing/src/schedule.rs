//! Next state transition of an auction, for countdown displays.

use serde::{Deserialize, Serialize};

use namebid_types::{Auction, AuctionType, Timestamp};

/// What happens at a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransitionLabel {
    /// Bidding (or the commit phase) opens.
    Opens,
    /// Sealed commit phase ends and reveals begin.
    RevealOpens,
    /// The auction ends.
    Ends,
}

/// The next instant at which the derived state of an auction changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[ts(type = "number")]
    pub at: Timestamp,
    #[ts(type = "number")]
    pub seconds_remaining: u64,
    pub label: TransitionLabel,
}

fn upcoming(now: Timestamp, steps: &[(Timestamp, TransitionLabel)]) -> Option<Transition> {
    steps
        .iter()
        .find(|(at, _)| now < *at)
        .map(|&(at, label)| Transition {
            at,
            seconds_remaining: at - now,
            label,
        })
}

/// Next transition after `now`, or `None` once the auction is over.
///
/// Sealed auctions without a reveal window have no schedule.
pub fn next_transition(auction: &Auction, now: Timestamp) -> Option<Transition> {
    match auction.auction_type {
        AuctionType::Sealed => {
            let (reveal_start, reveal_end) = auction.reveal_window()?;
            upcoming(
                now,
                &[
                    (auction.start_time, TransitionLabel::Opens),
                    (reveal_start, TransitionLabel::RevealOpens),
                    (reveal_end, TransitionLabel::Ends),
                ],
            )
        }
        AuctionType::Dutch | AuctionType::English | AuctionType::Unknown => upcoming(
            now,
            &[
                (auction.start_time, TransitionLabel::Opens),
                (auction.end_time, TransitionLabel::Ends),
            ],
        ),
    }
}
