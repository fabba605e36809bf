//! Mock auction data shared by the client tests and the dev server.
//!
//! The dev dataset covers each state the auction item page renders:
//! an auction that hasn't started, one in progress with several ranked
//! bidders, one in progress without bids, and one that has ended.

use crate::FakeStore;
use jiff::{Timestamp, ToSpan};
use payloads::{AuctionId, ImageRef, Role, responses};
use rust_decimal::Decimal;

pub fn auction_detail(
    id: &str,
    start_time: Timestamp,
    end_time: Timestamp,
) -> responses::AuctionDetail {
    responses::AuctionDetail {
        id: AuctionId::from(id),
        title: format!("Test item {id}"),
        description: "Lightly used. Ships in original packaging. Pickup \
                      available on weekends."
            .to_string(),
        category: Some("Electronics".to_string()),
        condition: "Used".to_string(),
        starting_bid: Decimal::from(100),
        current_bid: None,
        image: Some(ImageRef {
            public_id: None,
            url: format!("https://picsum.photos/seed/{id}/320"),
        }),
        start_time,
        end_time,
        created_by: Some("auctioneer".to_string()),
    }
}

/// Bidders in the given order, each with the given amount.
pub fn bidders(entries: &[(&str, i64)]) -> Vec<responses::Bidder> {
    entries
        .iter()
        .map(|(username, amount)| responses::Bidder {
            user_id: Some(format!("user-{username}")),
            username: username.to_string(),
            profile_image: Some(format!(
                "https://i.pravatar.cc/96?u={username}"
            )),
            amount: Some(Decimal::from(*amount)),
        })
        .collect()
}

pub fn bidder_profile(username: &str) -> responses::UserProfile {
    profile(username, Role::Bidder)
}

pub fn auctioneer_profile(username: &str) -> responses::UserProfile {
    profile(username, Role::Auctioneer)
}

fn profile(username: &str, role: Role) -> responses::UserProfile {
    responses::UserProfile {
        id: format!("user-{username}"),
        username: username.to_string(),
        email: Some(format!("{username}@example.com")),
        role,
        profile_image: None,
    }
}

/// Development dataset covering every auction time window.
pub struct DevDataset {
    pub upcoming: AuctionId,
    pub ongoing: AuctionId,
    pub ongoing_without_bids: AuctionId,
    pub ended: AuctionId,
    pub user: responses::UserProfile,
}

impl DevDataset {
    pub fn create(store: &FakeStore) -> Self {
        let now = Timestamp::now();

        let mut upcoming =
            auction_detail("upcoming", now + 24.hours(), now + 72.hours());
        upcoming.title = "Mid-century Armchair".to_string();
        upcoming.condition = "Used".to_string();
        let upcoming_id = upcoming.id.clone();
        store.insert_auction(upcoming, Vec::new());

        let mut ongoing =
            auction_detail("ongoing", now - 2.hours(), now + 22.hours());
        ongoing.title = "Vintage Film Camera".to_string();
        ongoing.description = "Fully working. Comes with a leather case. \
                               Lens cap missing."
            .to_string();
        let ongoing_bidders = bidders(&[
            ("alice", 1_450),
            ("bob", 1_300),
            ("charlie", 1_150),
            ("dana", 900),
            ("eve", 650),
        ]);
        ongoing.current_bid = ongoing_bidders.first().and_then(|b| b.amount);
        let ongoing_id = ongoing.id.clone();
        store.insert_auction(ongoing, ongoing_bidders);

        let mut quiet =
            auction_detail("quiet", now - 30.minutes(), now + 6.hours());
        quiet.title = "Hand-thrown Stoneware Set".to_string();
        quiet.condition = "New".to_string();
        let quiet_id = quiet.id.clone();
        store.insert_auction(quiet, Vec::new());

        let mut ended =
            auction_detail("ended", now - 72.hours(), now - 24.hours());
        ended.title = "Road Bike, 56cm".to_string();
        let ended_bidders = bidders(&[("bob", 5_200), ("alice", 4_800)]);
        ended.current_bid = ended_bidders.first().and_then(|b| b.amount);
        let ended_id = ended.id.clone();
        store.insert_auction(ended, ended_bidders);

        let user = bidder_profile("frank");
        store.sign_in(user.clone());

        Self {
            upcoming: upcoming_id,
            ongoing: ongoing_id,
            ongoing_without_bids: quiet_id,
            ended: ended_id,
            user,
        }
    }

    /// Print a summary of the created test data
    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!(
            "   👤 Signed in as {} ({:?})",
            self.user.username,
            self.user.role
        );
        tracing::info!("   ⏰ Auctions:");
        tracing::info!(
            "      - Upcoming: /auction/item/{} (starts in a day)",
            self.upcoming
        );
        tracing::info!(
            "      - Ongoing:  /auction/item/{} (five ranked bidders)",
            self.ongoing
        );
        tracing::info!(
            "      - Ongoing:  /auction/item/{} (no bids yet)",
            self.ongoing_without_bids
        );
        tracing::info!(
            "      - Ended:    /auction/item/{} (ended yesterday)",
            self.ended
        );
    }
}
