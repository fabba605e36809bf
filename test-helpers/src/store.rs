//! In-memory auction data behind the fake backend.

use jiff::Timestamp;
use payloads::{AuctionId, responses};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Please sign in to continue.")]
    NotSignedIn,
    #[error("Auction not found.")]
    AuctionNotFound,
    #[error("Auction has not started yet.")]
    AuctionNotStarted,
    #[error("Auction has ended.")]
    AuctionEnded,
    #[error("Please enter a valid bid amount.")]
    InvalidAmount,
}

#[derive(Debug, Clone)]
struct Listing {
    detail: responses::AuctionDetail,
    bidders: Vec<responses::Bidder>,
}

#[derive(Debug, Default)]
struct Inner {
    auctions: HashMap<AuctionId, Listing>,
    signed_in: Option<responses::UserProfile>,
}

/// Shared handle on the fake backend's data. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    inner: Arc<Mutex<Inner>>,
}

impl FakeStore {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panicking test thread shouldn't take the rest of the suite with it
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn insert_auction(
        &self,
        detail: responses::AuctionDetail,
        bidders: Vec<responses::Bidder>,
    ) {
        let id = detail.id.clone();
        self.lock()
            .auctions
            .insert(id, Listing { detail, bidders });
    }

    pub fn read_auction(
        &self,
        auction_id: &AuctionId,
    ) -> Result<responses::AuctionItemWithBidders, StoreError> {
        let inner = self.lock();
        let listing = inner
            .auctions
            .get(auction_id)
            .ok_or(StoreError::AuctionNotFound)?;
        Ok(responses::AuctionItemWithBidders {
            auction_item: listing.detail.clone(),
            bidders: listing.bidders.clone(),
        })
    }

    pub fn sign_in(&self, user: responses::UserProfile) {
        self.lock().signed_in = Some(user);
    }

    pub fn sign_out(&self) {
        self.lock().signed_in = None;
    }

    pub fn current_user(&self) -> Result<responses::UserProfile, StoreError> {
        self.lock().signed_in.clone().ok_or(StoreError::NotSignedIn)
    }

    /// Record a bid from the signed-in user.
    ///
    /// A user holds one entry per auction; bidding again replaces their
    /// amount. Bidders stay sorted by amount, highest first, and the
    /// auction's current bid follows the top entry.
    pub fn place_bid(
        &self,
        auction_id: &AuctionId,
        amount: &str,
        now: Timestamp,
    ) -> Result<responses::BidPlaced, StoreError> {
        let mut inner = self.lock();
        let user = inner.signed_in.clone().ok_or(StoreError::NotSignedIn)?;
        let listing = inner
            .auctions
            .get_mut(auction_id)
            .ok_or(StoreError::AuctionNotFound)?;

        if now < listing.detail.start_time {
            return Err(StoreError::AuctionNotStarted);
        }
        if now > listing.detail.end_time {
            return Err(StoreError::AuctionEnded);
        }
        let amount: Decimal =
            amount.trim().parse().map_err(|_| StoreError::InvalidAmount)?;
        if amount <= Decimal::ZERO {
            return Err(StoreError::InvalidAmount);
        }

        match listing
            .bidders
            .iter_mut()
            .find(|bidder| bidder.username == user.username)
        {
            Some(bidder) => bidder.amount = Some(amount),
            None => listing.bidders.push(responses::Bidder {
                user_id: Some(user.id.clone()),
                username: user.username.clone(),
                profile_image: user.profile_image.map(|image| image.url),
                amount: Some(amount),
            }),
        }
        listing.bidders.sort_by(|a, b| b.amount.cmp(&a.amount));

        let current_bid = listing.bidders.iter().filter_map(|b| b.amount).max();
        listing.detail.current_bid = current_bid;

        tracing::info!(%auction_id, %amount, "Recorded bid");

        Ok(responses::BidPlaced {
            message: "Bid placed.".to_string(),
            current_bid,
        })
    }
}
