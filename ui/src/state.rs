use payloads::{AuctionId, responses};
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::UserProfile),
}

/// The auction item currently being viewed and its bidders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuctionSlice {
    pub loading: bool,
    pub auction_detail: Option<responses::AuctionDetail>,
    /// In the order the backend sent them.
    pub auction_bidders: Vec<responses::Bidder>,
    pub error: Option<String>,
    /// The auction asked for last. Replies for any other id are stale.
    pub requested_id: Option<AuctionId>,
}

impl AuctionSlice {
    /// The loaded detail, if it belongs to the given auction.
    pub fn detail_for(
        &self,
        auction_id: &AuctionId,
    ) -> Option<&responses::AuctionDetail> {
        self.auction_detail
            .as_ref()
            .filter(|detail| &detail.id == auction_id)
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Auction item (managed by use_auction_detail) ===
    pub auction: AuctionSlice,
}

impl State {
    pub fn current_user(&self) -> Option<&responses::UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn begin_auction_fetch(&mut self, auction_id: AuctionId) {
        self.auction.loading = true;
        self.auction.error = None;
        self.auction.requested_id = Some(auction_id);
    }

    /// Whether a reply for `auction_id` answers the latest request.
    fn is_current_request(&self, auction_id: &AuctionId) -> bool {
        self.auction
            .requested_id
            .as_ref()
            .is_none_or(|requested| requested == auction_id)
    }

    pub fn set_auction_detail(
        &mut self,
        fetched: responses::AuctionItemWithBidders,
    ) {
        let auction_id = &fetched.auction_item.id;
        if !self.is_current_request(auction_id) {
            tracing::debug!(%auction_id, "Dropping stale auction reply");
            return;
        }
        self.auction.auction_detail = Some(fetched.auction_item);
        self.auction.auction_bidders = fetched.bidders;
        self.auction.loading = false;
    }

    pub fn fail_auction_fetch(
        &mut self,
        auction_id: &AuctionId,
        message: String,
    ) {
        if !self.is_current_request(auction_id) {
            tracing::debug!(%auction_id, "Dropping stale auction error");
            return;
        }
        self.auction.loading = false;
        self.auction.error = Some(message);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.auction = AuctionSlice::default();
    }
}
