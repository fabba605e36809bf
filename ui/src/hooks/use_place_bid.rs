use payloads::{AuctionId, requests};
use yew::prelude::*;

use crate::{contexts::use_toast, get_api_client};

/// Returns the action that submits a bid.
///
/// The outcome is reported as a toast; nothing is awaited by the caller.
#[hook]
pub fn use_place_bid() -> Callback<(AuctionId, requests::PlaceBid)> {
    let toast = use_toast();

    use_callback((), move |(auction_id, bid): (AuctionId, requests::PlaceBid), _| {
        let toast = toast.clone();

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            match api_client.place_bid(&auction_id, &bid).await {
                Ok(placed) => {
                    tracing::info!(%auction_id, amount = %bid.amount, "Bid placed");
                    toast.success(placed.message);
                }
                Err(e) => {
                    tracing::error!(%auction_id, "Error placing bid: {e}");
                    toast.error(e.to_string());
                }
            }
        });
    })
}
