use payloads::AuctionId;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, contexts::use_toast, get_api_client};

/// Returns the action that loads an auction item and its bidders into the
/// store.
///
/// `loading` is raised before the request goes out and cleared when the
/// latest request settles; replies for an auction asked for earlier are
/// dropped. A failure keeps whatever detail was loaded before and is
/// reported as a toast.
#[hook]
pub fn use_auction_detail() -> Callback<AuctionId> {
    let dispatch = use_dispatch::<State>();
    let toast = use_toast();

    use_callback((), move |auction_id: AuctionId, _| {
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        dispatch.reduce_mut(|state| {
            state.begin_auction_fetch(auction_id.clone());
        });

        yew::platform::spawn_local(async move {
            let api_client = get_api_client();
            match api_client.get_auction_detail(&auction_id).await {
                Ok(fetched) => {
                    tracing::debug!(
                        %auction_id,
                        bidders = fetched.bidders.len(),
                        "Loaded auction"
                    );
                    dispatch.reduce_mut(|state| {
                        state.set_auction_detail(fetched);
                    });
                }
                Err(e) => {
                    tracing::error!(%auction_id, "Error loading auction: {e}");
                    toast.error(e.to_string());
                    dispatch.reduce_mut(|state| {
                        state.fail_auction_fetch(&auction_id, e.to_string());
                    });
                }
            }
        });
    })
}
