use jiff::Timestamp;
use payloads::{AuctionId, requests, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    AuthState, Route, State,
    components::{BidForm, BiddersList, Breadcrumbs, ShareMenu, Spinner},
    hooks::{use_auction_detail, use_place_bid, use_push_route},
    sharing::auction_share_url,
    state::AuctionSlice,
    utils::{
        browser::current_origin,
        description_points,
        ranking::{RankedBidder, standings},
        time::{AuctionPhase, format_zoned_timestamp, localize_timestamp},
    },
};

const NOT_STARTED_IMAGE: &str = "/notStarted.png";
const ENDED_IMAGE: &str = "/auctionEnded.png";

/// What happens when the page mounts or its auction changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPlan {
    pub redirect_home: bool,
    pub fetch: Option<AuctionId>,
}

/// Signed-out visitors go home. Everyone else loads the auction, including
/// while the session check is still in flight.
pub fn mount_plan(auth_state: &AuthState, auction_id: &AuctionId) -> MountPlan {
    match auth_state {
        AuthState::LoggedOut => MountPlan {
            redirect_home: true,
            fetch: None,
        },
        AuthState::Unknown | AuthState::LoggedIn(_) => MountPlan {
            redirect_home: false,
            fetch: Some(auction_id.clone()),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView<'a> {
    pub detail: &'a responses::AuctionDetail,
    pub phase: AuctionPhase,
    pub standings: Vec<RankedBidder>,
    pub description: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemBody<'a> {
    Loading,
    Failed(&'a str),
    Ready(ItemView<'a>),
}

/// Decide what the page shows for the store's auction slice at `now`.
///
/// A detail belonging to another auction is treated as still loading so a
/// previous item never flashes up under a new id.
pub fn item_body<'a>(
    slice: &'a AuctionSlice,
    auction_id: &AuctionId,
    now: Timestamp,
) -> ItemBody<'a> {
    if slice.loading {
        return ItemBody::Loading;
    }

    match slice.detail_for(auction_id) {
        Some(detail) => ItemBody::Ready(ItemView {
            detail,
            phase: AuctionPhase::at(detail.start_time, detail.end_time, now),
            standings: standings(&slice.auction_bidders),
            description: description_points(&detail.description),
        }),
        None => match &slice.error {
            Some(message) => ItemBody::Failed(message),
            None => ItemBody::Loading,
        },
    }
}

impl ItemBody<'_> {
    /// Last breadcrumb: the item's title once it has loaded.
    pub fn breadcrumb(&self) -> Option<&str> {
        match self {
            Self::Ready(view) => Some(&view.detail.title),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BidsBody<'a> {
    Standings(&'a [RankedBidder]),
    NoBids,
    Image {
        src: &'static str,
        alt: &'static str,
    },
}

impl ItemView<'_> {
    pub fn bids_body(&self) -> BidsBody<'_> {
        match self.phase {
            AuctionPhase::Active if self.standings.is_empty() => BidsBody::NoBids,
            AuctionPhase::Active => BidsBody::Standings(&self.standings),
            AuctionPhase::NotStarted => BidsBody::Image {
                src: NOT_STARTED_IMAGE,
                alt: "not-started",
            },
            AuctionPhase::Ended => BidsBody::Image {
                src: ENDED_IMAGE,
                alt: "ended",
            },
        }
    }

    /// `None` means the bid form is shown.
    pub fn closed_message(&self) -> Option<&'static str> {
        match self.phase {
            AuctionPhase::Active => None,
            AuctionPhase::NotStarted => Some("Auction has not started yet!"),
            AuctionPhase::Ended => Some("Auction has ended!"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AuctionId,
}

#[function_component]
pub fn AuctionItemPage(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let load_auction = use_auction_detail();
    let place_bid = use_place_bid();
    let push_route = use_push_route();

    // Re-run when the auction changes or the visitor turns out signed out.
    // The session check settling on signed in shouldn't trigger a refetch.
    {
        let auth_state = state.auth_state.clone();
        let load_auction = load_auction.clone();
        let logged_out = matches!(auth_state, AuthState::LoggedOut);
        use_effect_with((logged_out, props.id.clone()), move |(_, id)| {
            let plan = mount_plan(&auth_state, id);
            if plan.redirect_home {
                push_route.emit(Route::Home);
            }
            if let Some(id) = plan.fetch {
                load_auction.emit(id);
            }
        });
    }

    let on_bid = {
        let id = props.id.clone();
        let load_auction = load_auction.clone();
        Callback::from(move |amount: String| {
            place_bid.emit((id.clone(), requests::PlaceBid::new(amount)));
            load_auction.emit(id.clone());
        })
    };

    let now = Timestamp::now();
    let body = item_body(&state.auction, &props.id, now);
    let current = body
        .breadcrumb()
        .map(|title| AttrValue::from(title.to_string()));

    let content = match body {
        ItemBody::Loading => html! { <Spinner /> },
        ItemBody::Failed(message) => html! {
            <p class="text-red-600 py-8">{message}</p>
        },
        ItemBody::Ready(view) => {
            let share_url = auction_share_url(
                &current_origin(),
                state.current_user(),
                &props.id,
            );
            item_layout(&view, share_url, on_bid)
        }
    };

    html! {
        <section class="w-full ml-0 m-0 h-fit px-5 pt-20 lg:pl-[320px] \
                        flex flex-col">
            <Breadcrumbs {current} />
            {content}
        </section>
    }
}

fn item_layout(
    view: &ItemView<'_>,
    share_url: String,
    on_bid: Callback<String>,
) -> Html {
    let detail = view.detail;

    let bids = match view.bids_body() {
        BidsBody::Standings(entries) => html! {
            <BiddersList standings={entries.to_vec()} />
        },
        BidsBody::NoBids => html! { <BiddersList standings={Vec::new()} /> },
        BidsBody::Image { src, alt } => html! {
            <img src={src} alt={alt} class="w-full max-h-[650px]" />
        },
    };

    let footer = match view.closed_message() {
        None => html! { <BidForm on_submit={on_bid} /> },
        Some(message) => html! {
            <p class="text-white font-semibold text-xl">{message}</p>
        },
    };

    html! {
        <div class="flex gap-4 flex-col 2xl:flex-row">
            <div class="flex-1 flex flex-col gap-3">
                <div class="flex gap-4 flex-col lg:flex-row">
                    <div class="bg-white py-4 px-2 rounded-md w-full \
                                lg:w-40 lg:h-40 flex justify-center \
                                items-center">
                        {if let Some(url) = detail.image_url() {
                            html! {
                                <img
                                    src={url.to_string()}
                                    alt={detail.title.clone()}
                                />
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                    <div class="flex flex-col justify-around pb-4">
                        <h3 class="text-[#111] text-xl font-semibold \
                                   mb-2 min-[480px]:text-xl md:text-2xl \
                                   lg:text-3xl">
                            {&detail.title}
                        </h3>
                        <p class="text-xl font-semibold">
                            {"Condition: "}
                            <span class="text-[#D6482B]">
                                {&detail.condition}
                            </span>
                        </p>
                        <p class="text-xl font-semibold">
                            {"Minimum Bid: "}
                            <span class="text-[#D6482B]">
                                {format!("Rs.{}", detail.starting_bid)}
                            </span>
                        </p>
                        {if let Some(current_bid) = detail.current_bid {
                            html! {
                                <p class="text-xl font-semibold">
                                    {"Current Bid: "}
                                    <span class="text-[#D6482B]">
                                        {format!("Rs.{current_bid}")}
                                    </span>
                                </p>
                            }
                        } else {
                            html! {}
                        }}
                        <p class="text-sm text-stone-600">
                            {"Starts: "}
                            {format_zoned_timestamp(&localize_timestamp(
                                detail.start_time
                            ))}
                        </p>
                        <p class="text-sm text-stone-600">
                            {"Ends: "}
                            {format_zoned_timestamp(&localize_timestamp(
                                detail.end_time
                            ))}
                        </p>
                    </div>
                </div>
                <p class="text-xl w-fit font-bold">
                    {"Auction Item Description"}
                </p>
                <hr class="my-2 border-t-[1px] border-t-stone-700" />
                <ul>
                    {for view.description.iter().map(|point| html! {
                        <li class="text-[18px] my-2">{*point}</li>
                    })}
                </ul>
            </div>
            <div class="flex-1">
                <header class="bg-stone-200 py-4 text-[24px] \
                               font-semibold px-4 flex justify-between \
                               items-center relative">
                    {"BIDS"}
                    <ShareMenu
                        title={AttrValue::from(detail.title.clone())}
                        url={AttrValue::from(share_url)}
                    />
                </header>
                <div class="bg-white px-4 min-h-fit lg:min-h-[650px]">
                    {bids}
                </div>
                <div class="bg-[#D6482B] py-4 text-[28px] font-semibold \
                            px-4 flex items-center justify-between">
                    {footer}
                </div>
            </div>
        </div>
    }
}
