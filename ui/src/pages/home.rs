use crate::{AuthState, State};
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::LoggedIn(profile) => html! {
            <div class="text-center space-y-4 py-24">
                <h1 class="text-3xl font-bold text-stone-900">
                    {format!("Welcome back, {}!", profile.username)}
                </h1>
                <p class="text-lg text-stone-600">
                    {"Open an auction link to see its bids."}
                </p>
            </div>
        },
        AuthState::LoggedOut => html! {
            <div class="text-center space-y-4 py-24">
                <h1 class="text-3xl font-bold text-stone-900">
                    {"Auction Platform"}
                </h1>
                <p class="text-lg text-stone-600">
                    {"Sign in to view auctions and place bids."}
                </p>
            </div>
        },
        AuthState::Unknown => html! {
            <div class="text-center space-y-4 py-24">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-stone-900"></div>
                <p class="text-stone-600">{"Checking authentication..."}</p>
            </div>
        },
    }
}
