use payloads::{APIClient, AuctionId};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod sharing;
mod state;
#[cfg(test)]
mod test_fixtures;
mod utils;

use components::ToastContainer;
use contexts::ToastProvider;
use hooks::use_authentication;
use pages::{AuctionItemPage, HomePage, NotFoundPage};

pub use logs::init_logging;
pub use state::{AuthState, State};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(utils::browser::current_origin);

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <AppContent />
            </BrowserRouter>
            <ToastContainer />
        </ToastProvider>
    }
}

#[function_component]
fn AppContent() -> Html {
    use_authentication();

    html! {
        <div class="min-h-screen bg-stone-100 text-stone-900">
            <Switch<Route> render={switch} />
        </div>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auctions")]
    Auctions,
    #[at("/auction/item/:id")]
    AuctionItem { id: AuctionId },
    #[at("/auction/details/:id")]
    AuctionDetails { id: AuctionId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        // There is no auction listing yet.
        Route::Auctions => html! { <Redirect<Route> to={Route::Home} /> },
        Route::AuctionItem { id } | Route::AuctionDetails { id } => html! {
            <AuctionItemPage {id} />
        },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}
