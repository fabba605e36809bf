use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub current: Option<AttrValue>,
}

/// `Home > Auctions > <current>`
#[function_component]
pub fn Breadcrumbs(props: &Props) -> Html {
    let link_class = "font-semibold transition-all duration-300 \
                      hover:text-[#D6482B]";

    html! {
        <nav class="text-[16px] flex flex-wrap gap-2 items-center">
            <Link<Route> to={Route::Home} classes={link_class}>
                {"Home"}
            </Link<Route>>
            <span class="text-stone-400">{">"}</span>
            <Link<Route> to={Route::Auctions} classes={link_class}>
                {"Auctions"}
            </Link<Route>>
            <span class="text-stone-400">{">"}</span>
            <p class="text-stone-600">
                {props.current.clone().unwrap_or_default()}
            </p>
        </nav>
    }
}
