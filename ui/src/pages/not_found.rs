use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center space-y-4 py-24">
            <h1 class="text-4xl font-bold text-stone-900">{"404"}</h1>
            <p class="text-stone-600">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="font-semibold text-[#D6482B]">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
