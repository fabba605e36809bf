use yew::prelude::*;

#[function_component]
pub fn Spinner() -> Html {
    html! {
        <div class="w-full flex justify-center py-24" role="status">
            <div class="inline-block animate-spin rounded-full h-12 w-12 \
                        border-4 border-[#D6482B] border-t-transparent"></div>
        </div>
    }
}
