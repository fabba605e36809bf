use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Receives the amount exactly as typed.
    pub on_submit: Callback<String>,
}

#[function_component]
pub fn BidForm(props: &Props) -> Html {
    let amount = use_state(String::new);

    let on_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_click = {
        let amount = amount.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            on_submit.emit((*amount).clone());
        })
    };

    html! {
        <>
            <div class="flex gap-3 flex-col sm:flex-row sm:items-center">
                <label for="bid-amount" class="text-white">{"Place Bid"}</label>
                <input
                    id="bid-amount"
                    type="number"
                    class="w-32 focus:outline-none md:text-[20px] p-1"
                    value={(*amount).clone()}
                    oninput={on_input}
                />
            </div>
            <button
                class="p-4 text-white bg-black rounded-full transition-all \
                       duration-300 hover:bg-[#222]"
                onclick={on_click}
                title="Place bid"
            >
                {"🔨"}
            </button>
        </>
    }
}
