use yew::prelude::*;

use crate::{
    hooks::use_share_menu,
    sharing::ShareTarget,
    utils::browser::{copy_to_clipboard, native_share_available, share_natively},
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub url: AttrValue,
}

/// Share button for the bids header.
///
/// Uses the native share sheet when the browser has one, otherwise toggles
/// a menu with a copy-link entry and social links.
#[function_component]
pub fn ShareMenu(props: &Props) -> Html {
    let menu = use_share_menu();
    let native = native_share_available();

    let on_share = {
        let toggle = menu.toggle.clone();
        let title = props.title.clone();
        let url = props.url.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if native {
                share_natively(&title, &url);
            } else {
                toggle.emit(());
            }
        })
    };

    let on_copy = {
        let link_copied = menu.link_copied.clone();
        let url = props.url.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            copy_to_clipboard(&url);
            link_copied.emit(());
        })
    };

    let on_backdrop_click = {
        let close = menu.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <>
            <button
                onclick={on_share}
                class="p-2 bg-white rounded-full shadow-md hover:bg-gray-100 \
                       transition-colors"
                title="Share this auction"
                aria-label="Share this auction"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-5 w-5 text-gray-600"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                >
                    <circle cx="18" cy="5" r="3" />
                    <circle cx="6" cy="12" r="3" />
                    <circle cx="18" cy="19" r="3" />
                    <line x1="8.59" y1="13.51" x2="15.42" y2="17.49" />
                    <line x1="15.41" y1="6.51" x2="8.59" y2="10.49" />
                </svg>
            </button>

            if menu.state.copied {
                <span class="absolute top-16 right-4 bg-green-500 text-white \
                             text-xs px-2 py-1 rounded">
                    {"Link copied!"}
                </span>
            }

            if menu.state.menu_open && !native {
                // Backdrop to catch clicks outside menu
                <div onclick={on_backdrop_click} class="fixed inset-0 z-0" />
                <div class="absolute top-16 right-4 bg-white shadow-lg \
                            rounded-lg p-2 z-10 text-base font-normal">
                    <button
                        onclick={on_copy}
                        class="flex items-center gap-2 px-2 py-1 \
                               hover:bg-gray-100 w-full text-left"
                    >
                        {"✉ Copy Link"}
                    </button>
                    {for ShareTarget::ALL.iter().map(|target| html! {
                        <a
                            key={target.label()}
                            href={target.link(&props.url)}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-2 py-1 \
                                   hover:bg-gray-100 w-full"
                        >
                            {target.label()}
                        </a>
                    })}
                </div>
            }
        </>
    }
}
