use yew::prelude::*;

use crate::contexts::toast::{ToastContext, ToastKind, use_toast};

#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };
    let toast_handle = use_toast();

    if context.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for context.toasts.iter().map(|toast| {
                let (colour_class, icon) = match toast.kind {
                    ToastKind::Success => {
                        ("bg-green-50 border-green-200 text-green-700", "✓")
                    }
                    ToastKind::Error => {
                        ("bg-red-50 border-red-200 text-red-700", "✕")
                    }
                };
                let on_close = {
                    let toast_id = toast.id;
                    let toast_handle = toast_handle.clone();
                    Callback::from(move |_: MouseEvent| {
                        toast_handle.dismiss(toast_id)
                    })
                };

                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!(
                            "p-4", "rounded-lg", "border", "shadow-lg",
                            colour_class
                        )}
                    >
                        <div class="flex items-start space-x-3">
                            <span class="text-sm font-medium">{icon}</span>
                            <p class="flex-1 text-sm font-medium leading-5">
                                {&toast.message}
                            </p>
                            <button
                                onclick={on_close}
                                class="text-neutral-400 hover:text-neutral-600"
                                title="Dismiss"
                            >
                                {"×"}
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
