//! Thin wrappers over the browser APIs the auction page touches.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::FALLBACK_ORIGIN;

/// `window.location.origin`, or the fallback origin outside a browser page.
pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

/// `navigator.share`, if this browser has the Web Share API.
fn native_share_fn() -> Option<(web_sys::Navigator, Function)> {
    let navigator = web_sys::window()?.navigator();
    let share = Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((navigator, share))
}

pub fn native_share_available() -> bool {
    native_share_fn().is_some()
}

/// Open the native share sheet. Failures, including the user dismissing
/// the sheet, are logged and otherwise ignored.
pub fn share_natively(title: &str, url: &str) {
    let Some((navigator, share)) = native_share_fn() else {
        tracing::warn!("Native sharing is unavailable");
        return;
    };

    let data = Object::new();
    let title = JsValue::from_str(title);
    let url = JsValue::from_str(url);
    if Reflect::set(&data, &JsValue::from_str("title"), &title).is_err()
        || Reflect::set(&data, &JsValue::from_str("url"), &url).is_err()
    {
        tracing::warn!("Share failed: couldn't build share data");
        return;
    }

    let promise = match share.call1(&navigator, &data) {
        Ok(result) => match result.dyn_into::<Promise>() {
            Ok(promise) => promise,
            Err(_) => return,
        },
        Err(err) => {
            tracing::warn!("Share failed: {err:?}");
            return;
        }
    };

    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            tracing::warn!("Share failed: {err:?}");
        }
    });
}

/// Copy text to the system clipboard, logging failures.
pub fn copy_to_clipboard(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    let promise = clipboard.write_text(text);
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            tracing::warn!("Copy to clipboard failed: {err:?}");
        }
    });
}
