use yew::prelude::*;

use crate::{
    sharing::{CopiedBanner, ShareMenuAction, ShareMenuState},
    utils::timer::BrowserTimers,
};

pub struct ShareMenuHandle {
    pub state: ShareMenuState,
    pub toggle: Callback<()>,
    pub close: Callback<()>,
    /// Closes the menu and shows the "copied" banner for a while.
    pub link_copied: Callback<()>,
}

/// Share menu state with the timer that hides the "copied" banner.
///
/// Copying again restarts the timer, and unmounting cancels it.
#[hook]
pub fn use_share_menu() -> ShareMenuHandle {
    let state = use_reducer(ShareMenuState::default);
    let banner = use_mut_ref(|| CopiedBanner::new(BrowserTimers));

    {
        let banner = banner.clone();
        use_effect_with((), move |_| {
            move || banner.borrow_mut().cancel()
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ShareMenuAction::Toggle))
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(ShareMenuAction::Close))
    };

    let link_copied = {
        let state = state.clone();
        Callback::from(move |_| {
            let state = state.clone();
            banner
                .borrow_mut()
                .link_copied(move |action| state.dispatch(action));
        })
    };

    ShareMenuHandle {
        state: *state,
        toggle,
        close,
        link_copied,
    }
}
