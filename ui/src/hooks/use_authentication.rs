use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Hook to automatically check authentication status on startup
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.current_user().await {
                    Ok(Some(profile)) => {
                        tracing::debug!(
                            username = %profile.username,
                            "Session is signed in"
                        );
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(profile);
                        });
                    }
                    Ok(None) => {
                        dispatch.reduce_mut(|state| state.logout());
                    }
                    Err(e) => {
                        // Network error or other issue, assume logged out
                        tracing::warn!("Couldn't check session: {e}");
                        dispatch.reduce_mut(|state| state.logout());
                    }
                }
            });
        }
    });
}
