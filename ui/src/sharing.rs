//! Share links for an auction and the share menu's state machine.

use payloads::{AuctionId, responses::UserProfile};
use std::rc::Rc;
use yew::Reducible;

use crate::utils::timer::Scheduler;

/// How long the "Link copied!" banner stays up.
pub const COPIED_BANNER_MS: u32 = 2000;

/// The link to hand out for an auction.
///
/// Bidders, and visitors whose profile isn't known, get the public item
/// page; auctioneers and admins get the details page.
pub fn auction_share_url(
    origin: &str,
    user: Option<&UserProfile>,
    auction_id: &AuctionId,
) -> String {
    let origin = origin.trim_end_matches('/');
    match user {
        Some(user) if !user.is_bidder() => {
            format!("{origin}/auction/details/{auction_id}")
        }
        _ => format!("{origin}/auction/item/{auction_id}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Twitter,
    Facebook,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] =
        [Self::WhatsApp, Self::Twitter, Self::Facebook];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
        }
    }

    pub fn link(&self, url: &str) -> String {
        let url = urlencoding::encode(url);
        match self {
            Self::WhatsApp => format!("https://wa.me/?text={url}"),
            Self::Twitter => {
                format!("https://twitter.com/intent/tweet?url={url}")
            }
            Self::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}")
            }
        }
    }
}

/// Fallback share menu plus the transient "copied" banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShareMenuState {
    pub menu_open: bool,
    pub copied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMenuAction {
    Toggle,
    Close,
    /// The link went to the clipboard: close the menu, raise the banner.
    LinkCopied,
    /// The banner timer fired.
    CopiedExpired,
}

impl ShareMenuState {
    pub fn apply(self, action: ShareMenuAction) -> Self {
        match action {
            ShareMenuAction::Toggle => Self {
                menu_open: !self.menu_open,
                ..self
            },
            ShareMenuAction::Close => Self {
                menu_open: false,
                ..self
            },
            ShareMenuAction::LinkCopied => Self {
                menu_open: false,
                copied: true,
            },
            ShareMenuAction::CopiedExpired => Self {
                copied: false,
                ..self
            },
        }
    }
}

impl Reducible for ShareMenuState {
    type Action = ShareMenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// The timer behind the "copied" banner.
///
/// At most one expiry is pending. Copying again replaces it, and dropping
/// the banner (or calling `cancel`) makes sure it never fires.
pub struct CopiedBanner<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> CopiedBanner<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Sends `LinkCopied` now and `CopiedExpired` once the banner is due to
    /// go, replacing any expiry already pending.
    pub fn link_copied(&mut self, dispatch: impl Fn(ShareMenuAction) + 'static) {
        dispatch(ShareMenuAction::LinkCopied);
        let expire = Box::new(move || dispatch(ShareMenuAction::CopiedExpired));
        self.pending = Some(self.scheduler.schedule(COPIED_BANNER_MS, expire));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
