mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ok_body, ok_empty};

use serde::{Deserialize, Serialize};
use std::{convert::Infallible, str::FromStr};

/// Identifier of an auction item, as issued by the backend.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct AuctionId(pub String);

impl FromStr for AuctionId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for AuctionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Role a user holds on the auction site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Auctioneer,
    Bidder,
    #[serde(rename = "Super Admin")]
    SuperAdmin,
}

/// Hosted image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub public_id: Option<String>,
    pub url: String,
}
