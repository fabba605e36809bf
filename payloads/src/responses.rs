use crate::{AuctionId, ImageRef, Role};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata for a single auction item.
///
/// Field names follow the backend's camelCase JSON. Fields the backend adds
/// that the client has no use for are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetail {
    #[serde(rename = "_id")]
    pub id: AuctionId,
    pub title: String,
    /// Sentence-delimited free text; each `". "` separated sentence is shown
    /// as its own bullet.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub condition: String,
    pub starting_bid: Decimal,
    #[serde(default)]
    pub current_bid: Option<Decimal>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl AuctionDetail {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.url.as_str())
    }
}

/// A participant in an auction, as listed by the backend.
///
/// The backend is expected to order bidders by amount, highest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bidder {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(alias = "userName")]
    pub username: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Response of the auction detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItemWithBidders {
    pub auction_item: AuctionDetail,
    #[serde(default)]
    pub bidders: Vec<Bidder>,
}

/// Response of the place-bid endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidPlaced {
    pub message: String,
    #[serde(default)]
    pub current_bid: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "userName")]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub profile_image: Option<ImageRef>,
}

impl UserProfile {
    pub fn is_bidder(&self) -> bool {
        self.role == Role::Bidder
    }
}

/// Response of the current-user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user: UserProfile,
}

/// Body of an unsuccessful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn auction_detail_from_backend_json() {
        let body = r#"{
            "success": true,
            "auctionItem": {
                "_id": "66a1f0c2b4d5e6f708192a3b",
                "title": "Vintage Camera",
                "description": "Fully working. Comes with a leather case. Lens cap missing.",
                "category": "Electronics",
                "condition": "Used",
                "startingBid": 1500,
                "currentBid": 2100,
                "image": { "public_id": "auction/cam", "url": "https://img.example/cam.jpg" },
                "startTime": "2025-01-01T10:00:00.000Z",
                "endTime": "2025-01-03T10:00:00.000Z",
                "createdBy": "66a1f0c2b4d5e6f708190000",
                "__v": 0
            },
            "bidders": [
                { "userId": "u1", "userName": "alice", "profileImage": "https://img.example/a.png", "amount": 2100 },
                { "username": "bob", "amount": 1800 }
            ]
        }"#;

        let parsed: AuctionItemWithBidders = serde_json::from_str(body).unwrap();
        let item = &parsed.auction_item;
        assert_eq!(item.id, AuctionId::from("66a1f0c2b4d5e6f708192a3b"));
        assert_eq!(item.starting_bid, dec!(1500));
        assert_eq!(item.current_bid, Some(dec!(2100)));
        assert_eq!(item.image_url(), Some("https://img.example/cam.jpg"));
        assert!(item.start_time < item.end_time);

        assert_eq!(parsed.bidders.len(), 2);
        assert_eq!(parsed.bidders[0].username, "alice");
        assert_eq!(parsed.bidders[1].username, "bob");
        assert_eq!(parsed.bidders[1].profile_image, None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let body = r#"{
            "auctionItem": {
                "_id": "a1",
                "title": "Chair",
                "condition": "New",
                "startingBid": "250.50",
                "startTime": "2025-01-01T10:00:00Z",
                "endTime": "2025-01-01T12:00:00Z"
            }
        }"#;

        let parsed: AuctionItemWithBidders = serde_json::from_str(body).unwrap();
        assert!(parsed.bidders.is_empty());
        assert_eq!(parsed.auction_item.description, "");
        assert_eq!(parsed.auction_item.starting_bid, dec!(250.50));
        assert_eq!(parsed.auction_item.image_url(), None);
    }

    #[test]
    fn super_admin_role_has_a_space() {
        let body = r#"{ "user": { "_id": "x", "userName": "root", "role": "Super Admin" } }"#;
        let parsed: CurrentUser = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.role, Role::SuperAdmin);
        assert!(!parsed.user.is_bidder());
    }
}
