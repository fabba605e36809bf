use jiff::{Timestamp, ToSpan};
use payloads::{AuctionId, requests};
use reqwest::StatusCode;
use rust_decimal::dec;

use test_helpers::{TestApp, assert_status_code, mock, spawn_app};

async fn app_with_active_auction() -> anyhow::Result<(TestApp, AuctionId)> {
    let app = spawn_app().await?;
    let now = Timestamp::now();
    let detail = mock::auction_detail("clock", now - 1.hour(), now + 1.hour());
    let id = detail.id.clone();
    app.store
        .insert_auction(detail, mock::bidders(&[("alice", 500), ("bob", 300)]));
    app.store.sign_in(mock::bidder_profile("carol"));
    Ok((app, id))
}

#[tokio::test]
async fn place_bid_then_refetch_shows_new_ranking() -> anyhow::Result<()> {
    let (app, id) = app_with_active_auction().await?;

    let placed = app
        .client
        .place_bid(&id, &requests::PlaceBid::new("420"))
        .await?;
    assert_eq!(placed.message, "Bid placed.");
    assert_eq!(placed.current_bid, Some(dec!(500)));

    let fetched = app.client.get_auction_detail(&id).await?;
    let names: Vec<_> =
        fetched.bidders.iter().map(|b| b.username.as_str()).collect();
    assert_eq!(names, ["alice", "carol", "bob"]);

    Ok(())
}

#[tokio::test]
async fn amount_travels_as_typed() -> anyhow::Result<()> {
    let (app, id) = app_with_active_auction().await?;

    app.client
        .place_bid(&id, &requests::PlaceBid::new("1250.75"))
        .await?;

    let fetched = app.client.get_auction_detail(&id).await?;
    assert_eq!(fetched.bidders[0].username, "carol");
    assert_eq!(fetched.bidders[0].amount, Some(dec!(1250.75)));
    assert_eq!(fetched.auction_item.current_bid, Some(dec!(1250.75)));

    Ok(())
}

#[tokio::test]
async fn rejected_bid_carries_backend_message() -> anyhow::Result<()> {
    let (app, id) = app_with_active_auction().await?;

    let result = app
        .client
        .place_bid(&id, &requests::PlaceBid::new("not a number"))
        .await;

    match result {
        Err(payloads::ClientError::APIError(code, message)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(message, "Please enter a valid bid amount.");
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn bid_on_ended_auction_is_refused() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let now = Timestamp::now();
    let detail =
        mock::auction_detail("gone", now - 3.hours(), now - 1.hour());
    let id = detail.id.clone();
    app.store.insert_auction(detail, Vec::new());
    app.store.sign_in(mock::bidder_profile("carol"));

    assert_status_code(
        app.client.place_bid(&id, &requests::PlaceBid::new("10")).await,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}

#[tokio::test]
async fn signed_out_bid_is_unauthorized() -> anyhow::Result<()> {
    let (app, id) = app_with_active_auction().await?;
    app.store.sign_out();

    assert_status_code(
        app.client.place_bid(&id, &requests::PlaceBid::new("900")).await,
        StatusCode::UNAUTHORIZED,
    );

    Ok(())
}
