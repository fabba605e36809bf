use jiff::{Timestamp, ToSpan};
use payloads::AuctionId;
use reqwest::StatusCode;
use rust_decimal::dec;

use test_helpers::{assert_status_code, mock, spawn_app};

#[tokio::test]
async fn auction_detail_includes_bidders_in_backend_order() -> anyhow::Result<()>
{
    let app = spawn_app().await?;
    let now = Timestamp::now();
    let detail = mock::auction_detail("lamp", now - 1.hour(), now + 1.hour());
    app.store.insert_auction(
        detail.clone(),
        mock::bidders(&[("alice", 400), ("bob", 350), ("carol", 120)]),
    );

    let fetched = app.client.get_auction_detail(&detail.id).await?;

    assert_eq!(fetched.auction_item, detail);
    let names: Vec<_> =
        fetched.bidders.iter().map(|b| b.username.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
    assert_eq!(fetched.bidders[0].amount, Some(dec!(400)));

    Ok(())
}

#[tokio::test]
async fn auction_without_bidders() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let now = Timestamp::now();
    let detail = mock::auction_detail("vase", now + 1.hour(), now + 2.hours());
    app.store.insert_auction(detail.clone(), Vec::new());

    let fetched = app.client.get_auction_detail(&detail.id).await?;

    assert!(fetched.bidders.is_empty());
    assert_eq!(fetched.auction_item.start_time, detail.start_time);

    Ok(())
}

#[tokio::test]
async fn unknown_auction_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let result = app
        .client
        .get_auction_detail(&AuctionId::from("does-not-exist"))
        .await;

    match result {
        Err(payloads::ClientError::APIError(code, message)) => {
            assert_eq!(code, StatusCode::NOT_FOUND);
            assert_eq!(message, "Auction not found.");
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn detail_status_code_surfaces_through_helper() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    assert_status_code(
        app.client.get_auction_detail(&AuctionId::from("missing")).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}
