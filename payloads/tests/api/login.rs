use payloads::Role;

use test_helpers::{mock, spawn_app};

#[tokio::test]
async fn signed_out_user_is_none() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let user = app.client.current_user().await?;
    assert!(user.is_none());

    Ok(())
}

#[tokio::test]
async fn signed_in_profile_is_returned() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    app.store.sign_in(mock::auctioneer_profile("dora"));

    let user = app.client.current_user().await?.expect("profile");
    assert_eq!(user.username, "dora");
    assert_eq!(user.role, Role::Auctioneer);
    assert!(!user.is_bidder());

    Ok(())
}
