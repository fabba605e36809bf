mod auction;
mod bid;
mod login;

use test_helpers::spawn_app;

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    app.client.health_check().await?;

    Ok(())
}

#[tokio::test]
async fn any_origin_may_call_with_credentials() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let origin = "http://localhost:8080";

    let response = app
        .client
        .inner_client
        .get(format!("{}/api/v1/health_check", app.client.address))
        .header("Origin", origin)
        .send()
        .await?;

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some(origin)
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|value| value.to_str().ok()),
        Some("true")
    );

    Ok(())
}
