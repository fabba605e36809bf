use crate::{AuctionId, requests, responses};
use reqwest::StatusCode;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the auction backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post_form(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.get("health_check").await?;
        ok_empty(response).await
    }

    /// Get an auction item together with its bidders.
    pub async fn get_auction_detail(
        &self,
        auction_id: &AuctionId,
    ) -> Result<responses::AuctionItemWithBidders, ClientError> {
        let response =
            self.get(&format!("auctionitem/auction/{auction_id}")).await?;
        ok_body(response).await
    }

    /// Place a bid, sent as a multipart form with an `amount` field.
    pub async fn place_bid(
        &self,
        auction_id: &AuctionId,
        details: &requests::PlaceBid,
    ) -> Result<responses::BidPlaced, ClientError> {
        let response = self
            .post_form(&format!("bid/place/{auction_id}"), details.to_form())
            .await?;
        ok_body(response).await
    }

    /// Get the signed-in user's profile, or None if nobody is signed in.
    pub async fn current_user(
        &self,
    ) -> Result<Option<responses::UserProfile>, ClientError> {
        let response = self.get("user/me").await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Ok(None),
            _ => {
                let body: responses::CurrentUser = ok_body(response).await?;
                Ok(Some(body.user))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the backend's message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

/// The backend reports failures as `{ "message": ... }`; anything else is
/// passed through as raw text.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return ClientError::Network(e),
    };
    let message = serde_json::from_str::<responses::ErrorMessage>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    ClientError::APIError(status, message)
}
