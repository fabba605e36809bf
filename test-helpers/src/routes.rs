use actix_multipart::form::{MultipartForm, text::Text};
use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, post, web,
};
use jiff::Timestamp;
use payloads::{AuctionId, responses};

use crate::store::{FakeStore, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api/v1")
        .service(health_check)
        .service(current_user)
        .service(get_auction_detail)
        .service(place_bid)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[tracing::instrument(skip(store), ret)]
#[get("/user/me")]
pub async fn current_user(
    store: web::Data<FakeStore>,
) -> Result<HttpResponse, APIError> {
    let user = store.current_user()?;
    Ok(HttpResponse::Ok().json(responses::CurrentUser { user }))
}

#[tracing::instrument(skip(store), ret)]
#[get("/auctionitem/auction/{auction_id}")]
pub async fn get_auction_detail(
    auction_id: web::Path<String>,
    store: web::Data<FakeStore>,
) -> Result<HttpResponse, APIError> {
    let auction = store.read_auction(&AuctionId(auction_id.into_inner()))?;
    Ok(HttpResponse::Ok().json(auction))
}

#[derive(Debug, MultipartForm)]
pub struct BidForm {
    amount: Text<String>,
}

#[tracing::instrument(skip(store, form), fields(amount = %form.amount.0))]
#[post("/bid/place/{auction_id}")]
pub async fn place_bid(
    auction_id: web::Path<String>,
    form: MultipartForm<BidForm>,
    store: web::Data<FakeStore>,
) -> Result<HttpResponse, APIError> {
    let placed = store.place_bid(
        &AuctionId(auction_id.into_inner()),
        &form.amount.0,
        Timestamp::now(),
    )?;
    Ok(HttpResponse::Ok().json(placed))
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("{0}")]
    AuthError(#[source] StoreError),
    #[error("{0}")]
    BadRequest(#[source] StoreError),
    #[error("{0}")]
    NotFound(#[source] StoreError),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = responses::ErrorMessage {
            message: self.to_string(),
        };
        match self {
            Self::AuthError(_) => HttpResponse::Unauthorized().json(body),
            Self::BadRequest(_) => HttpResponse::BadRequest().json(body),
            Self::NotFound(_) => HttpResponse::NotFound().json(body),
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotSignedIn => APIError::AuthError(e),
            StoreError::AuctionNotFound => APIError::NotFound(e),
            StoreError::AuctionNotStarted
            | StoreError::AuctionEnded
            | StoreError::InvalidAmount => APIError::BadRequest(e),
        }
    }
}
