pub mod auction_item;
pub mod home;
pub mod not_found;

pub use auction_item::AuctionItemPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
