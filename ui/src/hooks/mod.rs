pub mod use_auction_detail;
pub mod use_authentication;
pub mod use_place_bid;
pub mod use_push_route;
pub mod use_share_menu;

pub use use_auction_detail::use_auction_detail;
pub use use_authentication::use_authentication;
pub use use_place_bid::use_place_bid;
pub use use_push_route::use_push_route;
pub use use_share_menu::use_share_menu;
