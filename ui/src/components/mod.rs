pub mod bid_form;
pub mod bidders_list;
pub mod breadcrumbs;
pub mod share_menu;
pub mod spinner;
pub mod toast_container;

pub use bid_form::BidForm;
pub use bidders_list::BiddersList;
pub use breadcrumbs::Breadcrumbs;
pub use share_menu::ShareMenu;
pub use spinner::Spinner;
pub use toast_container::ToastContainer;
