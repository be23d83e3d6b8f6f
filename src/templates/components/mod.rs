pub mod error;
pub mod notice;
pub mod search_form;
pub mod table;

pub use error::html_error_response;
pub use notice::notice;
pub use search_form::search_form;
pub use table::listing_table;
