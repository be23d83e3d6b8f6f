pub mod criteria;
pub mod listing;
