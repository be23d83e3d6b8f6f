pub mod client;
pub mod form;
pub mod notice;
pub mod router;
pub mod view;

pub use client::{ApiClient, ApiOutcome, Failure, Method};
pub use router::{handle, FrontendContext};
