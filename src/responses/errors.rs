use crate::errors::ServerError;
use crate::responses::json::json_response;
use crate::responses::payload::StatusMessage;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into a JSON error response
pub fn error_to_response(err: ServerError) -> Response {
    json_response(err.status(), &StatusMessage::error(err.to_string())).unwrap_or_else(|_| {
        ResponseBuilder::new()
            .status(500)
            .body(Body::from("Internal Server Error"))
            .unwrap_or_else(|_| Response::new(Body::empty()))
    })
}
