use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `payload` as the JSON body of a response with `status`.
pub fn json_response<T: Serialize>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_vec(payload).map_err(|e| {
        log::error!("Failed to serialize response: {e}");
        ServerError::InternalError
    })?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
