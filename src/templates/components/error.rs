use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into an HTML error page
pub fn html_error_response(err: ServerError) -> Response {
    render_error(err.status(), &err.to_string())
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let html = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
            }
            body style="font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem;" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to search" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
