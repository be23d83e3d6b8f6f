use crate::errors::ServerError;
use crate::frontend::client::{ApiClient, Method};
use crate::frontend::form::SearchForm;
use crate::frontend::view::ResultsView;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use astra::Request;

pub const LISTINGS_ENDPOINT: &str = "listings";

pub struct FrontendContext {
    pub api: ApiClient,
}

pub fn handle(req: Request, ctx: &FrontendContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    log::debug!("{method} {path} {}", req.uri().query().unwrap_or_default());

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::search_page(&SearchForm::default(), None)),
        ("GET", "/search") => {
            let form = SearchForm::from_query(req.uri().query());
            let results = search_listings(&ctx.api, &form);
            html_response(templates::pages::search_page(&form, Some(&results)))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// One backend round trip per submitted form.
pub fn search_listings(api: &ApiClient, form: &SearchForm) -> ResultsView {
    let params = form.to_params();
    let outcome = api.request(LISTINGS_ENDPOINT, Method::Get, &params, None);
    ResultsView::from_outcome(outcome)
}
