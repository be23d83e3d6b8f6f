use crate::dataset::Dataset;
use crate::domain::criteria::{Criteria, RawCriteria};
use crate::errors::ServerError;
use crate::responses::payload::{SearchSuccess, StatusMessage};
use crate::responses::{json_response, ResultResp};
use crate::search::{search, SearchOutcome};
use astra::Request;

/// Everything a request handler may read. Constructed once at startup.
pub struct AppContext {
    pub dataset: Dataset,
}

impl AppContext {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    log::debug!("{method} {path} {}", req.uri().query().unwrap_or_default());

    match (method, path) {
        ("GET", "/listings") => listings(&req, ctx),
        _ => Err(ServerError::NotFound),
    }
}

fn listings(req: &Request, ctx: &AppContext) -> ResultResp {
    let raw = RawCriteria::from_query(req.uri().query());

    let criteria = Criteria::parse(raw).map_err(|e| {
        log::warn!("Rejected listing query: {e}");
        ServerError::from(e)
    })?;

    match search(&ctx.dataset, &criteria) {
        SearchOutcome::Matches(matches) => {
            json_response(200, &SearchSuccess::new(&criteria, &ctx.dataset, &matches))
        }
        SearchOutcome::NoResults => json_response(404, &StatusMessage::no_results()),
    }
}
