use serde::Deserialize;
use serde_json::{Map, Value};

use crate::frontend::client::{ApiOutcome, Failure};
use crate::frontend::notice::Notice;

#[derive(Debug, Deserialize)]
struct SuccessBody {
    results: ResultsBody,
}

#[derive(Debug, Deserialize)]
struct ResultsBody {
    count: usize,
    #[serde(default)]
    listings: Vec<Map<String, Value>>,
}

/// Listings laid out for display. Columns are the union of all listing
/// keys, in the order they are first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ListingTable {
    pub fn from_listings(listings: &[Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for listing in listings {
            for key in listing.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = listings
            .iter()
            .map(|listing| {
                columns
                    .iter()
                    .map(|c| listing.get(c).map(display_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }
}

fn display_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// What the results area shows after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Table(ListingTable),
    NoMatches,
    Failed(Notice),
}

impl ResultsView {
    pub fn from_outcome(outcome: ApiOutcome) -> Self {
        let body = match outcome {
            Ok(body) => body,
            Err(Failure::NoResults(_)) => return ResultsView::NoMatches,
            Err(failure) => {
                log::warn!("Listing search failed: {failure:?}");
                return ResultsView::Failed(failure.notice());
            }
        };

        match serde_json::from_value::<SuccessBody>(body) {
            Ok(SuccessBody { results }) if results.count > 0 => {
                ResultsView::Table(ListingTable::from_listings(&results.listings))
            }
            Ok(_) => ResultsView::NoMatches,
            Err(e) => ResultsView::Failed(Failure::InvalidBody(e.to_string()).notice()),
        }
    }
}
