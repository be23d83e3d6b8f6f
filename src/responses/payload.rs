// responses/payload.rs
use serde::Serialize;
use serde_json::{Map, Value};

use crate::dataset::Dataset;
use crate::domain::criteria::Criteria;
use crate::domain::listing::Listing;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_NO_RESULTS: &str = "no_results";
pub const STATUS_ERROR: &str = "error";

pub const ALL_TYPES: &str = "All";
pub const UNCONSTRAINED: &str = "None";

pub const NO_RESULTS_MESSAGE: &str = "No listings found with the applied filters.";

/// A filter value as echoed back: the applied value, or a marker when unset.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Applied<T> {
    Value(T),
    Unconstrained(&'static str),
}

impl<T> Applied<T> {
    fn from_option(value: Option<T>, marker: &'static str) -> Self {
        value.map_or(Applied::Unconstrained(marker), Applied::Value)
    }
}

#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    #[serde(rename = "type")]
    pub property_type: Applied<String>,
    pub price_min: Applied<i64>,
    pub price_max: Applied<i64>,
    pub postal_code: Applied<String>,
}

impl From<&Criteria> for AppliedFilters {
    fn from(c: &Criteria) -> Self {
        Self {
            property_type: Applied::from_option(c.property_type.clone(), ALL_TYPES),
            price_min: Applied::from_option(c.price_min, UNCONSTRAINED),
            price_max: Applied::from_option(c.price_max, UNCONSTRAINED),
            postal_code: Applied::from_option(c.postal_code.clone(), UNCONSTRAINED),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub listings: Vec<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct SearchSuccess {
    pub status: &'static str,
    pub filters: AppliedFilters,
    pub results: SearchResults,
}

impl SearchSuccess {
    pub fn new(criteria: &Criteria, dataset: &Dataset, matches: &[&Listing]) -> Self {
        let listings = matches
            .iter()
            .map(|l| l.to_record(dataset.columns(), dataset.headers()))
            .collect();

        Self {
            status: STATUS_SUCCESS,
            filters: criteria.into(),
            results: SearchResults {
                count: matches.len(),
                listings,
            },
        }
    }
}

/// Body shared by the no-results and error responses.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn no_results() -> Self {
        Self {
            status: STATUS_NO_RESULTS,
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_filters_use_markers() {
        let filters = AppliedFilters::from(&Criteria::default());
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({"type": "All", "price_min": "None", "price_max": "None", "postal_code": "None"})
        );
    }

    // A zero bound is a real constraint and is echoed as 0, not as the
    // "None" marker.
    #[test]
    fn set_filters_are_echoed_typed() {
        let criteria = Criteria {
            property_type: Some("House".to_string()),
            price_min: Some(0),
            price_max: Some(500_000),
            postal_code: Some("01310-100".to_string()),
        };
        assert_eq!(
            serde_json::to_value(AppliedFilters::from(&criteria)).unwrap(),
            json!({"type": "House", "price_min": 0, "price_max": 500000, "postal_code": "01310-100"})
        );
    }
}
