// src/domain/criteria.rs

use std::collections::HashMap;

use thiserror::Error;
use url::form_urlencoded;

pub const PARAM_TYPE: &str = "type";
pub const PARAM_PRICE_MIN: &str = "price_min";
pub const PARAM_PRICE_MAX: &str = "price_max";
pub const PARAM_POSTAL_CODE: &str = "postal_code";

/// A price bound that could not be read as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid minimum or maximum price value: {field}={value:?}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
}

/// Filter values exactly as they arrived in the query string.
/// Empty values are dropped, so `?type=` means "no type constraint".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawCriteria {
    pub property_type: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub postal_code: Option<String>,
}

impl RawCriteria {
    /// Decode an `application/x-www-form-urlencoded` query string.
    /// Unknown keys are ignored; for repeated keys the first non-empty
    /// value wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params: HashMap<String, String> = HashMap::new();
        for (k, v) in query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned())
            .into_iter()
            .flatten()
        {
            if !v.is_empty() {
                params.entry(k).or_insert(v);
            }
        }

        let take = |key: &str| params.get(key).cloned();

        Self {
            property_type: take(PARAM_TYPE),
            price_min: take(PARAM_PRICE_MIN),
            price_max: take(PARAM_PRICE_MAX),
            postal_code: take(PARAM_POSTAL_CODE),
        }
    }
}

/// Typed filter constraints. `None` means the attribute is unconstrained.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub property_type: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub postal_code: Option<String>,
}

impl Criteria {
    /// Parse-then-validate: both price bounds are coerced before anything
    /// else happens, so a malformed bound never reaches the filter.
    pub fn parse(raw: RawCriteria) -> Result<Self, ValidationError> {
        let price_min = parse_price(PARAM_PRICE_MIN, raw.price_min.as_deref())?;
        let price_max = parse_price(PARAM_PRICE_MAX, raw.price_max.as_deref())?;

        Ok(Self {
            property_type: raw.property_type,
            price_min,
            price_max,
            postal_code: raw.postal_code,
        })
    }
}

fn parse_price(field: &'static str, value: Option<&str>) -> Result<Option<i64>, ValidationError> {
    value
        .map(|v| {
            v.trim().parse::<i64>().map_err(|_| ValidationError {
                field,
                value: v.to_string(),
            })
        })
        .transpose()
}
