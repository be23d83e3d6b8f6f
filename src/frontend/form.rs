use std::collections::HashMap;

use url::form_urlencoded;

use crate::domain::criteria::{PARAM_POSTAL_CODE, PARAM_PRICE_MAX, PARAM_PRICE_MIN, PARAM_TYPE};

/// Closed list offered by the type selector; the first entry is the default.
pub const PROPERTY_TYPES: [&str; 5] = ["Apartment", "House", "Lot", "Studio", "Farm"];

pub const PRICE_FLOOR: i64 = 100_000;
pub const PRICE_CEILING: i64 = 3_000_000;
pub const PRICE_STEP: i64 = 50_000;
pub const DEFAULT_PRICE_MIN: i64 = 200_000;
pub const DEFAULT_PRICE_MAX: i64 = 1_000_000;

/// State of the search controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub property_type: &'static str,
    pub postal_code: String,
    pub price_min: i64,
    pub price_max: i64,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            property_type: PROPERTY_TYPES[0],
            postal_code: String::new(),
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl SearchForm {
    /// Read submitted controls. Values outside what the widgets allow fall
    /// back to defaults or get clamped, so the form never produces an
    /// out-of-range request.
    pub fn from_query(query: Option<&str>) -> Self {
        let params: HashMap<String, String> = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let defaults = Self::default();

        let property_type = params
            .get(PARAM_TYPE)
            .and_then(|t| PROPERTY_TYPES.iter().copied().find(|p| *p == t.as_str()))
            .unwrap_or(defaults.property_type);

        let postal_code = params
            .get(PARAM_POSTAL_CODE)
            .map(|p| p.trim().to_string())
            .unwrap_or_default();

        let price = |key: &str, default: i64| {
            params
                .get(key)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .map(snap_price)
                .unwrap_or(default)
        };

        let mut price_min = price(PARAM_PRICE_MIN, defaults.price_min);
        let mut price_max = price(PARAM_PRICE_MAX, defaults.price_max);
        if price_min > price_max {
            std::mem::swap(&mut price_min, &mut price_max);
        }

        Self {
            property_type,
            postal_code,
            price_min,
            price_max,
        }
    }

    /// Query parameters for `GET /listings`. The postal code is only sent
    /// when one was typed.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (PARAM_TYPE, self.property_type.to_string()),
            (PARAM_PRICE_MIN, self.price_min.to_string()),
            (PARAM_PRICE_MAX, self.price_max.to_string()),
        ];

        if !self.postal_code.is_empty() {
            params.push((PARAM_POSTAL_CODE, self.postal_code.clone()));
        }

        params
    }
}

/// Clamp into the slider bounds and round to the nearest step.
fn snap_price(value: i64) -> i64 {
    let clamped = value.clamp(PRICE_FLOOR, PRICE_CEILING);
    let steps = (clamped - PRICE_FLOOR + PRICE_STEP / 2) / PRICE_STEP;
    (PRICE_FLOOR + steps * PRICE_STEP).min(PRICE_CEILING)
}
