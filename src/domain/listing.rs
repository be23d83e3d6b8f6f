use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Header names of the three columns the filters read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingColumns {
    pub property_type: String,
    pub price: String,
    pub postal_code: String,
}

impl Default for ListingColumns {
    fn default() -> Self {
        Self {
            property_type: "type".to_string(),
            price: "price".to_string(),
            postal_code: "postal_code".to_string(),
        }
    }
}

/// One row of the dataset.
///
/// The fields the filters depend on are typed; every other column is kept in
/// `extra`, in file order, and passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub property_type: String,
    pub price: i64,
    pub postal_code: String,
    pub extra: Map<String, Value>,
}

impl Listing {
    /// Flatten back into a field-to-value mapping following `headers` order.
    pub fn to_record(&self, columns: &ListingColumns, headers: &[String]) -> Map<String, Value> {
        let mut record = Map::with_capacity(headers.len());

        for header in headers {
            let value = if *header == columns.property_type {
                Value::String(self.property_type.clone())
            } else if *header == columns.price {
                Value::Number(self.price.into())
            } else if *header == columns.postal_code {
                Value::String(self.postal_code.clone())
            } else {
                self.extra.get(header).cloned().unwrap_or(Value::Null)
            };
            record.insert(header.clone(), value);
        }

        record
    }
}

/// Type a pass-through cell the way a tabular loader would:
/// blank is null, integers and decimals become numbers, the rest stays text.
pub fn infer_cell(raw: &str) -> Value {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Some(n) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }

    Value::String(raw.to_string())
}
