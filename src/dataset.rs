use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Map;
use thiserror::Error;

use crate::domain::listing::{infer_cell, Listing, ListingColumns};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Column {0:?} not found in dataset header")]
    MissingColumn(String),
    #[error("Line {line}: price {value:?} is not a non-negative integer")]
    InvalidPrice { line: u64, value: String },
}

/// The read-only listing table. Built once before serving and shared
/// by reference with every request; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    columns: ListingColumns,
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, columns: ListingColumns, listings: Vec<Listing>) -> Self {
        Self {
            headers,
            columns,
            listings,
        }
    }

    /// Load a CSV file with a header row.
    pub fn load(path: impl AsRef<Path>, columns: ListingColumns) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_reader(file, columns)
    }

    pub fn from_reader<R: Read>(reader: R, columns: ListingColumns) -> Result<Self, DatasetError> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };
        let type_idx = position(&columns.property_type)?;
        let price_idx = position(&columns.price)?;
        let postal_idx = position(&columns.postal_code)?;

        let mut listings = Vec::new();

        for result in rdr.records() {
            let record = result?;
            // File line the record starts on; quoted cells may span several.
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let cell = |idx: usize| record.get(idx).unwrap_or_default();

            let price = parse_price(cell(price_idx)).ok_or_else(|| DatasetError::InvalidPrice {
                line,
                value: cell(price_idx).to_string(),
            })?;

            let mut extra = Map::new();
            for (idx, header) in headers.iter().enumerate() {
                if idx == type_idx || idx == price_idx || idx == postal_idx {
                    continue;
                }
                extra.insert(header.clone(), infer_cell(cell(idx)));
            }

            listings.push(Listing {
                property_type: cell(type_idx).to_string(),
                price,
                postal_code: cell(postal_idx).to_string(),
                extra,
            });
        }

        Ok(Self::new(headers, columns, listings))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn columns(&self) -> &ListingColumns {
        &self.columns
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Integers pass as-is; an integral decimal such as `250000.0` is accepted too.
fn parse_price(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    let price = match raw.parse::<i64>() {
        Ok(p) => p,
        Err(_) => {
            let f = raw.parse::<f64>().ok()?;
            if !f.is_finite() || f.fract() != 0.0 || f > i64::MAX as f64 {
                return None;
            }
            f as i64
        }
    };

    (price >= 0).then_some(price)
}
