// src/search.rs

use crate::dataset::Dataset;
use crate::domain::criteria::Criteria;
use crate::domain::listing::Listing;

type Predicate<'c> = Box<dyn Fn(&Listing) -> bool + 'c>;

/// Outcome of a valid query. Zero matches is a normal result, not an error.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'d> {
    Matches(Vec<&'d Listing>),
    NoResults,
}

/// One predicate per constraint that is actually set.
fn predicates(criteria: &Criteria) -> Vec<Predicate<'_>> {
    let mut preds: Vec<Predicate<'_>> = Vec::new();

    if let Some(ty) = &criteria.property_type {
        preds.push(Box::new(move |l: &Listing| l.property_type == *ty));
    }
    if let Some(min) = criteria.price_min {
        preds.push(Box::new(move |l: &Listing| l.price >= min));
    }
    if let Some(max) = criteria.price_max {
        preds.push(Box::new(move |l: &Listing| l.price <= max));
    }
    if let Some(postal) = &criteria.postal_code {
        preds.push(Box::new(move |l: &Listing| l.postal_code == *postal));
    }

    preds
}

/// Select the listings satisfying every constraint in `criteria`, in dataset
/// order. With no constraints every listing matches.
pub fn search<'d>(dataset: &'d Dataset, criteria: &Criteria) -> SearchOutcome<'d> {
    let preds = predicates(criteria);

    let matches: Vec<&Listing> = dataset
        .listings()
        .iter()
        .filter(|listing| preds.iter().all(|p| p(*listing)))
        .collect();

    if matches.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches(matches)
    }
}
