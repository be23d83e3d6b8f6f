use crate::dataset::Dataset;
use crate::domain::listing::ListingColumns;
use crate::router::AppContext;
use astra::{Body, Request, Response};
use std::io::Read;

pub const FIXTURE_CSV: &str = "\
id,type,price,postal_code,city,bedrooms
1,House,300000,A,Campinas,3
2,Apartment,250000,B,Sao Paulo,2
3,Lot,120000,A,Campinas,
4,Apartment,300000,A,Campinas,1
";

/// Service context over the fixture dataset
pub fn fixture_context() -> AppContext {
    let dataset = Dataset::from_reader(FIXTURE_CSV.as_bytes(), ListingColumns::default())
        .unwrap_or_else(|e| panic!("Fixture dataset failed to load: {e}"));
    AppContext::new(dataset)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn read_body(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

pub fn read_json(resp: &mut Response) -> serde_json::Value {
    serde_json::from_str(&read_body(resp)).unwrap()
}
