// src/tests/router_tests/listings_tests.rs

use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{fixture_context, get, read_json};
use astra::Response;
use serde_json::json;

/// Route a request the way the server loop does, errors included
fn call(uri: &str) -> Response {
    let ctx = fixture_context();
    match handle(get(uri), &ctx) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

#[test]
fn no_filters_return_every_listing() {
    let mut resp = call("/listings");
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let body = read_json(&mut resp);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["filters"],
        json!({"type": "All", "price_min": "None", "price_max": "None", "postal_code": "None"})
    );
    assert_eq!(body["results"]["count"], 4);

    let ids: Vec<i64> = body["results"]["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn listings_are_flat_records_in_header_order() {
    let mut resp = call("/listings?type=Lot");
    let body = read_json(&mut resp);

    assert_eq!(
        body["results"]["listings"],
        json!([{"id": 3, "type": "Lot", "price": 120000, "postal_code": "A", "city": "Campinas", "bedrooms": null}])
    );

    let keys: Vec<&String> = body["results"]["listings"][0]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(keys, vec!["id", "type", "price", "postal_code", "city", "bedrooms"]);
}

#[test]
fn combined_filters_are_echoed() {
    let mut resp = call("/listings?type=Apartment&price_min=260000&postal_code=A");
    assert_eq!(resp.status(), 200);

    let body = read_json(&mut resp);
    assert_eq!(
        body["filters"],
        json!({"type": "Apartment", "price_min": 260000, "price_max": "None", "postal_code": "A"})
    );
    assert_eq!(body["results"]["count"], 1);
    assert_eq!(body["results"]["listings"][0]["id"], 4);
}

#[test]
fn price_bounds_include_edges() {
    let mut resp = call("/listings?price_min=250000&price_max=300000");
    let body = read_json(&mut resp);
    assert_eq!(body["results"]["count"], 3);
}

#[test]
fn no_match_is_404_no_results() {
    let mut resp = call("/listings?type=Farm");
    assert_eq!(resp.status(), 404);
    assert_eq!(
        read_json(&mut resp),
        json!({"status": "no_results", "message": "No listings found with the applied filters."})
    );
}

#[test]
fn invalid_price_is_400_even_when_nothing_would_match() {
    for uri in [
        "/listings?price_min=abc",
        "/listings?price_max=abc&type=Farm",
        "/listings?price_min=100&price_max=x&postal_code=ZZZ",
    ] {
        let mut resp = call(uri);
        assert_eq!(resp.status(), 400, "{uri}");

        let body = read_json(&mut resp);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("price"));
    }
}

#[test]
fn repeated_price_key_uses_first_value() {
    let mut resp = call("/listings?price_min=abc&price_min=100");
    assert_eq!(resp.status(), 400);
    assert_eq!(read_json(&mut resp)["status"], "error");
}

#[test]
fn unknown_route_is_json_404() {
    let mut resp = call("/imoveis");
    assert_eq!(resp.status(), 404);
    assert_eq!(read_json(&mut resp), json!({"status": "error", "message": "Not Found"}));
}

#[test]
fn only_get_is_routed() {
    let ctx = fixture_context();
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/listings")
        .body(astra::Body::empty())
        .unwrap();

    let err = handle(req, &ctx).unwrap_err();
    assert_eq!(err.status(), 404);
}
