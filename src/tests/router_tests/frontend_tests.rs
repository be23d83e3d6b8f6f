// src/tests/router_tests/frontend_tests.rs

use crate::frontend::client::Failure;
use crate::frontend::form::SearchForm;
use crate::frontend::view::{ListingTable, ResultsView};
use crate::frontend::{handle, ApiClient, FrontendContext};
use crate::templates::html_error_response;
use crate::templates::pages::search::NO_MATCHES_TEXT;
use crate::templates::pages::search_page;
use crate::tests::utils::{get, read_body};
use std::net::TcpListener;

/// Frontend wired to a port nothing listens on
fn unreachable_backend() -> FrontendContext {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = ApiClient::new(&format!("http://127.0.0.1:{port}")).unwrap();
    FrontendContext { api }
}

#[test]
fn index_renders_form_with_defaults() {
    let ctx = unreachable_backend();
    let mut resp = handle(get("/"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains(r#"<form method="get" action="/search""#));
    for ty in ["Apartment", "House", "Lot", "Studio", "Farm"] {
        assert!(body.contains(&format!(r#"value="{ty}""#)), "missing {ty}");
    }
    assert!(body.contains(r#"min="100000""#));
    assert!(body.contains(r#"max="3000000""#));
    assert!(body.contains(r#"step="50000""#));
    assert!(body.contains(r#"value="200000""#));
    assert!(body.contains(r#"value="1000000""#));
    assert!(!body.contains("<table"));
}

#[test]
fn search_with_backend_down_shows_connection_error() {
    let ctx = unreachable_backend();
    let mut resp = handle(get("/search?type=House&price_min=300000&price_max=900000"), &ctx).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("Connection error"));
    assert!(body.contains(r#"<option value="House" selected>"#));
    assert!(!body.contains("<table"));
}

#[test]
fn unknown_page_is_html_404() {
    let ctx = unreachable_backend();
    let err = handle(get("/admin"), &ctx).unwrap_err();

    let mut resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(read_body(&mut resp).contains("Error 404"));
}

#[test]
fn table_view_renders_rows() {
    let table = ListingTable {
        columns: vec!["type".to_string(), "price".to_string()],
        rows: vec![vec!["House".to_string(), "300000".to_string()]],
    };

    let page = search_page(&SearchForm::default(), Some(&ResultsView::Table(table))).into_string();
    assert!(page.contains("<th>type</th><th>price</th>"));
    assert!(page.contains("<td>House</td><td>300000</td>"));
}

#[test]
fn no_matches_view_renders_message() {
    let page = search_page(&SearchForm::default(), Some(&ResultsView::NoMatches)).into_string();
    assert!(page.contains(NO_MATCHES_TEXT));
    assert!(!page.contains("<table"));
}

#[test]
fn failure_notice_is_escaped() {
    let view = ResultsView::Failed(
        Failure::Unexpected {
            status: 418,
            body: "<b>teapot</b>".to_string(),
        }
        .notice(),
    );

    let page = search_page(&SearchForm::default(), Some(&view)).into_string();
    assert!(page.contains("Error: 418 - &lt;b&gt;teapot&lt;/b&gt;"));
    assert!(page.contains("notice-error"));
}
