/// Integration tests for the view-level flow: activate, read the settled
/// state, select, and derive the quote summary
use httpmock::prelude::*;
use serde_json::json;

use skipquote::catalog::{CatalogState, SkipBrowser};
use skipquote::config::{ApiConfig, Config, LocationConfig};
use skipquote::pricing;

fn test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        },
        location: LocationConfig {
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
        },
    }
}

fn skip_json(id: i64, size: u32, price_before_vat: f64, vat: f64) -> serde_json::Value {
    json!({
        "id": id,
        "size": size,
        "hire_period_days": 14,
        "transport_cost": null,
        "per_tonne_cost": null,
        "price_before_vat": price_before_vat,
        "vat": vat,
        "postcode": "NR32",
        "area": "Lowestoft",
        "forbidden": false,
        "created_at": "2025-04-03T13:51:46.897146",
        "updated_at": "2025-04-07T13:16:52.813000",
        "allowed_on_road": true,
        "allows_heavy_waste": true
    })
}

#[tokio::test]
async fn test_activate_settles_ready() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/skips/by-location");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    skip_json(1, 4, 211.0, 20.0),
                    skip_json(2, 8, 375.0, 20.0),
                ]));
        })
        .await;

    let config = test_config(&server.base_url());
    let client = reqwest::Client::new();

    let mut browser = SkipBrowser::new();
    assert!(browser.state().is_loading());

    let state = browser.activate(&client, &config).await;
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(browser.skips().len(), 2);
}

#[tokio::test]
async fn test_activate_settles_failed_on_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/skips/by-location");
            then.status(500).body("boom");
        })
        .await;

    let config = test_config(&server.base_url());
    let client = reqwest::Client::new();

    let mut browser = SkipBrowser::new();
    browser.activate(&client, &config).await;

    match browser.state() {
        CatalogState::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(browser.skips().is_empty());
    assert!(browser.state().error().is_some());
}

#[tokio::test]
async fn test_activate_settles_failed_on_malformed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/skips/by-location");
            then.status(200).body("not json at all");
        })
        .await;

    let config = test_config(&server.base_url());
    let client = reqwest::Client::new();

    let mut browser = SkipBrowser::new();
    browser.activate(&client, &config).await;

    assert!(browser.state().error().is_some());
}

#[tokio::test]
async fn test_select_then_quote_summary() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/skips/by-location");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    skip_json(1, 4, 211.0, 20.0),
                    skip_json(2, 8, 200.0, 20.0),
                    skip_json(3, 12, 439.0, 20.0),
                ]));
        })
        .await;

    let config = test_config(&server.base_url());
    let client = reqwest::Client::new();

    let mut browser = SkipBrowser::new();
    browser.activate(&client, &config).await;

    let four_yard = browser.find_by_size(4).unwrap().clone();
    let eight_yard = browser.find_by_size(8).unwrap().clone();

    browser.select(four_yard.clone());
    browser.select(eight_yard.clone());

    // Replacement, not accumulation
    assert!(!browser.is_selected(&four_yard));
    let selected = browser.selected().unwrap();
    assert_eq!(selected.id, 2);

    assert_eq!(pricing::display_name(selected), "8 Yard Skip");
    assert_eq!(pricing::description(selected), "14 day hire period");
    assert_eq!(pricing::final_price(selected), 240);
    assert_eq!(pricing::capacity_summary(selected.size), "Ideal for medium renovations");
}

#[tokio::test]
async fn test_fresh_activation_replaces_failed_state() {
    // Manual reload remediation: a new activation performs a new fetch
    let server = MockServer::start_async().await;
    let failing = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/skips/by-location");
            then.status(503).body("maintenance");
        })
        .await;

    let config = test_config(&server.base_url());
    let client = reqwest::Client::new();

    let mut browser = SkipBrowser::new();
    browser.activate(&client, &config).await;
    assert!(browser.state().error().is_some());

    failing.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/skips/by-location");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([skip_json(1, 6, 305.0, 20.0)]));
        })
        .await;

    let mut browser = SkipBrowser::new();
    browser.activate(&client, &config).await;
    assert_eq!(browser.skips().len(), 1);
    assert!(browser.state().error().is_none());
}
