#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url_shortener_client::prelude::*;
use wiremock::MockServer;

pub fn create_api(server: &MockServer) -> Arc<HttpShortenerApi> {
    Arc::new(HttpShortenerApi::new(&server.uri(), Duration::from_secs(5)).unwrap())
}

pub fn create_controller(server: &MockServer) -> BatchController<HttpShortenerApi> {
    BatchController::new(create_api(server))
}

pub fn shorten_body(server: &MockServer, code: &str) -> Value {
    json!({
        "shortLink": format!("{}/{}", server.uri(), code),
        "expiry": "2025-01-01T00:00:00Z"
    })
}

pub fn stats_body(code: &str, clicks: u64) -> Value {
    let detailed: Vec<Value> = (0..clicks)
        .map(|i| {
            json!({
                "timestamp": format!("2025-01-01T00:{:02}:00Z", i % 60),
                "source": "direct",
                "location": "DE"
            })
        })
        .collect();

    json!({
        "shortcode": code,
        "original_url": format!("https://example.com/{code}"),
        "creation_date": "2025-01-01T00:00:00Z",
        "expiry_date": "2025-01-01T00:30:00Z",
        "total_clicks": clicks,
        "detailed_clicks": detailed
    })
}
