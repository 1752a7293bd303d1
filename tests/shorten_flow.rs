mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use url_shortener_client::prelude::*;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_submit_plain_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorturls"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "shortLink": "http://localhost:5000/abc123",
            "expiry": "2025-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com");
    controller.update_draft(1, DraftField::Validity, "");
    controller.update_draft(1, DraftField::Shortcode, "");

    let outcome = controller.submit(1).await.unwrap();

    assert_eq!(outcome.short_link, "http://localhost:5000/abc123");
    assert_eq!(outcome.expiry.to_rfc3339(), "2025-01-01T00:00:00+00:00");

    let results = controller.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].shortcode(), "abc123");
    assert_eq!(results[0].source_id, 1);
}

#[tokio::test]
async fn test_submit_sends_validity_and_shortcode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorturls"))
        .and(body_json(json!({
            "url": "https://example.com/page",
            "validity": 45,
            "shortcode": "promo"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::shorten_body(&server, "promo")))
        .expect(1)
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com/page");
    controller.update_draft(1, DraftField::Validity, "45");
    controller.update_draft(1, DraftField::Shortcode, "promo");

    let outcome = controller.submit(1).await.unwrap();
    assert_eq!(outcome.shortcode(), "promo");
}

#[tokio::test]
async fn test_invalid_url_never_reaches_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "not-a-url");

    let err = controller.submit(1).await.unwrap_err();

    assert_eq!(err, SubmitError::Validation(ValidationError::MalformedUrl));
    assert!(controller.results().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remote_rejection_uses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorturls"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "detail": "Shortcode already exists" })),
        )
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com");
    controller.update_draft(1, DraftField::Shortcode, "taken");

    let err = controller.submit(1).await.unwrap_err();

    assert_eq!(
        err,
        SubmitError::Shorten(ShortenError::RemoteRejected(
            "Shortcode already exists".to_string()
        ))
    );
    assert_eq!(controller.draft(1).unwrap().state, DraftState::Failed);
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_remote_rejection_uses_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Bad URL" })))
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com");

    let err = controller.submit(1).await.unwrap_err();
    assert_eq!(err.to_string(), "Bad URL");
}

#[tokio::test]
async fn test_remote_rejection_without_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com");

    let err = controller.submit(1).await.unwrap_err();
    assert_eq!(
        err,
        SubmitError::Shorten(ShortenError::RemoteRejected(
            "An unknown error occurred.".to_string()
        ))
    );
}

#[tokio::test]
async fn test_malformed_success_body_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "shortLink": 5 })))
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com");

    let err = controller.submit(1).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Shorten(ShortenError::NetworkFailure(_))
    ));
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::shorten_body(&server, "late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let api = HttpShortenerApi::new(&server.uri(), Duration::from_millis(200)).unwrap();
    let controller = BatchController::new(Arc::new(api));
    controller.update_draft(1, DraftField::Url, "https://example.com");

    let err = controller.submit(1).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Shorten(ShortenError::NetworkFailure(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let api =
        HttpShortenerApi::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();
    let controller = BatchController::new(Arc::new(api));
    controller.update_draft(1, DraftField::Url, "https://example.com");

    let err = controller.submit(1).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Shorten(ShortenError::NetworkFailure(_))
    ));
}

#[tokio::test]
async fn test_same_draft_twice_yields_two_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::shorten_body(&server, "first1")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::shorten_body(&server, "second")))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    controller.update_draft(1, DraftField::Url, "https://example.com");

    controller.submit(1).await.unwrap();
    controller.submit(1).await.unwrap();

    let results = controller.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].shortcode(), "first1");
    assert_eq!(results[1].shortcode(), "second");
    assert!(results.iter().all(|r| r.source_id == 1));
}

#[tokio::test]
async fn test_results_follow_completion_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "url": "https://slow.example.com" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::shorten_body(&server, "slow01"))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "url": "https://fast.example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::shorten_body(&server, "fast01")))
        .mount(&server)
        .await;

    let controller = common::create_controller(&server);
    let second = controller.add_draft().unwrap();
    controller.update_draft(1, DraftField::Url, "https://slow.example.com");
    controller.update_draft(second, DraftField::Url, "https://fast.example.com");

    let (slow, fast) = tokio::join!(controller.submit(1), controller.submit(second));
    assert!(slow.is_ok());
    assert!(fast.is_ok());

    let results = controller.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].source_id, second);
    assert_eq!(results[1].source_id, 1);
}

#[tokio::test]
async fn test_batch_limit() {
    let server = MockServer::start().await;
    let controller = common::create_controller(&server);

    for _ in 1..MAX_DRAFTS {
        controller.add_draft().unwrap();
    }

    let err = controller.add_draft().unwrap_err();
    assert_eq!(err.to_string(), "You can shorten up to 5 URLs concurrently.");
    assert_eq!(controller.drafts().len(), MAX_DRAFTS);
}
