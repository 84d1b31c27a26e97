//! REST API tests.
//!
//! Requests go straight through the router with `tower::ServiceExt::oneshot`,
//! no socket involved.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use card_validation::api::{router, VALIDATE_PATH};
use card_validation::{CardRules, PaymentNetwork, StandardRules, UnsupportedNetwork};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// HELPERS
// =============================================================================

fn standard_app() -> Router {
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    router(Arc::new(StandardRules::at(today)))
}

async fn post_raw(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(VALIDATE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_card(app: Router, card: Value) -> (StatusCode, Value) {
    post_raw(app, card.to_string()).await
}

fn card(number: &str) -> Value {
    json!({
        "Owner": "John Doe",
        "Number": number,
        "Date": "12/2025",
        "Cvv": "123"
    })
}

/// Rules that accept every field and count classifier calls.
struct PermissiveRules {
    classified: AtomicUsize,
    network: Option<PaymentNetwork>,
}

impl PermissiveRules {
    fn new(network: Option<PaymentNetwork>) -> Arc<Self> {
        Arc::new(Self {
            classified: AtomicUsize::new(0),
            network,
        })
    }
}

impl CardRules for PermissiveRules {
    fn check_owner(&self, _: &str) -> Result<(), String> {
        Ok(())
    }

    fn check_number(&self, _: &str) -> Result<(), String> {
        Ok(())
    }

    fn check_expiry(&self, _: &str) -> Result<(), String> {
        Ok(())
    }

    fn check_cvc(&self, _: &str) -> Result<(), String> {
        Ok(())
    }

    fn classify_network(&self, _: &str) -> Result<PaymentNetwork, UnsupportedNetwork> {
        self.classified.fetch_add(1, Ordering::SeqCst);
        self.network.ok_or(UnsupportedNetwork)
    }
}

/// Standard rules with a classifier call counter.
struct CountingRules {
    inner: StandardRules,
    classified: AtomicUsize,
}

impl CardRules for CountingRules {
    fn check_owner(&self, value: &str) -> Result<(), String> {
        self.inner.check_owner(value)
    }

    fn check_number(&self, value: &str) -> Result<(), String> {
        self.inner.check_number(value)
    }

    fn check_expiry(&self, value: &str) -> Result<(), String> {
        self.inner.check_expiry(value)
    }

    fn check_cvc(&self, value: &str) -> Result<(), String> {
        self.inner.check_cvc(value)
    }

    fn classify_network(&self, value: &str) -> Result<PaymentNetwork, UnsupportedNetwork> {
        self.classified.fetch_add(1, Ordering::SeqCst);
        self.inner.classify_network(value)
    }
}

// =============================================================================
// SUCCESSFUL CLASSIFICATION
// =============================================================================

#[tokio::test]
async fn test_visa_returns_200() {
    let (status, body) = post_card(standard_app(), card("4111111111111111")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Visa"));
}

#[tokio::test]
async fn test_mastercard_returns_200() {
    for number in ["5555555555554444", "2221001234567890"] {
        let (status, body) = post_card(standard_app(), card(number)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("MasterCard"));
    }
}

#[tokio::test]
async fn test_amex_returns_200() {
    let (status, body) = post_card(standard_app(), card("378282246310005")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("AmericanExpress"));
}

#[tokio::test]
async fn test_lowercase_keys_accepted() {
    let body = json!({
        "owner": "Jane Doe Smith",
        "number": "4123456789012",
        "date": "1225",
        "cvv": "1234"
    });
    let (status, body) = post_card(standard_app(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Visa"));
}

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

#[tokio::test]
async fn test_missing_owner_returns_400() {
    let mut body = card("4111111111111111");
    body.as_object_mut().unwrap().remove("Owner");

    let (status, body) = post_card(standard_app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"Owner": ["Owner is required"]}));
}

#[tokio::test]
async fn test_wrong_fields_return_400() {
    let cases = [
        ("Owner", json!("Invalid123"), "Wrong owner"),
        ("Number", json!("1234567890123456"), "Wrong number"),
        ("Date", json!("13/2025"), "Wrong date"),
        ("Cvv", json!("12"), "Wrong cvv"),
    ];
    for (key, value, message) in cases {
        let mut body = card("4111111111111111");
        body[key] = value;

        let (status, body) = post_card(standard_app(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", key);
        assert_eq!(body, json!({ key: [message] }));
    }
}

#[tokio::test]
async fn test_multiple_errors_reported_together() {
    let body = json!({
        "Number": "invalid",
        "Date": "13/2025",
        "Cvv": "12"
    });
    let (status, body) = post_card(standard_app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "Owner": ["Owner is required"],
            "Number": ["Wrong number"],
            "Date": ["Wrong date"],
            "Cvv": ["Wrong cvv"]
        })
    );
}

#[tokio::test]
async fn test_expired_card_returns_400() {
    let mut body = card("4111111111111111");
    body["Date"] = json!("05/2025");

    let (status, body) = post_card(standard_app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"Date": ["Wrong date"]}));
}

#[tokio::test]
async fn test_classifier_not_called_on_invalid_record() {
    let rules = Arc::new(CountingRules {
        inner: StandardRules::at(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
        classified: AtomicUsize::new(0),
    });
    let app = router(rules.clone());

    let mut body = card("4111111111111111");
    body["Cvv"] = json!("12a");
    let (status, _) = post_card(app.clone(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(rules.classified.load(Ordering::SeqCst), 0);

    let (status, _) = post_card(app, card("4111111111111111")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rules.classified.load(Ordering::SeqCst), 1);
}

// =============================================================================
// CLASSIFICATION FAILURES
// =============================================================================

#[tokio::test]
async fn test_unsupported_network_after_validation_returns_500() {
    let rules = PermissiveRules::new(None);
    let (status, body) = post_card(router(rules.clone()), card("6011111111111117")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "unsupported payment network"}));
    assert_eq!(rules.classified.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_custom_rules_drive_the_response() {
    let rules = PermissiveRules::new(Some(PaymentNetwork::AmericanExpress));
    let (status, body) = post_card(router(rules), card("0000")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("AmericanExpress"));
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, body) = post_raw(standard_app(), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_wrong_value_type_reported_with_other_fields() {
    let body = json!({
        "Owner": "John Doe",
        "Number": 4111111111111111u64,
        "Date": "12/2025",
        "Cvv": "12"
    });
    let (status, body) = post_card(standard_app(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"Number": ["Wrong number"], "Cvv": ["Wrong cvv"]}));
}

#[tokio::test]
async fn test_wrong_value_type_skips_rules_for_that_field() {
    let rules = PermissiveRules::new(Some(PaymentNetwork::Visa));
    let mut body = card("4111111111111111");
    body["Owner"] = json!(true);

    let (status, body) = post_card(router(rules.clone()), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"Owner": ["Wrong owner"]}));
    assert_eq!(rules.classified.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_object_body_returns_400() {
    for raw in ["[1, 2]", "\"4111111111111111\"", "null"] {
        let (status, body) = post_raw(standard_app(), raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", raw);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = standard_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}
