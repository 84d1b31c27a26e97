//! REST API for card validation.
//!
//! One operation: `POST /CardValidation/card/credit/validate` takes a card
//! record, runs [`validate_record`] and, if every field passed, answers with
//! the payment network as a JSON string.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | classified | 200 | `"Visa"` |
//! | field errors | 400 | `{"Owner": ["Owner is required"]}` |
//! | body is not a JSON object | 400 | `{"error": "..."}` |
//! | unsupported network | 500 | `{"error": "unsupported payment network"}` |
//!
//! Fields are decoded one by one, so a field holding a number or an array
//! is reported under its own key next to the other fields' errors.
//!
//! The last row only happens when the rules in use let a number through
//! validation that the classifier then rejects.
//!
//! Swagger UI is served at `/swagger-ui`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::check::{classify_record, validate_record_into, CardRules, FieldError, ValidationErrors};
use crate::{CardRecord, Field, PaymentNetwork, UnsupportedNetwork};

/// Path of the validation endpoint.
pub const VALIDATE_PATH: &str = "/CardValidation/card/credit/validate";

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Validation API",
        version = "0.1.0",
        description = "Validates credit card records and classifies the payment network (Visa, MasterCard, American Express).",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card record validation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validate_credit_card, health),
    components(schemas(CreditCardRequest, ErrorResponse, HealthResponse))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

/// A credit card record as submitted by clients.
///
/// Keys match case-insensitively; `expiry` and `cvc` are accepted for
/// `date` and `cvv`.
#[derive(Default, ToSchema)]
#[schema(example = json!({
    "owner": "John Doe",
    "number": "4111111111111111",
    "date": "12/2030",
    "cvv": "123"
}))]
pub struct CreditCardRequest {
    /// Owner name: two or three alphabetic names separated by single spaces
    pub owner: Option<String>,
    /// Card number, digits only
    pub number: Option<String>,
    /// Expiry date: MM/YYYY, MM/YY, MMYY or MMYYYY
    pub date: Option<String>,
    /// Card verification code, 3 or 4 digits
    pub cvv: Option<String>,
}

impl CreditCardRequest {
    /// Decodes a JSON object field by field.
    ///
    /// A field that is present but neither a string nor `null` is reported
    /// in the returned errors and left out of the request.
    pub fn from_object(body: &Map<String, Value>) -> (Self, ValidationErrors) {
        let mut errors = ValidationErrors::new();
        let mut take = |field: Field| -> Option<String> {
            let (_, value) = body
                .iter()
                .find(|(key, _)| wire_names(field).iter().any(|name| key.eq_ignore_ascii_case(name)))?;
            match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => {
                    errors.push(FieldError::wrong(
                        field,
                        format!("expected a string, found {}", json_kind(other)),
                    ));
                    None
                }
            }
        };

        let request = Self {
            owner: take(Field::Owner),
            number: take(Field::Number),
            date: take(Field::Expiry),
            cvv: take(Field::Cvc),
        };
        (request, errors)
    }
}

/// Body keys accepted for a field, compared ignoring ASCII case.
fn wire_names(field: Field) -> &'static [&'static str] {
    match field {
        Field::Owner => &["owner"],
        Field::Number => &["number"],
        Field::Expiry => &["date", "expiry"],
        Field::Cvc => &["cvv", "cvc"],
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<CreditCardRequest> for CardRecord {
    fn from(req: CreditCardRequest) -> Self {
        CardRecord::from_parts(req.owner, req.number, req.date, req.cvv)
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    /// What went wrong
    error: String,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

/// Failures of the validation endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// The body is not a JSON object.
    BadPayload(String),
    /// One or more fields failed validation.
    Validation(ValidationErrors),
    /// The classifier rejected a number that passed validation.
    Classification(UnsupportedNetwork),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadPayload(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors.to_map())).into_response()
            }
            Self::Classification(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<dyn CardRules>,
}

impl AppState {
    /// Creates state around a rule set.
    pub fn new(rules: Arc<dyn CardRules>) -> Self {
        Self { rules }
    }
}

/// Validate a credit card and return its payment network
#[utoipa::path(
    post,
    path = "/CardValidation/card/credit/validate",
    request_body = CreditCardRequest,
    responses(
        (status = 200, description = "Payment network: Visa, MasterCard or AmericanExpress", body = String),
        (status = 400, description = "Field-keyed validation errors, e.g. {\"Owner\": [\"Owner is required\"]}"),
        (status = 500, description = "Number could not be classified", body = ErrorResponse)
    ),
    tag = "Validation"
)]
async fn validate_credit_card(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PaymentNetwork>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "unreadable card payload");
        ApiError::BadPayload(rejection.body_text())
    })?;
    let body = match body {
        Value::Object(map) => map,
        other => {
            tracing::warn!(kind = json_kind(&other), "card payload is not an object");
            return Err(ApiError::BadPayload(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )));
        }
    };

    let (req, mut errors) = CreditCardRequest::from_object(&body);
    let record = CardRecord::from(req);
    validate_record_into(state.rules.as_ref(), &record, &mut errors);

    if !errors.is_empty() {
        tracing::info!(fields = ?errors.fields(), "card rejected");
        return Err(ApiError::Validation(errors));
    }

    match classify_record(state.rules.as_ref(), &record) {
        Ok(network) => {
            tracing::info!(network = network.identifier(), "card classified");
            Ok(Json(network))
        }
        Err(e) => {
            tracing::error!(error = %e, "validated card could not be classified");
            Err(ApiError::Classification(e))
        }
    }
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Router
// ============================================================================

/// Builds the application router with CORS, request tracing and Swagger UI.
pub fn router(rules: Arc<dyn CardRules>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route(VALIDATE_PATH, post(validate_credit_card))
        .route("/health", get(health))
        .with_state(AppState::new(rules))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
