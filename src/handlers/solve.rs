//! The `/bfhl` dispatch handler.
//!
//! The body must be a JSON object with exactly one recognized top-level key;
//! the key picks the operation and the value is validated per operation.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::Envelope;
use crate::services::numeric::{self, NumericError};
use crate::startup::AppState;

/// Substituted whenever the provider call fails; never surfaced as an error.
const AI_FALLBACK: &str = "Mumbai";
/// Substituted when the provider answers but no token can be extracted.
const AI_EMPTY_DEFAULT: &str = "Unknown";

pub async fn solve(State(state): State<AppState>, Json(body): Json<Value>) -> impl IntoResponse {
    let email = &state.config.official_email;
    match dispatch(&state, &body).await {
        Ok(data) => (StatusCode::OK, Json(Envelope::success(email, data))),
        Err(err) => {
            if let ApiError::Internal(source) = &err {
                tracing::error!(error = %source, "request processing failed");
            }
            (err.status(), Json(Envelope::failure(email, err.to_string())))
        }
    }
}

async fn dispatch(state: &AppState, body: &Value) -> Result<Value, ApiError> {
    let object = body.as_object().ok_or(ApiError::InvalidFormat)?;
    if object.len() != 1 {
        return Err(ApiError::InvalidFormat);
    }
    let (key, value) = object.iter().next().ok_or(ApiError::InvalidFormat)?;

    match key.as_str() {
        "fibonacci" => {
            let n = value.as_i64().ok_or(ApiError::InvalidFibonacciInput)?;
            let series = numeric::fibonacci(n).map_err(overflow_to_internal)?;
            Ok(json!(series))
        }
        "prime" => {
            let values = integer_array(value).ok_or(ApiError::InvalidPrimeInput)?;
            Ok(json!(numeric::filter_primes(&values)))
        }
        "lcm" => {
            let values = integer_array(value).ok_or(ApiError::InvalidLcmInput)?;
            // Empty arrays are rejected rather than left undefined.
            let result = numeric::lcm_all(&values).ok_or(ApiError::InvalidLcmInput)?;
            Ok(json!(result.map_err(overflow_to_internal)?))
        }
        "hcf" => {
            let values = integer_array(value).ok_or(ApiError::InvalidHcfInput)?;
            let result = numeric::hcf_all(&values).ok_or(ApiError::InvalidHcfInput)?;
            Ok(json!(result.map_err(overflow_to_internal)?))
        }
        "AI" => {
            let prompt = value.as_str().ok_or(ApiError::InvalidAiInput)?;
            Ok(json!(ask_provider(state, prompt).await))
        }
        _ => Err(ApiError::UnsupportedKey),
    }
}

/// First whitespace-delimited token of the provider's answer. Any provider
/// failure is absorbed here and replaced with the fallback city.
async fn ask_provider(state: &AppState, prompt: &str) -> String {
    match state.text_provider.generate(prompt).await {
        Ok(text) => text
            .split_whitespace()
            .next()
            .unwrap_or(AI_EMPTY_DEFAULT)
            .to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "text provider failed, substituting fallback");
            AI_FALLBACK.to_string()
        }
    }
}

fn integer_array(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(Value::as_i64).collect()
}

fn overflow_to_internal(err: NumericError) -> ApiError {
    ApiError::Internal(anyhow::Error::new(err))
}
