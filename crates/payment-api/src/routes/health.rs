//! Liveness probe for the payment service.

use axum::Json;
use axum::extract::State;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::state::AppState;

pub const STATUS_OK: &str = "ok";
pub const SERVICE_NAME: &str = "payment-service";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(serialize_with = "common::serialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl HealthResponse {
    pub fn at(timestamp: NaiveDateTime) -> Self {
        Self {
            status: STATUS_OK,
            service: SERVICE_NAME,
            timestamp,
        }
    }
}

/// GET /inner-api/payment/health — reports that the process is up.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::at(state.clock.now()))
}
