//! Timestamp utility routes
//!
//! Stateless endpoints: a static greeting and a date-to-unix/UTC
//! conversion. An unparseable date answers 200 with an error body, which
//! is the documented contract of the endpoint.

use axum::{
    extract::Path,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use exercise_tracker_shared::dates;
use exercise_tracker_shared::types::TimestampResponse;

/// GET /api/hello - static greeting
pub async fn hello() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "greeting": "hello API" }))
}

/// GET /api - current timestamp
pub async fn current_timestamp() -> Json<TimestampResponse> {
    Json(timestamp_response(Utc::now()))
}

/// GET /api/:date - parse a date string or epoch milliseconds
pub async fn timestamp_for(Path(date): Path<String>) -> Response {
    match dates::parse_instant(&date) {
        Some(instant) => Json(timestamp_response(instant)).into_response(),
        None => Json(serde_json::json!({ "error": "Invalid Date" })).into_response(),
    }
}

fn timestamp_response(instant: DateTime<Utc>) -> TimestampResponse {
    TimestampResponse {
        unix: instant.timestamp_millis(),
        utc: dates::format_rfc1123(&instant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_response_fields() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
        let response = timestamp_response(instant);
        assert_eq!(response.unix, 1_673_740_800_000);
        assert_eq!(response.utc, "Sun, 15 Jan 2023 00:00:00 GMT");
    }

    #[tokio::test]
    async fn test_timestamp_for_invalid_date_still_ok() {
        let response = timestamp_for(Path("not-a-date".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_hello_greeting() {
        let Json(body) = hello().await;
        assert_eq!(body["greeting"], "hello API");
    }
}
