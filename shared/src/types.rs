//! API request and response types
//!
//! The `_id` field names in responses are part of the public contract and
//! are kept via serde renames.

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

/// New user request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
}

/// User as returned by the users endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// New exercise request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddExerciseRequest {
    #[validate(length(min = 1, max = 500, message = "description must be 1-500 characters"))]
    pub description: String,
    /// Duration in seconds. Numeric strings and floats are coerced;
    /// range checking happens in `validation::validate_duration`.
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: i32,
    /// Calendar date; absent or empty means "today".
    #[serde(default)]
    pub date: Option<String>,
}

/// Exercise as returned after creation. `id` is the owning user's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i32,
    /// Calendar string, e.g. `Sun Jan 15 2023`
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Query parameters accepted by the log endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQueryParams {
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Maximum entries returned (prefix take)
    pub limit: Option<u32>,
}

/// Single entry in an exercise log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// Full log response for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Timestamp endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampResponse {
    /// Milliseconds since the Unix epoch
    pub unix: i64,
    /// RFC 1123 UTC string, e.g. `Sun, 15 Jan 2023 00:00:00 GMT`
    pub utc: String,
}

/// Accept a JSON integer, float, or numeric string for `duration`.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n,
        Raw::Float(f) => f.trunc() as i64,
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom("duration must be a number"))?
            .trunc() as i64,
    };

    i32::try_from(value).map_err(|_| de::Error::custom("duration out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serializes_underscore_id() {
        let response = UserResponse {
            username: "fcc_test".to_string(),
            id: "abc123".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["username"], "fcc_test");
        assert_eq!(json["_id"], "abc123");
    }

    #[test]
    fn duration_accepts_integer() {
        let req: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();
        assert_eq!(req.duration, 30);
        assert!(req.date.is_none());
    }

    #[test]
    fn duration_coerces_numeric_string() {
        let req: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":"45"}"#).unwrap();
        assert_eq!(req.duration, 45);
    }

    #[test]
    fn duration_truncates_float() {
        let req: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":30.9}"#).unwrap();
        assert_eq!(req.duration, 30);
    }

    #[test]
    fn duration_rejects_non_numeric_string() {
        let result: Result<AddExerciseRequest, _> =
            serde_json::from_str(r#"{"description":"run","duration":"half an hour"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn duration_range_checked_by_validation() {
        let req: AddExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":0}"#).unwrap();
        assert!(crate::validation::validate_duration(req.duration).is_err());
    }

    #[test]
    fn log_response_shape() {
        let response = LogResponse {
            username: "fcc_test".to_string(),
            id: "abc123".to_string(),
            count: 1,
            log: vec![LogEntry {
                description: "run".to_string(),
                duration: 30,
                date: "Sun Jan 15 2023".to_string(),
            }],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["log"][0]["date"], "Sun Jan 15 2023");
        assert_eq!(json["_id"], "abc123");
    }
}
