//! Response bodies of the mock records API, other than the records themselves.
use serde::{Deserialize, Serialize};

/// Body of a `500` from `/api/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}

/// Body of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub message: String,
}

impl HealthBody {
    pub fn ok() -> Self {
        HealthBody {
            status: "ok".to_string(),
            message: "Mock API server is running".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorBody::new("Failed to read mock data")).unwrap();
        assert_eq!(body, json!({"error": "Failed to read mock data"}));
    }

    #[test]
    fn test_health_body_roundtrip() {
        let text = serde_json::to_string(&HealthBody::ok()).unwrap();
        let parsed: HealthBody = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.status, "ok");
    }
}
