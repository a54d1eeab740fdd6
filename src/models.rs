// src/models.rs
use serde::{Deserialize, Serialize};

/// Body of a stateless conversion call.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConversionRequest {
    pub source: String,
}

/// Outcome of one conversion attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionResult {
    Success { code: String, elapsed_seconds: f64 },
    Failure { message: String },
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_is_tagged_by_status() {
        let success = ConversionResult::Success { code: "f();".to_string(), elapsed_seconds: 1.5 };
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({"status": "success", "code": "f();", "elapsed_seconds": 1.5})
        );

        let failure = ConversionResult::Failure { message: "nope".to_string() };
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({"status": "failure", "message": "nope"})
        );
        assert!(!failure.is_success());
    }
}
