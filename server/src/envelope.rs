use crate::identity::Identity;
use classifier::Classification;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /bfhl` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub classification: Classification,
}

impl SuccessEnvelope {
    pub fn new(identity: &Identity, classification: Classification) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            classification,
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEnvelope {
    pub is_success: bool,
    pub error: String,
}

impl FailureEnvelope {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            is_success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCode {
    pub operation_code: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier::{classify, Token};

    #[test]
    fn test_success_envelope_is_flat() {
        let identity = Identity {
            user_id: "john_doe_17091999".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
        };
        let result = classify(&[Token::from("a"), Token::from("2")]);

        let json = serde_json::to_value(SuccessEnvelope::new(&identity, result)).unwrap();

        assert_eq!(json["is_success"], true);
        assert_eq!(json["user_id"], "john_doe_17091999");
        assert_eq!(json["email"], "john@xyz.com");
        assert_eq!(json["roll_number"], "ABCD123");
        assert_eq!(json["even_numbers"], serde_json::json!(["2"]));
        assert_eq!(json["alphabets"], serde_json::json!(["A"]));
        assert_eq!(json["sum"], "2");
        assert_eq!(json["concat_string"], "A");
        assert!(json.get("classification").is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let json = serde_json::to_value(FailureEnvelope::new("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "is_success": false, "error": "nope" }));
    }
}
