use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Authentication API Types
// ============================================================================

/// Body of `POST /auth/login/init`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginInitRequest {
    #[validate(custom = "crate::validate::email_shape")]
    pub email: String,
}

/// Body of `POST /auth/login/verify`.
///
/// `token` is the temporary login token issued by the init step; the service
/// binds it to the email, the client treats it as opaque.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(custom = "crate::validate::email_shape")]
    pub email: String,

    #[validate(custom = "crate::validate::otp_shape")]
    pub otp: String,

    #[validate(length(min = 1))]
    pub token: String,
}

/// Success body of both auth endpoints: a single opaque token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Failure body the service sends with any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// ============================================================================
// Prediction API Types
// ============================================================================

/// Body of `POST /api/predict`. Field names are fixed by the service,
/// including the mixed-case `HbA1c_level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub gender: f64,
    pub age: f64,
    pub hypertension: f64,
    pub heart_disease: f64,
    pub bmi: f64,
    #[serde(rename = "HbA1c_level")]
    pub hba1c_level: f64,
    pub blood_glucose_level: f64,
    pub smoking_history_numeric: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResource {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
    pub diagnosis: String,
    pub ai_resources: Vec<AiResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_init_request_validates_email() {
        let ok = LoginInitRequest {
            email: "user@example.com".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginInitRequest {
            email: "user@nodot".into(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_verify_request_validates_all_fields() {
        let ok = VerifyOtpRequest {
            email: "user@example.com".into(),
            otp: "123456".into(),
            token: "tmp123".into(),
        };
        assert!(ok.validate().is_ok());

        let short_code = VerifyOtpRequest {
            otp: "1245".into(),
            ..ok.clone()
        };
        assert!(short_code.validate().is_err());

        let missing_token = VerifyOtpRequest {
            token: String::new(),
            ..ok
        };
        assert!(missing_token.validate().is_err());
    }

    #[test]
    fn test_hba1c_field_keeps_wire_casing() {
        let request = PredictionRequest {
            gender: 1.0,
            age: 42.0,
            hypertension: 0.0,
            heart_disease: 0.0,
            bmi: 24.5,
            hba1c_level: 5.6,
            blood_glucose_level: 110.0,
            smoking_history_numeric: 2.0,
        };
        let json = serde_json::to_value(&request).expect("serializes");
        assert!(json.get("HbA1c_level").is_some());
        assert!(json.get("hba1c_level").is_none());
    }

    #[test]
    fn test_error_response_detail_round_trip() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"detail":"Invalid OTP"}"#).expect("parses");
        assert_eq!(parsed.detail, "Invalid OTP");
    }

    #[test]
    fn test_token_response_parses_service_shape() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"token":"tmp123"}"#).expect("parses");
        assert_eq!(parsed.token, "tmp123");
    }
}
