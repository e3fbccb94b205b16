use std::fmt;

use gloo::timers::callback::Timeout;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortController;

use shared::api::{
    ErrorResponse, LoginInitRequest, PredictionRequest, PredictionResponse, TokenResponse,
    VerifyOtpRequest,
};

const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// A hung request fails after this long instead of spinning forever.
const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Failure of a single exchange with the service. Every variant is scoped to
/// the current attempt; nothing here is fatal to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx status; the service's detail message, surfaced verbatim.
    Service(String),
    /// Transport failure or timeout.
    Network(String),
    /// Response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(detail) => write!(f, "{detail}"),
            Self::Network(_) => write!(f, "Network error. Please try again."),
            Self::Decode(_) => write!(f, "Unexpected response from server. Please try again."),
        }
    }
}

pub struct ApiService;

impl ApiService {
    /// Exchange an email address for a temporary login token.
    pub async fn login_init(email: &str) -> Result<String, ApiError> {
        let request = LoginInitRequest {
            email: email.to_string(),
        };
        let response: TokenResponse = post_json("/auth/login/init", &request).await?;
        Ok(response.token)
    }

    /// Exchange email + code + temporary login token for a session token.
    pub async fn verify_otp(request: &VerifyOtpRequest) -> Result<String, ApiError> {
        let response: TokenResponse = post_json("/auth/login/verify", request).await?;
        Ok(response.token)
    }

    pub async fn predict(request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        post_json("/api/predict", request).await
    }
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = format!("{API_BASE_URL}{path}");

    // Abort the fetch if the service hangs. Dropping the Timeout on a
    // completed request cancels the pending abort.
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let timeout = controller
        .clone()
        .map(|c| Timeout::new(REQUEST_TIMEOUT_MS, move || c.abort()));

    let response = Request::post(&url)
        .abort_signal(signal.as_ref())
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {e:?}")))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Request failed: {e:?}")))?;
    drop(timeout);

    if !response.ok() {
        let status = response.status();
        let detail = match response.json::<ErrorResponse>().await {
            Ok(body) => body.detail,
            Err(_) => format!("HTTP error: {status}"),
        };
        return Err(ApiError::Service(detail));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_detail_surfaces_verbatim() {
        let err = ApiError::Service("Invalid OTP".to_string());
        assert_eq!(err.to_string(), "Invalid OTP");
    }

    #[test]
    fn test_transport_and_decode_failures_stay_generic() {
        let network = ApiError::Network("connection refused".to_string());
        assert!(!network.to_string().contains("connection refused"));

        let decode = ApiError::Decode("missing field `token`".to_string());
        assert!(!decode.to_string().contains("token"));
    }
}
