use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON error body, `{"error": "..."}`, carrying the status it is sent with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}

impl ApiError {
    /// Creates a new `ApiError` with provided message and
    /// 500 [Internal Server Error][StatusCode::INTERNAL_SERVER_ERROR] error code
    pub fn new_with_message(message: &str) -> Self {
        Self::new_with_message_and_status(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Creates a new `ApiError` with provided message and status
    pub fn new_with_message_and_status(message: &str, status: StatusCode) -> Self {
        Self {
            status,
            error: message.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self)
            .expect("failed to convert to json -- should never happen");
        write!(f, "{}", json)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl warp::Reply for ApiError {
    fn into_response(self) -> warp::reply::Response {
        let mut response = warp::reply::Response::new(self.to_string().into());
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl warp::reject::Reject for ApiError {}

#[cfg(not(target_arch = "wasm32"))]
impl ApiError {
    pub fn into_rejection(self) -> warp::Rejection {
        warp::reject::custom(self)
    }
}

impl std::error::Error for ApiError {}
