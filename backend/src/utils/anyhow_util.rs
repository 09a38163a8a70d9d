use common::errors::ApiError;

/// Turns a handler error into the JSON error body sent to the client.
///
/// An `ApiError` keeps its own status; anything else is an infrastructure
/// failure and becomes a 500.
pub fn from_anyhow(e: anyhow::Error) -> ApiError {
    let e = match e.downcast::<ApiError>() {
        Ok(error) => return error,
        Err(e) => e,
    };
    log::error!("request failed: {:#}", e);
    ApiError::new_with_message(&e.to_string())
}
