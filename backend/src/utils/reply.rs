use common::errors::ApiError;
use serde::Serialize;
use warp::http::header::{HeaderValue, CONTENT_TYPE};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

pub fn error_reply(status: StatusCode, message: &str) -> Response {
    ApiError::new_with_message_and_status(message, status).into_response()
}

/// Pretty-printed JSON reply with the given status.
pub fn json_with_status<T>(status: StatusCode, json: &T) -> Response
where
    T: Serialize,
{
    let body = match serde_json::to_string_pretty(json) {
        Ok(body) => body,
        Err(e) => return error_reply(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    };

    let mut response = Response::new(body.into());
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
