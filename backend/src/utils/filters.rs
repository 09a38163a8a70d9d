use serde::Deserialize;
use sqlx::SqlitePool;
use warp::hyper::body::Bytes;
use warp::Filter;

const BODY_LIMIT: u64 = 1024 * 16;

pub fn json_body<T: for<'de> Deserialize<'de> + Send>(
) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    // When accepting a body, we want a JSON body  (and to reject huge payloads)
    warp::body::content_length_limit(BODY_LIMIT).and(warp::body::json())
}

/// The size-limited body, left unparsed for handlers that must look
/// something up before deciding whether the body matters.
pub fn raw_body() -> impl Filter<Extract = (Bytes,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(BODY_LIMIT).and(warp::body::bytes())
}

pub fn with_db(
    pool: SqlitePool,
) -> impl Filter<Extract = (SqlitePool,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || pool.clone())
}
