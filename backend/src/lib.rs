pub mod config;
pub mod macros;
pub mod routes;
pub mod services;
pub mod utils;

pub use config::Config;

use common::errors::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::convert::Infallible;
use std::str::FromStr;
use utils::error_reply;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

pub fn setup_logger(config: &Config) -> anyhow::Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.log_level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(std::io::stdout());

    if let Some(path) = &config.log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

/// Opens the pool and applies the embedded migrations.
///
/// An in-memory database lives only as long as its connection, so the pool
/// is pinned to a single connection that is never recycled.
pub async fn setup_database(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// warp cannot allow every request header, so this lists the ones browsers
/// and HTTP clients send.
const CORS_HEADERS: &[&str] = &[
    "accept",
    "accept-language",
    "authorization",
    "cache-control",
    "content-language",
    "content-type",
    "origin",
    "pragma",
    "x-requested-with",
];

pub fn api(pool: SqlitePool) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    routes::message::routes(pool)
        .recover(handle_rejection)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_methods(vec![
                    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS",
                ])
                .allow_headers(CORS_HEADERS.iter().copied()),
        )
        .with(warp::log("backend::api"))
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if err.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "Not found"));
    }

    if let Some(e) = err.find::<ApiError>() {
        return Ok(e.clone().into_response());
    }

    // body errors first: a rejected body on one route is combined with
    // `MethodNotAllowed` from the routes sharing its path
    let (code, message) = crate::rejection_status!(err;
        warp::body::BodyDeserializeError => StatusCode::INTERNAL_SERVER_ERROR,
        warp::reject::PayloadTooLarge => StatusCode::BAD_REQUEST,
        warp::reject::LengthRequired => StatusCode::BAD_REQUEST,
        warp::reject::UnsupportedMediaType => StatusCode::BAD_REQUEST,
        warp::reject::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
    )
    .unwrap_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    });

    if code.is_server_error() {
        log::error!("unhandled rejection: {}", message);
    }

    Ok(error_reply(code, &message))
}
