use crate::services;
use crate::utils::{
    error_reply, json_body, json_with_status, raw_body, with_db, with_transaction,
};
use crate::value_or_404;
use anyhow::anyhow;
use common::payloads::{CreateMessage, DeleteConfirmation, UpdateMessage};
use sqlx::SqlitePool;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::Filter;

pub const MISSING_FIELDS: &str = "Missing body or username";
pub const MESSAGE_NOT_FOUND: &str = "Message not found";

async fn get_messages(pool: SqlitePool) -> Result<impl warp::Reply, warp::Rejection> {
    with_transaction(pool, |conn| {
        Box::pin(async move {
            let messages = services::message::get_all(conn).await?;

            Ok::<_, anyhow::Error>(json_with_status(StatusCode::OK, &messages))
        })
    })
    .await
}

async fn create_message(
    data: CreateMessage,
    pool: SqlitePool,
) -> Result<impl warp::Reply, warp::Rejection> {
    with_transaction(pool, move |conn| {
        Box::pin(async move {
            let message = match data.into_new_message() {
                Some(message) => message,
                None => return Ok(error_reply(StatusCode::BAD_REQUEST, MISSING_FIELDS)),
            };

            let message = services::message::create(conn, message).await?;

            Ok::<_, anyhow::Error>(json_with_status(StatusCode::CREATED, &message))
        })
    })
    .await
}

async fn update_message(
    id: i64,
    payload: Bytes,
    pool: SqlitePool,
) -> Result<impl warp::Reply, warp::Rejection> {
    with_transaction(pool, move |conn| {
        Box::pin(async move {
            // an unknown id is a 404 whatever the payload looks like
            let message = value_or_404!(
                services::message::get(&mut *conn, id).await?,
                MESSAGE_NOT_FOUND
            );

            let data: UpdateMessage = serde_json::from_slice(&payload)
                .map_err(|e| anyhow!("Request body deserialize error: {}", e))?;

            // without a new body there is nothing to change, the message is
            // returned as stored
            let message = match data.body {
                Some(body) => value_or_404!(
                    services::message::update(conn, id, &body).await?,
                    MESSAGE_NOT_FOUND
                ),
                None => message,
            };

            Ok::<_, anyhow::Error>(json_with_status(StatusCode::OK, &message))
        })
    })
    .await
}

async fn delete_message(id: i64, pool: SqlitePool) -> Result<impl warp::Reply, warp::Rejection> {
    with_transaction(pool, move |conn| {
        Box::pin(async move {
            if !services::message::delete(conn, id).await? {
                return Ok(error_reply(StatusCode::NOT_FOUND, MESSAGE_NOT_FOUND));
            }

            Ok::<_, anyhow::Error>(json_with_status(
                StatusCode::OK,
                &DeleteConfirmation::new(),
            ))
        })
    })
    .await
}

pub fn routes(
    pool: SqlitePool,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let get_messages = warp::path!("messages")
        .and(warp::get())
        .and(with_db(pool.clone()))
        .and_then(get_messages);

    let create_message = warp::path!("messages")
        .and(warp::post())
        .and(json_body::<CreateMessage>())
        .and(with_db(pool.clone()))
        .and_then(create_message);

    let update_message = warp::path!("messages" / i64)
        .and(warp::patch())
        .and(raw_body())
        .and(with_db(pool.clone()))
        .and_then(update_message);

    let delete_message = warp::path!("messages" / i64)
        .and(warp::delete())
        .and(with_db(pool))
        .and_then(delete_message);

    get_messages
        .or(create_message)
        .or(update_message)
        .or(delete_message)
}
