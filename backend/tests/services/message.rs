use crate::{db, send_message};
use backend::services::message as message_service;
use chrono::Duration;
use common::{timestamp, NewMessage};

#[tokio::test]
async fn test_get_returns_stored_message() {
    db(|pool| {
        Box::pin(async move {
            let message = send_message(&pool, "Hello 👋", "Liza").await;

            let mut conn = pool.acquire().await.expect("can't acquire pool");
            let found = message_service::get(&mut conn, message.id)
                .await
                .expect("failed to query")
                .expect("message should exist");

            assert_eq!(found.id, message.id);
            assert_eq!(found.body, "Hello 👋");
            assert_eq!(found.username, "Liza");
            assert_eq!(found.created_at, message.created_at);
            assert_eq!(found.updated_at, message.updated_at);
        })
    })
    .await
}

#[tokio::test]
async fn test_missing_rows_are_not_errors() {
    db(|pool| {
        Box::pin(async move {
            let mut conn = pool.acquire().await.expect("can't acquire pool");

            let found = message_service::get(&mut conn, 42)
                .await
                .expect("failed to query");
            let updated = message_service::update(&mut conn, 42, "Goodbye")
                .await
                .expect("failed to query");
            let deleted = message_service::delete(&mut conn, 42)
                .await
                .expect("failed to query");

            assert!(found.is_none());
            assert!(updated.is_none());
            assert!(!deleted);
            assert!(message_service::get_all(&mut conn)
                .await
                .expect("failed to query")
                .is_empty());
        })
    })
    .await
}

#[tokio::test]
async fn test_get_all_breaks_ties_by_insertion_order() {
    db(|pool| {
        Box::pin(async move {
            let mut conn = pool.acquire().await.expect("can't acquire pool");

            let now = timestamp::now();
            let earlier = now - Duration::seconds(10);
            let mut ids = Vec::new();

            for (body, created_at) in [("b", now), ("c", now), ("a", earlier)] {
                let message = message_service::create(
                    &mut conn,
                    NewMessage {
                        body: body.to_string(),
                        username: "Liza".to_string(),
                        created_at,
                        updated_at: created_at,
                    },
                )
                .await
                .expect("failed to create message");
                ids.push(message.id);
            }

            let bodies = message_service::get_all(&mut conn)
                .await
                .expect("failed to query")
                .into_iter()
                .map(|message| message.body)
                .collect::<Vec<_>>();

            assert_eq!(bodies, vec!["a", "b", "c"]);
            assert!(ids[0] < ids[1] && ids[1] < ids[2]);
        })
    })
    .await
}

#[tokio::test]
async fn test_update_refreshes_updated_at() {
    db(|pool| {
        Box::pin(async move {
            let message = send_message(&pool, "Hello", "Liza").await;

            let mut conn = pool.acquire().await.expect("can't acquire pool");
            let updated = message_service::update(&mut conn, message.id, "Goodbye")
                .await
                .expect("failed to update")
                .expect("message should exist");

            assert_eq!(updated.body, "Goodbye");
            assert_eq!(updated.username, "Liza");
            assert_eq!(updated.created_at, message.created_at);
            assert!(updated.updated_at >= message.updated_at);
        })
    })
    .await
}

#[tokio::test]
async fn test_update_never_moves_updated_at_before_created_at() {
    db(|pool| {
        Box::pin(async move {
            let mut conn = pool.acquire().await.expect("can't acquire pool");

            // a clock that was ahead when the row was written
            let created_at = timestamp::now() + Duration::hours(1);
            let message = message_service::create(
                &mut conn,
                NewMessage {
                    body: "Hello".to_string(),
                    username: "Liza".to_string(),
                    created_at,
                    updated_at: created_at,
                },
            )
            .await
            .expect("failed to create message");

            let updated = message_service::update(&mut conn, message.id, "Goodbye")
                .await
                .expect("failed to update")
                .expect("message should exist");

            assert_eq!(updated.updated_at, created_at);
        })
    })
    .await
}

#[tokio::test]
async fn test_delete_removes_row() {
    db(|pool| {
        Box::pin(async move {
            let message = send_message(&pool, "Hello", "Liza").await;

            let mut conn = pool.acquire().await.expect("can't acquire pool");
            let deleted = message_service::delete(&mut conn, message.id)
                .await
                .expect("failed to delete");
            let found = message_service::get(&mut conn, message.id)
                .await
                .expect("failed to query");

            assert!(deleted);
            assert!(found.is_none());
            assert!(!message_service::delete(&mut conn, message.id)
                .await
                .expect("failed to delete"));
        })
    })
    .await
}
