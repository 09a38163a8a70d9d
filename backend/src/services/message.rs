use chrono::{DateTime, Utc};
use common::{timestamp, Message, NewMessage};
use sqlx::{FromRow, SqliteConnection};

#[derive(FromRow, Debug)]
struct ReturnedMessage {
    id: i64,
    body: String,
    username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReturnedMessage> for Message {
    fn from(row: ReturnedMessage) -> Self {
        Message {
            id: row.id,
            body: row.body,
            username: row.username,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub async fn create(db: &mut SqliteConnection, message: NewMessage) -> anyhow::Result<Message> {
    let NewMessage {
        body,
        username,
        created_at,
        updated_at,
    } = message;

    let inserted = sqlx::query_as::<_, ReturnedMessage>(
        r#"
            insert into messages(body, username, created_at, updated_at)
            values (?, ?, ?, ?)
            returning id, body, username, created_at, updated_at;
        "#,
    )
    .bind(body)
    .bind(username)
    .bind(timestamp::format(&created_at))
    .bind(timestamp::format(&updated_at))
    .fetch_one(db)
    .await?;

    log::debug!("created message {} by {}", inserted.id, inserted.username);

    Ok(inserted.into())
}

/// Every message, oldest first. Messages created in the same microsecond
/// keep their insertion order.
pub async fn get_all(db: &mut SqliteConnection) -> anyhow::Result<Vec<Message>> {
    let messages = sqlx::query_as::<_, ReturnedMessage>(
        r#"
            select id, body, username, created_at, updated_at
            from messages
            order by created_at, id;
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(messages.into_iter().map(Message::from).collect())
}

pub async fn get(db: &mut SqliteConnection, id: i64) -> anyhow::Result<Option<Message>> {
    let message = sqlx::query_as::<_, ReturnedMessage>(
        r#"
            select id, body, username, created_at, updated_at
            from messages
            where id = ?;
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(message.map(Message::from))
}

/// Replaces the body and refreshes `updated_at`, never moving it before
/// `created_at`. Returns `None` when there is no message with `id`.
pub async fn update(
    db: &mut SqliteConnection,
    id: i64,
    body: &str,
) -> anyhow::Result<Option<Message>> {
    let updated_at = timestamp::now();

    let updated = sqlx::query_as::<_, ReturnedMessage>(
        r#"
            update messages
            set body       = ?,
                updated_at = max(?, created_at)
            where id = ?
            returning id, body, username, created_at, updated_at;
        "#,
    )
    .bind(body)
    .bind(timestamp::format(&updated_at))
    .bind(id)
    .fetch_optional(db)
    .await?;

    if updated.is_some() {
        log::debug!("updated message {}", id);
    }

    Ok(updated.map(Message::from))
}

/// Returns whether a message was removed.
pub async fn delete(db: &mut SqliteConnection, id: i64) -> anyhow::Result<bool> {
    let result = sqlx::query("delete from messages where id = ?;")
        .bind(id)
        .execute(db)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        log::debug!("deleted message {}", id);
    }

    Ok(deleted)
}
