use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            category    TEXT NOT NULL,
            hearts      INTEGER NOT NULL DEFAULT 0,
            is_special  INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_created
            ON messages(created_at);

        -- Singleton: exactly one row, written in full on every stat change.
        CREATE TABLE IF NOT EXISTS user_stats (
            id                      TEXT PRIMARY KEY,
            total_hearts            INTEGER NOT NULL DEFAULT 0,
            current_streak          INTEGER NOT NULL DEFAULT 0,
            last_visit              TEXT,
            messages_viewed         INTEGER NOT NULL DEFAULT 0,
            favorites_count         INTEGER NOT NULL DEFAULT 0,
            last_heart_increment    TEXT
        );

        CREATE TABLE IF NOT EXISTS favorites (
            id          TEXT PRIMARY KEY,
            message_id  TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_favorites_message
            ON favorites(message_id);

        CREATE TABLE IF NOT EXISTS achievements (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL UNIQUE,
            description  TEXT NOT NULL,
            icon         TEXT NOT NULL,
            unlocked_at  TEXT
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
