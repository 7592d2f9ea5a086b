use anyhow::Result;
use rusqlite::{OptionalExtension, params};

use crate::Database;
use crate::models::{AchievementRow, FavoriteRow, MessageRow, StatsRow};

impl Database {
    // -- Messages --

    pub fn insert_message(&self, row: &MessageRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (id, title, content, category, hearts, is_special, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    row.id,
                    row.title,
                    row.content,
                    row.category,
                    row.hearts,
                    row.is_special,
                    row.created_at
                ],
            )?;
            Ok(())
        })
    }

    pub fn message_by_id(&self, id: &str) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("{MESSAGE_COLUMNS} WHERE id = ?1"),
                    [id],
                    map_message,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn random_message(&self) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("{MESSAGE_COLUMNS} ORDER BY RANDOM() LIMIT 1"),
                    [],
                    map_message,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn recent_messages(&self, limit: u32) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("{MESSAGE_COLUMNS} ORDER BY created_at DESC LIMIT ?1"))?;
            let rows = stmt
                .query_map([limit], map_message)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn all_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{MESSAGE_COLUMNS} ORDER BY created_at DESC"))?;
            let rows = stmt
                .query_map([], map_message)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn count_messages(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let n = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
            Ok(n)
        })
    }

    // -- User stats --

    pub fn get_stats(&self) -> Result<Option<StatsRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, total_hearts, current_streak, last_visit, messages_viewed,
                            favorites_count, last_heart_increment
                     FROM user_stats LIMIT 1",
                    [],
                    |row| {
                        Ok(StatsRow {
                            id: row.get(0)?,
                            total_hearts: row.get(1)?,
                            current_streak: row.get(2)?,
                            last_visit: row.get(3)?,
                            messages_viewed: row.get(4)?,
                            favorites_count: row.get(5)?,
                            last_heart_increment: row.get(6)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn insert_stats(&self, row: &StatsRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO user_stats (id, total_hearts, current_streak, last_visit,
                                         messages_viewed, favorites_count, last_heart_increment)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    row.id,
                    row.total_hearts,
                    row.current_streak,
                    row.last_visit,
                    row.messages_viewed,
                    row.favorites_count,
                    row.last_heart_increment
                ],
            )?;
            Ok(())
        })
    }

    /// Full-row overwrite: a single statement, so the store never leaves the
    /// singleton half-updated.
    pub fn update_stats(&self, row: &StatsRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE user_stats
                 SET total_hearts = ?2, current_streak = ?3, last_visit = ?4,
                     messages_viewed = ?5, favorites_count = ?6, last_heart_increment = ?7
                 WHERE id = ?1",
                params![
                    row.id,
                    row.total_hearts,
                    row.current_streak,
                    row.last_visit,
                    row.messages_viewed,
                    row.favorites_count,
                    row.last_heart_increment
                ],
            )?;
            Ok(())
        })
    }

    // -- Favorites --

    pub fn insert_favorite(&self, row: &FavoriteRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO favorites (id, message_id, created_at) VALUES (?1, ?2, ?3)",
                params![row.id, row.message_id, row.created_at],
            )?;
            Ok(())
        })
    }

    pub fn list_favorites(&self) -> Result<Vec<FavoriteRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, message_id, created_at FROM favorites ORDER BY created_at",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(FavoriteRow {
                        id: row.get(0)?,
                        message_id: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Deletes the oldest favorite referencing `message_id`. Returns whether
    /// a row was removed.
    pub fn delete_favorite_by_message(&self, message_id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let n = conn.execute(
                "DELETE FROM favorites WHERE id =
                     (SELECT id FROM favorites WHERE message_id = ?1
                      ORDER BY created_at LIMIT 1)",
                [message_id],
            )?;
            Ok(n > 0)
        })
    }

    pub fn count_favorites(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let n = conn.query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))?;
            Ok(n)
        })
    }

    // -- Achievements --

    pub fn insert_achievement(&self, row: &AchievementRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO achievements (id, name, description, icon, unlocked_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![row.id, row.name, row.description, row.icon, row.unlocked_at],
            )?;
            Ok(())
        })
    }

    pub fn list_achievements(&self) -> Result<Vec<AchievementRow>> {
        self.with_conn(|conn| {
            // rowid order preserves seed order
            let mut stmt = conn.prepare(
                "SELECT id, name, description, icon, unlocked_at
                 FROM achievements ORDER BY rowid",
            )?;
            let rows = stmt
                .query_map([], map_achievement)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn count_achievements(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let n = conn.query_row("SELECT COUNT(*) FROM achievements", [], |row| row.get(0))?;
            Ok(n)
        })
    }

    /// Marks a locked achievement as unlocked at `unlocked_at`. Returns the
    /// updated row, or `None` if no achievement with that name is locked.
    pub fn unlock_achievement(&self, name: &str, unlocked_at: &str) -> Result<Option<AchievementRow>> {
        self.with_conn(|conn| {
            let n = conn.execute(
                "UPDATE achievements SET unlocked_at = ?2
                 WHERE name = ?1 AND unlocked_at IS NULL",
                params![name, unlocked_at],
            )?;
            if n == 0 {
                return Ok(None);
            }
            let row = conn
                .query_row(
                    "SELECT id, name, description, icon, unlocked_at
                     FROM achievements WHERE name = ?1",
                    [name],
                    map_achievement,
                )
                .optional()?;
            Ok(row)
        })
    }
}

const MESSAGE_COLUMNS: &str =
    "SELECT id, title, content, category, hearts, is_special, created_at FROM messages";

fn map_message(row: &rusqlite::Row<'_>) -> std::result::Result<MessageRow, rusqlite::Error> {
    Ok(MessageRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        category: row.get(3)?,
        hearts: row.get(4)?,
        is_special: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn map_achievement(row: &rusqlite::Row<'_>) -> std::result::Result<AchievementRow, rusqlite::Error> {
    Ok(AchievementRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        icon: row.get(3)?,
        unlocked_at: row.get(4)?,
    })
}
