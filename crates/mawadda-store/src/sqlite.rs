//! SQLite backend: thin glue between the [`Storage`] trait and mawadda-db.
//! Stat updates read the singleton row, apply the rules, and write the row
//! back with a single UPDATE; no multi-statement transactions.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use mawadda_db::Database;
use mawadda_db::models::{AchievementRow, FavoriteRow, MessageRow, StatsRow};
use mawadda_types::models::{Achievement, Favorite, Message, NewMessage, UserStats};

use crate::Storage;
use crate::{rules, seed};

pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self {
            db: Database::open(path)?,
        };
        store.seed_if_empty()?;
        Ok(store)
    }

    /// In-memory database for tests.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            db: Database::open_in_memory()?,
        };
        store.seed_if_empty()?;
        Ok(store)
    }

    fn seed_if_empty(&self) -> Result<()> {
        let now = Utc::now();

        if self.db.count_messages()? == 0 {
            let seeds = seed::messages();
            let count = seeds.len() as i64;
            for (i, new) in seeds.into_iter().enumerate() {
                let created_at = now - Duration::days(count - 1 - i as i64);
                self.db.insert_message(&MessageRow {
                    id: Uuid::new_v4().to_string(),
                    title: new.title,
                    content: new.content,
                    category: new.category.as_str().to_string(),
                    hearts: new.hearts,
                    is_special: new.is_special,
                    created_at: created_at.to_rfc3339(),
                })?;
            }
            info!("Seeded {} messages", count);
        }

        if self.db.get_stats()?.is_none() {
            self.db
                .insert_stats(&stats_to_row(&UserStats::fresh(Uuid::new_v4())))?;
        }

        if self.db.count_achievements()? == 0 {
            for a in seed::achievements() {
                self.db.insert_achievement(&AchievementRow {
                    id: Uuid::new_v4().to_string(),
                    name: a.name.to_string(),
                    description: a.description.to_string(),
                    icon: a.icon.to_string(),
                    unlocked_at: None,
                })?;
            }
        }

        Ok(())
    }

    fn stats(&self) -> Result<UserStats> {
        let row = self.db.get_stats()?.context("user_stats row missing")?;
        stats_from_row(row)
    }

    /// Recomputes `favorites_count` from the favorites table, keeping the
    /// stored counter equal to the row count.
    fn sync_favorites_count(&self) -> Result<()> {
        let mut stats = self.stats()?;
        stats.favorites_count = self.db.count_favorites()?;
        self.db.update_stats(&stats_to_row(&stats))?;
        Ok(())
    }
}

impl Storage for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn random_message(&self) -> Result<Option<Message>> {
        self.db.random_message()?.map(message_from_row).transpose()
    }

    fn message(&self, id: Uuid) -> Result<Option<Message>> {
        self.db
            .message_by_id(&id.to_string())?
            .map(message_from_row)
            .transpose()
    }

    fn all_messages(&self) -> Result<Vec<Message>> {
        self.db
            .all_messages()?
            .into_iter()
            .map(message_from_row)
            .collect()
    }

    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>> {
        self.db
            .recent_messages(limit.min(u32::MAX as usize) as u32)?
            .into_iter()
            .map(message_from_row)
            .collect()
    }

    fn create_message(&self, new: NewMessage) -> Result<Message> {
        let message = Message {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            category: new.category,
            hearts: new.hearts,
            is_special: new.is_special,
            created_at: Utc::now(),
        };
        self.db.insert_message(&MessageRow {
            id: message.id.to_string(),
            title: message.title.clone(),
            content: message.content.clone(),
            category: message.category.as_str().to_string(),
            hearts: message.hearts,
            is_special: message.is_special,
            created_at: message.created_at.to_rfc3339(),
        })?;
        Ok(message)
    }

    fn user_stats(&self) -> Result<UserStats> {
        self.stats()
    }

    fn increment_hearts(&self, amount: i64) -> Result<UserStats> {
        let mut stats = self.stats()?;
        if rules::apply_heart_grant(&mut stats, amount, Utc::now()) {
            self.db.update_stats(&stats_to_row(&stats))?;
        }
        Ok(stats)
    }

    fn update_streak(&self) -> Result<UserStats> {
        let mut stats = self.stats()?;
        rules::apply_visit(&mut stats, Utc::now());
        self.db.update_stats(&stats_to_row(&stats))?;
        Ok(stats)
    }

    fn add_favorite(&self, message_id: Uuid) -> Result<Favorite> {
        let favorite = Favorite {
            id: Uuid::new_v4(),
            message_id,
            created_at: Utc::now(),
        };
        self.db.insert_favorite(&FavoriteRow {
            id: favorite.id.to_string(),
            message_id: favorite.message_id.to_string(),
            created_at: favorite.created_at.to_rfc3339(),
        })?;
        self.sync_favorites_count()?;
        Ok(favorite)
    }

    fn favorites(&self) -> Result<Vec<Favorite>> {
        self.db
            .list_favorites()?
            .into_iter()
            .map(favorite_from_row)
            .collect()
    }

    fn remove_favorite(&self, message_id: Uuid) -> Result<bool> {
        let removed = self.db.delete_favorite_by_message(&message_id.to_string())?;
        if removed {
            self.sync_favorites_count()?;
        }
        Ok(removed)
    }

    fn achievements(&self) -> Result<Vec<Achievement>> {
        self.db
            .list_achievements()?
            .into_iter()
            .map(achievement_from_row)
            .collect()
    }

    fn unlock_achievement(&self, name: &str) -> Result<Option<Achievement>> {
        self.db
            .unlock_achievement(name, &Utc::now().to_rfc3339())?
            .map(achievement_from_row)
            .transpose()
    }
}

// -- Row conversions --

fn parse_ts(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("bad timestamp in database: {}", s))
}

fn parse_opt_ts(s: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    s.map(parse_ts).transpose()
}

fn message_from_row(row: MessageRow) -> Result<Message> {
    Ok(Message {
        id: row.id.parse().context("bad message id")?,
        title: row.title,
        content: row.content,
        category: row.category.parse()?,
        hearts: row.hearts,
        is_special: row.is_special,
        created_at: parse_ts(&row.created_at)?,
    })
}

fn favorite_from_row(row: FavoriteRow) -> Result<Favorite> {
    Ok(Favorite {
        id: row.id.parse().context("bad favorite id")?,
        message_id: row.message_id.parse().context("bad message id")?,
        created_at: parse_ts(&row.created_at)?,
    })
}

fn achievement_from_row(row: AchievementRow) -> Result<Achievement> {
    Ok(Achievement {
        id: row.id.parse().context("bad achievement id")?,
        name: row.name,
        description: row.description,
        icon: row.icon,
        unlocked_at: parse_opt_ts(row.unlocked_at.as_deref())?,
    })
}

fn stats_from_row(row: StatsRow) -> Result<UserStats> {
    Ok(UserStats {
        id: row.id.parse().context("bad stats id")?,
        total_hearts: row.total_hearts,
        current_streak: row.current_streak,
        last_visit: parse_opt_ts(row.last_visit.as_deref())?,
        messages_viewed: row.messages_viewed,
        favorites_count: row.favorites_count,
        last_heart_increment: parse_opt_ts(row.last_heart_increment.as_deref())?,
    })
}

fn stats_to_row(stats: &UserStats) -> StatsRow {
    StatsRow {
        id: stats.id.to_string(),
        total_hearts: stats.total_hearts,
        current_streak: stats.current_streak,
        last_visit: stats.last_visit.map(|t| t.to_rfc3339()),
        messages_viewed: stats.messages_viewed,
        favorites_count: stats.favorites_count,
        last_heart_increment: stats.last_heart_increment.map(|t| t.to_rfc3339()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mawadda_types::models::Category;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    #[test]
    fn seeds_once_and_round_trips_models() {
        let store = store();
        let messages = store.all_messages().unwrap();
        assert_eq!(messages.len(), 10);
        for pair in messages.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }

        let achievements = store.achievements().unwrap();
        assert_eq!(achievements.len(), 8);
        assert!(achievements.iter().all(|a| a.unlocked_at.is_none()));

        let stats = store.user_stats().unwrap();
        assert_eq!(stats.total_hearts, 0);
        assert!(stats.last_visit.is_none());
    }

    #[test]
    fn stat_updates_persist_across_reads() {
        let store = store();
        store.update_streak().unwrap();
        store.increment_hearts(3).unwrap();

        let stats = store.user_stats().unwrap();
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.messages_viewed, 1);
        assert_eq!(stats.total_hearts, 3);
        assert!(stats.last_visit.is_some());

        // Second grant lands inside the cooldown window.
        let stats = store.increment_hearts(5).unwrap();
        assert_eq!(stats.total_hearts, 3);
    }

    #[test]
    fn favorites_count_tracks_the_table() {
        let store = store();
        let messages = store.all_messages().unwrap();

        store.add_favorite(messages[0].id).unwrap();
        store.add_favorite(messages[1].id).unwrap();
        assert_eq!(store.user_stats().unwrap().favorites_count, 2);

        assert!(store.remove_favorite(messages[0].id).unwrap());
        assert_eq!(store.user_stats().unwrap().favorites_count, 1);
        assert!(!store.remove_favorite(messages[0].id).unwrap());
        assert_eq!(store.user_stats().unwrap().favorites_count, 1);

        let favorites = store.favorites().unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].message_id, messages[1].id);
    }

    #[test]
    fn random_message_draws_from_the_seed_set() {
        let store = store();
        let message = store.random_message().unwrap().unwrap();
        assert!(store.message(message.id).unwrap().is_some());
    }

    #[test]
    fn created_message_is_most_recent() {
        let store = store();
        let created = store
            .create_message(NewMessage {
                title: "Habibti".to_string(),
                content: "A note of my own".to_string(),
                category: Category::Love,
                hearts: 2,
                is_special: true,
            })
            .unwrap();

        let recent = store.recent_messages(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id, created.id);
    }

    #[test]
    fn unlock_achievement_persists_and_is_one_shot() {
        let store = store();
        let unlocked = store
            .unlock_achievement(seed::FIRST_MESSAGE_ACHIEVEMENT)
            .unwrap()
            .unwrap();
        assert!(unlocked.unlocked_at.is_some());
        assert!(
            store
                .unlock_achievement(seed::FIRST_MESSAGE_ACHIEVEMENT)
                .unwrap()
                .is_none()
        );

        let achievements = store.achievements().unwrap();
        let row = achievements
            .iter()
            .find(|a| a.name == seed::FIRST_MESSAGE_ACHIEVEMENT)
            .unwrap();
        assert!(row.unlocked_at.is_some());
    }
}
