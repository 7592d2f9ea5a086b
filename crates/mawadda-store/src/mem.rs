//! In-memory backend. Not safe under concurrent writers beyond what the
//! single `Mutex` provides; state is lost on restart. Intended for dev and
//! tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use mawadda_types::models::{Achievement, Favorite, Message, NewMessage, UserStats};

use crate::Storage;
use crate::{rules, seed};

struct Inner {
    messages: HashMap<Uuid, Message>,
    stats: UserStats,
    favorites: Vec<Favorite>,
    achievements: Vec<Achievement>,
}

pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        let now = Utc::now();

        let seeds = seed::messages();
        let count = seeds.len() as i64;
        // Spread creation times over the preceding days so the seed set has
        // a meaningful recency order.
        let messages: HashMap<Uuid, Message> = seeds
            .into_iter()
            .enumerate()
            .map(|(i, new)| {
                let id = Uuid::new_v4();
                let message = Message {
                    id,
                    title: new.title,
                    content: new.content,
                    category: new.category,
                    hearts: new.hearts,
                    is_special: new.is_special,
                    created_at: now - Duration::days(count - 1 - i as i64),
                };
                (id, message)
            })
            .collect();

        let achievements = seed::achievements()
            .into_iter()
            .map(|a| Achievement {
                id: Uuid::new_v4(),
                name: a.name.to_string(),
                description: a.description.to_string(),
                icon: a.icon.to_string(),
                unlocked_at: None,
            })
            .collect();

        Self {
            inner: Mutex::new(Inner {
                messages,
                stats: UserStats::fresh(Uuid::new_v4()),
                favorites: Vec::new(),
                achievements,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow!("state lock poisoned: {}", e))
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn random_message(&self) -> Result<Option<Message>> {
        let inner = self.lock()?;
        if inner.messages.is_empty() {
            return Ok(None);
        }
        let idx = rand::rng().random_range(0..inner.messages.len());
        Ok(inner.messages.values().nth(idx).cloned())
    }

    fn message(&self, id: Uuid) -> Result<Option<Message>> {
        let inner = self.lock()?;
        Ok(inner.messages.get(&id).cloned())
    }

    fn all_messages(&self) -> Result<Vec<Message>> {
        let inner = self.lock()?;
        let mut all: Vec<Message> = inner.messages.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>> {
        let mut all = self.all_messages()?;
        all.truncate(limit);
        Ok(all)
    }

    fn create_message(&self, new: NewMessage) -> Result<Message> {
        let mut inner = self.lock()?;
        let message = Message {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            category: new.category,
            hearts: new.hearts,
            is_special: new.is_special,
            created_at: Utc::now(),
        };
        inner.messages.insert(message.id, message.clone());
        Ok(message)
    }

    fn user_stats(&self) -> Result<UserStats> {
        let inner = self.lock()?;
        Ok(inner.stats.clone())
    }

    fn increment_hearts(&self, amount: i64) -> Result<UserStats> {
        let mut inner = self.lock()?;
        rules::apply_heart_grant(&mut inner.stats, amount, Utc::now());
        Ok(inner.stats.clone())
    }

    fn update_streak(&self) -> Result<UserStats> {
        let mut inner = self.lock()?;
        rules::apply_visit(&mut inner.stats, Utc::now());
        Ok(inner.stats.clone())
    }

    fn add_favorite(&self, message_id: Uuid) -> Result<Favorite> {
        let mut inner = self.lock()?;
        let favorite = Favorite {
            id: Uuid::new_v4(),
            message_id,
            created_at: Utc::now(),
        };
        inner.favorites.push(favorite.clone());
        inner.stats.favorites_count = inner.favorites.len() as i64;
        Ok(favorite)
    }

    fn favorites(&self) -> Result<Vec<Favorite>> {
        let inner = self.lock()?;
        Ok(inner.favorites.clone())
    }

    fn remove_favorite(&self, message_id: Uuid) -> Result<bool> {
        let mut inner = self.lock()?;
        match inner.favorites.iter().position(|f| f.message_id == message_id) {
            Some(pos) => {
                inner.favorites.remove(pos);
                inner.stats.favorites_count = inner.favorites.len() as i64;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn achievements(&self) -> Result<Vec<Achievement>> {
        let inner = self.lock()?;
        Ok(inner.achievements.clone())
    }

    fn unlock_achievement(&self, name: &str) -> Result<Option<Achievement>> {
        let mut inner = self.lock()?;
        for achievement in inner.achievements.iter_mut() {
            if achievement.name == name && achievement.unlocked_at.is_none() {
                achievement.unlocked_at = Some(Utc::now());
                return Ok(Some(achievement.clone()));
            }
        }
        Ok(None)
    }
}
