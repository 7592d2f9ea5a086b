use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message categories form a closed set; the wire format is the lowercase
/// name (`"morning"`, `"dua"`, ...), which is also how the category is
/// stored in SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Morning,
    Dua,
    Missing,
    Gratitude,
    Blessing,
    Goodnight,
    Remembrance,
    Appreciation,
    Future,
    Love,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Morning => "morning",
            Category::Dua => "dua",
            Category::Missing => "missing",
            Category::Gratitude => "gratitude",
            Category::Blessing => "blessing",
            Category::Goodnight => "goodnight",
            Category::Remembrance => "remembrance",
            Category::Appreciation => "appreciation",
            Category::Future => "future",
            Category::Love => "love",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Category::Morning),
            "dua" => Ok(Category::Dua),
            "missing" => Ok(Category::Missing),
            "gratitude" => Ok(Category::Gratitude),
            "blessing" => Ok(Category::Blessing),
            "goodnight" => Ok(Category::Goodnight),
            "remembrance" => Ok(Category::Remembrance),
            "appreciation" => Ok(Category::Appreciation),
            "future" => Ok(Category::Future),
            "love" => Ok(Category::Love),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// A stored message. Immutable once created; there is no edit path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    /// Heart-value displayed on the message card, not to be confused with
    /// the user's accumulated `total_hearts`.
    pub hearts: i64,
    pub is_special: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert form of [`Message`]; the store assigns id and creation time.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub hearts: i64,
    pub is_special: bool,
}

/// The single user's gamification record. Exactly one exists per store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub id: Uuid,
    pub total_hearts: i64,
    pub current_streak: i64,
    pub last_visit: Option<DateTime<Utc>>,
    pub messages_viewed: i64,
    pub favorites_count: i64,
    pub last_heart_increment: Option<DateTime<Utc>>,
}

impl UserStats {
    /// A fresh record: no hearts, no streak, no prior visit.
    pub fn fresh(id: Uuid) -> Self {
        Self {
            id,
            total_hearts: 0,
            current_streak: 0,
            last_visit: None,
            messages_viewed: 0,
            favorites_count: 0,
            last_heart_increment: None,
        }
    }
}

/// A bookmarked message. `message_id` is a weak reference: the message may
/// have been deleted out from under it and readers must tolerate that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: Uuid,
    pub message_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// `None` means still locked.
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Insert form of [`Achievement`]; seeded achievements start locked.
#[derive(Debug, Clone)]
pub struct NewAchievement {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}
