//! Database row types — these map directly to SQLite rows. Ids are UUID
//! strings and timestamps are RFC 3339 strings; parsing into domain types
//! happens in mawadda-store.

pub struct MessageRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub hearts: i64,
    pub is_special: bool,
    pub created_at: String,
}

pub struct StatsRow {
    pub id: String,
    pub total_hearts: i64,
    pub current_streak: i64,
    pub last_visit: Option<String>,
    pub messages_viewed: i64,
    pub favorites_count: i64,
    pub last_heart_increment: Option<String>,
}

pub struct FavoriteRow {
    pub id: String,
    pub message_id: String,
    pub created_at: String,
}

pub struct AchievementRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: Option<String>,
}
