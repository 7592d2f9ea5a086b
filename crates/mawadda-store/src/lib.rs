pub mod mem;
pub mod rules;
pub mod seed;
pub mod sqlite;

use anyhow::Result;
use uuid::Uuid;

use mawadda_types::models::{Achievement, Favorite, Message, NewMessage, UserStats};

pub use mem::MemStore;
pub use sqlite::SqliteStore;

/// The repository seam: everything the HTTP layer needs from a backend.
///
/// Reads return `Ok(None)` or an empty vector when there is no data;
/// backend failures come back as errors and the caller maps them to a
/// generic HTTP 500.
pub trait Storage: Send + Sync {
    /// Short backend name for the health endpoint ("memory" or "sqlite").
    fn backend(&self) -> &'static str;

    fn random_message(&self) -> Result<Option<Message>>;
    fn message(&self, id: Uuid) -> Result<Option<Message>>;
    /// All messages, newest first.
    fn all_messages(&self) -> Result<Vec<Message>>;
    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>>;
    fn create_message(&self, new: NewMessage) -> Result<Message>;

    fn user_stats(&self) -> Result<UserStats>;
    /// Adds `amount` hearts unless the grant falls inside the cooldown
    /// window, in which case the stats come back unchanged.
    fn increment_hearts(&self, amount: i64) -> Result<UserStats>;
    /// Registers a message view: streak continuation/reset, `last_visit`,
    /// and the viewed counter.
    fn update_streak(&self) -> Result<UserStats>;

    fn add_favorite(&self, message_id: Uuid) -> Result<Favorite>;
    /// Favorites in insertion order (oldest first).
    fn favorites(&self) -> Result<Vec<Favorite>>;
    /// Removes one favorite for `message_id`. Returns whether one existed.
    fn remove_favorite(&self, message_id: Uuid) -> Result<bool>;

    fn achievements(&self) -> Result<Vec<Achievement>>;
    /// Unlocks the named achievement if it exists and is still locked.
    fn unlock_achievement(&self, name: &str) -> Result<Option<Achievement>>;
}
