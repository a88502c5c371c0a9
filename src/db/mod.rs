// Data access layer: in-memory deck and session stores

use std::sync::Arc;

use tokio::sync::RwLock;

pub mod models;
pub use models::*;

mod deck;
mod seed;
mod session;

/// Handle to the process-wide stores.
///
/// Each collection sits behind its own lock, so every call below is atomic
/// with respect to the other calls on the same collection.
#[derive(Clone, Default)]
pub struct Db {
    decks: Arc<RwLock<Vec<Deck>>>,
    sessions: Arc<RwLock<Vec<Session>>>,
}

impl Db {
    /// Stores holding the mock decks and sessions the app starts with.
    pub fn new() -> Self {
        let db = Self::with_records(seed::decks(), seed::sessions());
        tracing::info!("in-memory stores seeded with mock data");
        db
    }

    pub fn with_records(decks: Vec<Deck>, sessions: Vec<Session>) -> Self {
        Self {
            decks: Arc::new(RwLock::new(decks)),
            sessions: Arc::new(RwLock::new(sessions)),
        }
    }
}
