use super::models::Session;
use super::Db;

impl Db {
    /// All sessions in insertion order.
    pub async fn sessions(&self) -> Vec<Session> {
        self.sessions.read().await.clone()
    }

    pub async fn session_by_id(&self, id: i32) -> Option<Session> {
        self.sessions
            .read()
            .await
            .iter()
            .find(|session| session.id == id)
            .cloned()
    }
}
