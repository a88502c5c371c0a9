use crate::validation::ValidatedDeckContent;

use super::models::Deck;
use super::Db;

impl Db {
    /// All decks in insertion order.
    pub async fn decks(&self) -> Vec<Deck> {
        self.decks.read().await.clone()
    }

    pub async fn deck_by_id(&self, id: i32) -> Option<Deck> {
        self.decks
            .read()
            .await
            .iter()
            .find(|deck| deck.id == id)
            .cloned()
    }

    /// Updates the deck with a matching positive `id`, otherwise appends a new
    /// deck numbered one past the highest id in the store.
    pub async fn save_deck(
        &self,
        id: Option<i32>,
        title: String,
        content: ValidatedDeckContent,
    ) -> Deck {
        let mut decks = self.decks.write().await;

        if let Some(existing) = id
            .filter(|id| *id > 0)
            .and_then(|id| decks.iter_mut().find(|deck| deck.id == id))
        {
            existing.title = title;
            existing.content_json = content.into_inner();
            tracing::info!("deck {} updated", existing.id);
            return existing.clone();
        }

        let next_id = decks.iter().map(|deck| deck.id).max().unwrap_or(0) + 1;
        let deck = Deck {
            id: next_id,
            title,
            content_json: content.into_inner(),
        };
        decks.push(deck.clone());

        tracing::info!("deck {next_id} created");
        deck
    }

    /// Writes `deck` as-is, replacing any deck with the same id.
    ///
    /// Skips validation; only seeding and tests reach for this.
    pub async fn insert_deck_unchecked(&self, deck: Deck) {
        let mut decks = self.decks.write().await;
        match decks.iter_mut().find(|existing| existing.id == deck.id) {
            Some(existing) => *existing = deck,
            None => decks.push(deck),
        }
    }
}
