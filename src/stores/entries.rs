use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Latency;
use crate::models::{CreateEntryInput, JournalEntry, UpdateEntryInput};

/// In-memory journal entry store.
///
/// New entries are prepended, so per-user listings come back newest-first as a
/// side effect of insertion order; no sorting is performed.
pub struct EntryStore {
    entries: RwLock<Vec<JournalEntry>>,
    latency: Latency,
}

impl EntryStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            latency,
        }
    }

    /// Inserts fixture records as-is, bypassing id generation and latency.
    pub async fn seed(&self, records: Vec<JournalEntry>) {
        self.entries.write().await.extend(records);
    }

    /// Returns the entries owned by `user_id`, in collection order.
    pub async fn list_by_user(&self, user_id: &str) -> Vec<JournalEntry> {
        self.latency.simulate().await;
        self.entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<JournalEntry> {
        self.latency.simulate().await;
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    /// Stores a new entry under a freshly generated id and returns the stored
    /// record.
    pub async fn add(&self, input: CreateEntryInput) -> JournalEntry {
        self.latency.simulate().await;
        let entry = JournalEntry {
            id: format!("entry-{}", Uuid::new_v4()),
            user_id: input.user_id,
            date: input.date.unwrap_or_else(Utc::now),
            content: input.content,
            mood: input.mood,
        };
        self.entries.write().await.insert(0, entry.clone());
        entry
    }

    /// Merges the supplied fields into the entry, returning the updated record
    /// or `None` if the id is unknown.
    pub async fn update(&self, id: &str, updates: UpdateEntryInput) -> Option<JournalEntry> {
        self.latency.simulate().await;
        let mut entries = self.entries.write().await;
        let entry = entries.iter_mut().find(|entry| entry.id == id)?;

        if let Some(date) = updates.date {
            entry.date = date;
        }
        if let Some(content) = updates.content {
            entry.content = content;
        }
        if let Some(mood) = updates.mood {
            entry.mood = mood;
        }

        Some(entry.clone())
    }

    /// Total number of stored entries across all users.
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Removes the entry, returning whether anything was removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.latency.simulate().await;
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    fn input(user_id: &str, content: &str, mood: Mood) -> CreateEntryInput {
        CreateEntryInput {
            user_id: user_id.to_string(),
            date: None,
            content: content.to_string(),
            mood,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_unique_id_and_prepends() {
        let store = EntryStore::new(Latency::none());

        let first = store.add(input("u1", "first", Mood::Neutral)).await;
        let second = store.add(input("u1", "second", Mood::Happy)).await;

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);

        let listed = store.list_by_user("u1").await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_add_returns_stored_fields() {
        let store = EntryStore::new(Latency::none());

        let entry = store.add(input("u1", "hello", Mood::Happy)).await;

        assert_eq!(entry.content, "hello");
        assert_eq!(entry.mood, Mood::Happy);
        assert_eq!(entry.user_id, "u1");

        let listed = store.list_by_user("u1").await;
        assert_eq!(listed[0].id, entry.id);
    }

    #[tokio::test]
    async fn test_list_filters_by_owner() {
        let store = EntryStore::new(Latency::none());
        store.add(input("u1", "mine", Mood::Neutral)).await;
        store.add(input("u2", "theirs", Mood::Sad)).await;

        let listed = store.list_by_user("u1").await;
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|e| e.user_id == "u1"));
        assert!(store.list_by_user("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_get_and_update() {
        let store = EntryStore::new(Latency::none());
        let entry = store.add(input("u1", "draft", Mood::Neutral)).await;

        assert_eq!(store.get(&entry.id).await.unwrap().content, "draft");
        assert!(store.get("entry-missing").await.is_none());

        let updated = store
            .update(
                &entry.id,
                UpdateEntryInput {
                    date: None,
                    content: Some("final".to_string()),
                    mood: Some(Mood::Happy),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.content, "final");
        assert_eq!(updated.mood, Mood::Happy);
        assert_eq!(updated.date, entry.date);

        let missing = store
            .update(
                "entry-missing",
                UpdateEntryInput {
                    date: None,
                    content: None,
                    mood: None,
                },
            )
            .await;
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_true_exactly_once() {
        let store = EntryStore::new(Latency::none());
        let entry = store.add(input("u1", "gone soon", Mood::Sad)).await;

        assert!(store.delete(&entry.id).await);
        assert!(!store.delete(&entry.id).await);
        assert!(store.get(&entry.id).await.is_none());
    }
}
